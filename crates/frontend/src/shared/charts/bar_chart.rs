use contracts::shared::charts::BarChartSpec;
use leptos::prelude::*;

use super::geometry::{fit_font_size, format_tick, nice_ticks, wrap_label, LinearScale};
use super::{text_lines, view_box, VIEW_HEIGHT, VIEW_WIDTH};

/// Wrap width of category labels, fits the 200 px left margin at 11 px
const LABEL_CHARS: usize = 28;
const LABEL_FONT: f64 = 11.0;
const BAR_GAP: f64 = 0.2;
const TICK_TARGET: usize = 5;

/// Horizontal bars; the first bar in axis order sits at the bottom
#[component]
pub fn HorizontalBarChart(spec: BarChartSpec) -> impl IntoView {
    let margin = spec.margin;
    let left = margin.l as f64;
    let right = VIEW_WIDTH - margin.r as f64;
    let top = margin.t as f64;
    let bottom = VIEW_HEIGHT - margin.b as f64;

    let bars: Vec<_> = spec.bars_in_axis_order().into_iter().cloned().collect();
    let max_value = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    let ticks = nice_ticks(0.0, max_value, TICK_TARGET);
    let axis_max = ticks.last().copied().unwrap_or(max_value).max(1.0);
    let x_scale = LinearScale::new((0.0, axis_max), (left, right));

    let band = if bars.is_empty() {
        0.0
    } else {
        (bottom - top) / bars.len() as f64
    };
    let bar_height = band * (1.0 - BAR_GAP);

    let grid = ticks
        .into_iter()
        .map(|tick| {
            let x = x_scale.map(tick);
            view! {
                <g class="chart__tick">
                    <line
                        x1=format!("{:.2}", x)
                        x2=format!("{:.2}", x)
                        y1=format!("{:.2}", top)
                        y2=format!("{:.2}", bottom)
                        stroke="#e5e7eb"
                    />
                    <text
                        x=format!("{:.2}", x)
                        y=format!("{:.2}", bottom + 16.0)
                        text-anchor="middle"
                        font-size="11"
                    >
                        {format_tick(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let rects = bars
        .into_iter()
        .enumerate()
        .map(|(index, bar)| {
            let band_top = bottom - band * (index as f64 + 1.0);
            let y = band_top + (band - bar_height) / 2.0;
            let width = (x_scale.map(bar.value) - left).max(0.0);
            let lines = wrap_label(&bar.category, LABEL_CHARS);
            let font = fit_font_size(band, lines.len(), LABEL_FONT);
            let line_height = font * 1.2;
            let center = y + bar_height / 2.0;
            let first_y = center - (lines.len() as f64 - 1.0) * line_height / 2.0 + font / 3.0;
            view! {
                <g class="chart__bar">
                    <rect
                        x=format!("{:.2}", left)
                        y=format!("{:.2}", y)
                        width=format!("{:.2}", width)
                        height=format!("{:.2}", bar_height)
                        fill=bar.color.clone()
                    />
                    <text text-anchor="end" font-size=format!("{:.1}", font)>
                        {text_lines(lines, left - 8.0, first_y, line_height)}
                    </text>
                    <text
                        x=format!("{:.2}", left + width + 4.0)
                        y=format!("{:.2}", y + bar_height / 2.0 + 4.0)
                        font-size="10"
                        fill="#4b5563"
                    >
                        {format_tick(bar.value)}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <figure class="chart chart--bar">
            <svg class="chart__svg" viewBox=view_box() preserveAspectRatio="xMidYMid meet" role="img">
                <text class="chart__title" x=format!("{:.2}", left) y="24" font-size="15" font-weight="600">
                    {spec.title.clone()}
                </text>
                {grid}
                <line
                    x1=format!("{:.2}", left)
                    x2=format!("{:.2}", left)
                    y1=format!("{:.2}", top)
                    y2=format!("{:.2}", bottom)
                    stroke="#9ca3af"
                />
                {rects}
                <text
                    x=format!("{:.2}", (left + right) / 2.0)
                    y=format!("{:.2}", VIEW_HEIGHT - 8.0)
                    text-anchor="middle"
                    font-size="12"
                >
                    {spec.x_axis.title.clone()}
                </text>
                <text
                    x="14"
                    y=format!("{:.2}", (top + bottom) / 2.0)
                    text-anchor="middle"
                    font-size="12"
                    transform=format!("rotate(-90 14 {:.2})", (top + bottom) / 2.0)
                >
                    {spec.y_axis.title.clone()}
                </text>
            </svg>
        </figure>
    }
}
