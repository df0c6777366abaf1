use contracts::shared::charts::ScatterChartSpec;
use leptos::prelude::*;

use super::geometry::{format_tick, nice_ticks, wrap_label, LinearScale};
use super::{text_lines, view_box, VIEW_HEIGHT, VIEW_WIDTH};

const LEFT: f64 = 70.0;
const RIGHT: f64 = 180.0;
const TOP: f64 = 50.0;
const BOTTOM: f64 = 50.0;
const TICK_TARGET: usize = 6;
const LEGEND_CHARS: usize = 24;
const LEGEND_LINE: f64 = 13.0;
const LEGEND_GAP: f64 = 7.0;

#[derive(Debug, Clone, PartialEq)]
struct Hovered {
    x: f64,
    y: f64,
    label: String,
}

/// Revenue against quantity, one marker per order.
///
/// Hovering a marker shows its category.
#[component]
pub fn ScatterChart(spec: ScatterChartSpec) -> impl IntoView {
    let plot_left = LEFT;
    let plot_right = VIEW_WIDTH - RIGHT;
    let plot_top = TOP;
    let plot_bottom = VIEW_HEIGHT - BOTTOM;

    let (x_min, x_max) = bounds(spec.points.iter().map(|p| p.x));
    let (y_min, y_max) = bounds(spec.points.iter().map(|p| p.y));
    let x_ticks = nice_ticks(x_min.min(0.0), x_max, TICK_TARGET);
    let y_ticks = nice_ticks(y_min.min(0.0), y_max, TICK_TARGET);
    let x_scale = axis_scale(&x_ticks, (plot_left, plot_right));
    let y_scale = axis_scale(&y_ticks, (plot_bottom, plot_top));

    let hovered = RwSignal::new(None::<Hovered>);

    let x_grid = x_ticks
        .into_iter()
        .map(|tick| {
            let x = x_scale.map(tick);
            view! {
                <g class="chart__tick">
                    <line
                        x1=format!("{:.2}", x)
                        x2=format!("{:.2}", x)
                        y1=format!("{:.2}", plot_top)
                        y2=format!("{:.2}", plot_bottom)
                        stroke="#f3f4f6"
                    />
                    <text x=format!("{:.2}", x) y=format!("{:.2}", plot_bottom + 16.0) text-anchor="middle" font-size="11">
                        {format_tick(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let y_grid = y_ticks
        .into_iter()
        .map(|tick| {
            let y = y_scale.map(tick);
            view! {
                <g class="chart__tick">
                    <line
                        x1=format!("{:.2}", plot_left)
                        x2=format!("{:.2}", plot_right)
                        y1=format!("{:.2}", y)
                        y2=format!("{:.2}", y)
                        stroke="#f3f4f6"
                    />
                    <text x=format!("{:.2}", plot_left - 6.0) y=format!("{:.2}", y + 4.0) text-anchor="end" font-size="11">
                        {format_tick(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let markers = spec
        .points
        .iter()
        .map(|point| {
            let cx = x_scale.map(point.x);
            let cy = y_scale.map(point.y);
            let label = point.category.clone();
            view! {
                <circle
                    class="chart__marker"
                    cx=format!("{:.2}", cx)
                    cy=format!("{:.2}", cy)
                    r=format!("{:.2}", (point.size / 2.0).max(1.0))
                    fill=point.color.clone()
                    fill-opacity="0.7"
                    stroke="#ffffff"
                    stroke-width="0.5"
                    on:mouseenter=move |_| {
                        hovered.set(Some(Hovered { x: cx, y: cy, label: label.clone() }))
                    }
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view();

    let legend_x = plot_right + 20.0;
    let mut legend_y = plot_top + 10.0;
    let legend = spec
        .legend
        .iter()
        .map(|entry| {
            let lines = wrap_label(&entry.label, LEGEND_CHARS);
            let y = legend_y;
            legend_y += lines.len() as f64 * LEGEND_LINE + LEGEND_GAP;
            view! {
                <g class="chart__legend-item">
                    <circle cx=format!("{:.2}", legend_x + 5.0) cy=format!("{:.2}", y - 4.0) r="5" fill=entry.color.clone() />
                    <text font-size="11">
                        {text_lines(lines, legend_x + 16.0, y, LEGEND_LINE)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let tooltip = move || {
        hovered.get().map(|h| {
            let width = h.label.chars().count() as f64 * 6.5 + 16.0;
            let x = (h.x + 10.0).min(VIEW_WIDTH - width);
            let y = (h.y - 30.0).max(0.0);
            view! {
                <g class="chart__tooltip" pointer-events="none">
                    <rect
                        x=format!("{:.2}", x)
                        y=format!("{:.2}", y)
                        width=format!("{:.2}", width)
                        height="22"
                        rx="4"
                        fill="#111827"
                        fill-opacity="0.85"
                    />
                    <text x=format!("{:.2}", x + 8.0) y=format!("{:.2}", y + 15.0) font-size="11" fill="#ffffff">
                        {h.label}
                    </text>
                </g>
            }
        })
    };

    view! {
        <figure class="chart chart--scatter">
            <svg class="chart__svg" viewBox=view_box() preserveAspectRatio="xMidYMid meet" role="img">
                <text class="chart__title" x=format!("{:.2}", plot_left) y="24" font-size="15" font-weight="600">
                    {spec.title.clone()}
                </text>
                {x_grid}
                {y_grid}
                <rect
                    x=format!("{:.2}", plot_left)
                    y=format!("{:.2}", plot_top)
                    width=format!("{:.2}", plot_right - plot_left)
                    height=format!("{:.2}", plot_bottom - plot_top)
                    fill="none"
                    stroke="#9ca3af"
                />
                {markers}
                {legend}
                <text
                    x=format!("{:.2}", (plot_left + plot_right) / 2.0)
                    y=format!("{:.2}", VIEW_HEIGHT - 8.0)
                    text-anchor="middle"
                    font-size="12"
                >
                    {spec.x_axis.title.clone()}
                </text>
                <text
                    x="14"
                    y=format!("{:.2}", (plot_top + plot_bottom) / 2.0)
                    text-anchor="middle"
                    font-size="12"
                    transform=format!("rotate(-90 14 {:.2})", (plot_top + plot_bottom) / 2.0)
                >
                    {spec.y_axis.title.clone()}
                </text>
                {tooltip}
            </svg>
        </figure>
    }
}

/// Min and max of the values, `(0, 1)` when there are none
fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        (0.0, 1.0)
    }
}

fn axis_scale(ticks: &[f64], range: (f64, f64)) -> LinearScale {
    match (ticks.first(), ticks.last()) {
        (Some(first), Some(last)) => LinearScale::new((*first, *last), range),
        _ => LinearScale::new((0.0, 1.0), range),
    }
}
