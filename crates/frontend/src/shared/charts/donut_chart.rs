use std::f64::consts::TAU;

use contracts::shared::charts::{DonutChartSpec, TextInfo, TextPosition};
use leptos::prelude::*;

use super::geometry::{donut_slice_path, polar, slice_font_size, wrap_label};
use super::{text_lines, view_box, VIEW_HEIGHT};

const CENTER_X: f64 = 210.0;
const OUTER_RADIUS: f64 = 160.0;
const LEGEND_X: f64 = 400.0;
const LEGEND_LINE: f64 = 13.0;
const LEGEND_GAP: f64 = 9.0;
const LEGEND_CHARS: usize = 28;
const SLICE_LABEL_CHARS: usize = 12;

#[component]
pub fn DonutChart(spec: DonutChartSpec) -> impl IntoView {
    let center_y = (VIEW_HEIGHT + 30.0) / 2.0;
    let inner_radius = OUTER_RADIUS * spec.hole.clamp(0.0, 0.95);
    let text_radius = match spec.text_position {
        TextPosition::Inside => (OUTER_RADIUS + inner_radius) / 2.0,
        TextPosition::Outside => OUTER_RADIUS + 18.0,
    };

    let mut start = 0.0;
    let slices = spec
        .slices
        .iter()
        .map(|slice| {
            let end = start + slice.share.clamp(0.0, 1.0) * TAU;
            let path = donut_slice_path(CENTER_X, center_y, OUTER_RADIUS, inner_radius, start, end);
            let (text_x, text_y) = polar(CENTER_X, center_y, text_radius, (start + end) / 2.0);
            start = end;

            let percent = slice.text(TextInfo::Percent);
            let label = wrap_label(&slice.label, SLICE_LABEL_CHARS);
            let lines = match spec.text_info {
                TextInfo::Percent => vec![percent],
                TextInfo::Label => label,
                TextInfo::PercentAndLabel => std::iter::once(percent).chain(label).collect(),
            };
            let font = slice_font_size(slice.share);
            let line_height = font * 1.15;
            let first_y = text_y - (lines.len() as f64 - 1.0) * line_height / 2.0 + font / 3.0;

            view! {
                <g class="chart__slice">
                    <path d=path fill=slice.color.clone() fill-rule="evenodd" stroke="#ffffff" stroke-width="1" />
                    <text text-anchor="middle" font-size=format!("{:.1}", font) fill="#111827">
                        {text_lines(lines, text_x, first_y, line_height)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let mut legend_y = 60.0;
    let legend = spec
        .slices
        .iter()
        .map(|slice| {
            let lines = wrap_label(&slice.label, LEGEND_CHARS);
            let y = legend_y;
            legend_y += lines.len() as f64 * LEGEND_LINE + LEGEND_GAP;
            view! {
                <g class="chart__legend-item">
                    <rect x=format!("{:.2}", LEGEND_X) y=format!("{:.2}", y - 10.0) width="12" height="12" fill=slice.color.clone() />
                    <text font-size="11">
                        {text_lines(lines, LEGEND_X + 18.0, y, LEGEND_LINE)}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <figure class="chart chart--donut">
            <svg class="chart__svg" viewBox=view_box() preserveAspectRatio="xMidYMid meet" role="img">
                <text class="chart__title" x="20" y="24" font-size="15" font-weight="600">
                    {spec.title.clone()}
                </text>
                {slices}
                {legend}
            </svg>
        </figure>
    }
}
