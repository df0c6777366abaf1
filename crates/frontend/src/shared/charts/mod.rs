pub mod bar_chart;
pub mod donut_chart;
pub mod geometry;
pub mod scatter_chart;

pub use bar_chart::HorizontalBarChart;
pub use donut_chart::DonutChart;
pub use scatter_chart::ScatterChart;

use contracts::shared::charts::ChartSpec;
use leptos::prelude::*;

/// Width of the SVG viewBox every chart draws into
pub const VIEW_WIDTH: f64 = 600.0;
/// Height of the SVG viewBox every chart draws into
pub const VIEW_HEIGHT: f64 = 420.0;

pub(crate) fn view_box() -> String {
    format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
}

/// `<tspan>` rows for wrapped text, the first baseline at `first_y`
pub(crate) fn text_lines(lines: Vec<String>, x: f64, first_y: f64, line_height: f64) -> impl IntoView {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            view! {
                <tspan x=format!("{:.2}", x) y=format!("{:.2}", first_y + i as f64 * line_height)>
                    {line}
                </tspan>
            }
        })
        .collect_view()
}

/// Picks the component for the chart kind
#[component]
pub fn ChartView(chart: ChartSpec) -> impl IntoView {
    let class = format!("chart-view chart-view--{}", chart.kind());
    let title = chart.title().to_string();
    let body = match chart {
        ChartSpec::HorizontalBar(spec) => view! { <HorizontalBarChart spec=spec /> }.into_any(),
        ChartSpec::Donut(spec) => view! { <DonutChart spec=spec /> }.into_any(),
        ChartSpec::Scatter(spec) => view! { <ScatterChart spec=spec /> }.into_any(),
    };

    view! {
        <div class=class aria-label=title>
            {body}
        </div>
    }
}
