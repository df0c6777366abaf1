use contracts::dashboards::d100_sales_performance::{
    CategoryOrderRow, CategoryRevenueRow, ChartPanel,
};
use contracts::shared::charts::{
    qualitative, Axis, BarChartSpec, BarDatum, CategoryOrder, ChartSpec, ColorRange, ColorScale,
    DonutChartSpec, DonutSlice, LegendEntry, Margin, ScatterChartSpec, ScatterPoint, TextInfo,
    TextPosition,
};

use crate::domain::a001_sales_transaction::TransactionView;

/// Diameter of the largest scatter marker, pixels
pub const SCATTER_SIZE_MAX: f64 = 20.0;
pub const DONUT_HOLE: f64 = 0.4;

/// Horizontal bar chart of order counts; `None` when there is nothing to draw
pub fn orders_chart(rows: &[CategoryOrderRow], suffix: &str) -> Option<ChartPanel> {
    let color_range = ColorRange::from_values(rows.iter().map(|r| r.total_order as f64))?;
    let color_scale = ColorScale::Magma;

    let bars = rows
        .iter()
        .map(|row| {
            let value = row.total_order as f64;
            BarDatum {
                category: row.category.clone(),
                value,
                color: color_scale.sample(color_range.normalize(value)),
            }
        })
        .collect();

    Some(ChartPanel {
        heading: format!("Total Orders by Category in {}", suffix),
        chart: ChartSpec::HorizontalBar(BarChartSpec {
            title: "Orders by Category".to_string(),
            x_axis: Axis::numeric("Total Orders (Count)"),
            y_axis: Axis::categorical("Product Category", CategoryOrder::TotalAscending),
            bars,
            color_scale,
            color_range,
            // wide left margin for the long category names
            margin: Margin {
                l: 200,
                r: 20,
                t: 50,
                b: 50,
            },
        }),
    })
}

/// Donut chart of revenue shares; `None` when there is nothing to draw
pub fn revenue_chart(rows: &[CategoryRevenueRow], suffix: &str) -> Option<ChartPanel> {
    if rows.is_empty() {
        return None;
    }

    let total: f64 = rows.iter().map(|r| r.total_revenue).sum();
    let slices = rows
        .iter()
        .enumerate()
        .map(|(index, row)| DonutSlice {
            label: row.category.clone(),
            value: row.total_revenue,
            share: if total > 0.0 {
                row.total_revenue / total
            } else {
                0.0
            },
            color: ColorScale::RdBu.discrete(index).to_string(),
        })
        .collect();

    Some(ChartPanel {
        heading: format!("Revenue Distribution in {}", suffix),
        chart: ChartSpec::Donut(DonutChartSpec {
            title: "Revenue Distribution by Category".to_string(),
            hole: DONUT_HOLE,
            text_info: TextInfo::PercentAndLabel,
            text_position: TextPosition::Inside,
            slices,
        }),
    })
}

/// One point per transaction: quantity against revenue, coloured by category.
///
/// Colours are assigned in order of first appearance; marker area is
/// proportional to revenue.
pub fn scatter_chart(view: &TransactionView<'_>, suffix: &str) -> ChartPanel {
    let max_revenue = view
        .iter()
        .map(|r| r.total_revenue)
        .fold(0.0_f64, f64::max);

    let mut legend: Vec<LegendEntry> = Vec::new();
    let mut points = Vec::with_capacity(view.len());

    for record in view.iter() {
        let label = record.category.label();
        let color = match legend.iter().find(|entry| entry.label == label) {
            Some(entry) => entry.color.clone(),
            None => {
                let color = qualitative(legend.len()).to_string();
                legend.push(LegendEntry {
                    label: label.to_string(),
                    color: color.clone(),
                });
                color
            }
        };

        let size = if max_revenue > 0.0 {
            SCATTER_SIZE_MAX * (record.total_revenue / max_revenue).sqrt()
        } else {
            0.0
        };

        points.push(ScatterPoint {
            order_number: record.order_number,
            x: record.quantity as f64,
            y: record.total_revenue,
            category: label.to_string(),
            size,
            color,
        });
    }

    ChartPanel {
        heading: format!("Revenue vs. Quantity by Category in {}", suffix),
        chart: ChartSpec::Scatter(ScatterChartSpec {
            title: "Revenue vs. Quantity per Transaction".to_string(),
            x_axis: Axis::numeric("Quantity Sold"),
            y_axis: Axis::numeric("Total Revenue (USD)"),
            points,
            legend,
            size_max: SCATTER_SIZE_MAX,
        }),
    }
}
