use serde::{Deserialize, Serialize};

use super::palette::{ColorRange, ColorScale};

/// Order of categories along a categorical axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryOrder {
    /// Keep the order of the data series
    Trace,
    /// Smallest total nearest to the origin
    TotalAscending,
    TotalDescending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    pub category_order: CategoryOrder,
}

impl Axis {
    pub fn numeric(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category_order: CategoryOrder::Trace,
        }
    }

    pub fn categorical(title: impl Into<String>, category_order: CategoryOrder) -> Self {
        Self {
            title: title.into(),
            category_order,
        }
    }
}

/// Plot area margins in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            l: 80,
            r: 20,
            t: 50,
            b: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub category: String,
    pub value: f64,
    /// Resolved fill colour
    pub color: String,
}

/// Horizontal bar chart: value on x, category on y
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartSpec {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bars: Vec<BarDatum>,
    pub color_scale: ColorScale,
    pub color_range: ColorRange,
    pub margin: Margin,
}

impl BarChartSpec {
    /// Bars in the order they appear along the category axis, starting at the origin
    pub fn bars_in_axis_order(&self) -> Vec<&BarDatum> {
        let mut bars: Vec<&BarDatum> = self.bars.iter().collect();
        match self.y_axis.category_order {
            CategoryOrder::Trace => {}
            CategoryOrder::TotalAscending => bars.sort_by(|a, b| a.value.total_cmp(&b.value)),
            CategoryOrder::TotalDescending => bars.sort_by(|a, b| b.value.total_cmp(&a.value)),
        }
        bars
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextInfo {
    Percent,
    Label,
    PercentAndLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPosition {
    Inside,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the total, in `[0, 1]`
    pub share: f64,
    pub color: String,
}

impl DonutSlice {
    /// Slice text according to `info`, percent rounded to one decimal
    pub fn text(&self, info: TextInfo) -> String {
        let percent = format!("{:.1}%", self.share * 100.0);
        match info {
            TextInfo::Percent => percent,
            TextInfo::Label => self.label.clone(),
            TextInfo::PercentAndLabel => format!("{} {}", percent, self.label),
        }
    }
}

/// Pie chart with a hole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutChartSpec {
    pub title: String,
    /// Hole radius as a fraction of the outer radius
    pub hole: f64,
    pub text_info: TextInfo,
    pub text_position: TextPosition,
    pub slices: Vec<DonutSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub order_number: u32,
    pub x: f64,
    pub y: f64,
    /// Colour key, also shown on hover
    pub category: String,
    /// Marker diameter in pixels
    pub size: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartSpec {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub points: Vec<ScatterPoint>,
    pub legend: Vec<LegendEntry>,
    /// Diameter of the largest marker in pixels
    pub size_max: f64,
}

/// A chart of any supported kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    HorizontalBar(BarChartSpec),
    Donut(DonutChartSpec),
    Scatter(ScatterChartSpec),
}

impl ChartSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            ChartSpec::HorizontalBar(_) => "horizontal_bar",
            ChartSpec::Donut(_) => "donut",
            ChartSpec::Scatter(_) => "scatter",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ChartSpec::HorizontalBar(spec) => &spec.title,
            ChartSpec::Donut(spec) => &spec.title,
            ChartSpec::Scatter(spec) => &spec.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(category: &str, value: f64) -> BarDatum {
        BarDatum {
            category: category.to_string(),
            value,
            color: "#000000".to_string(),
        }
    }

    #[test]
    fn test_bars_in_axis_order() {
        let spec = BarChartSpec {
            title: "Orders".to_string(),
            x_axis: Axis::numeric("Count"),
            y_axis: Axis::categorical("Category", CategoryOrder::TotalAscending),
            bars: vec![bar("a", 9.0), bar("b", 2.0), bar("c", 5.0)],
            color_scale: ColorScale::Magma,
            color_range: ColorRange { min: 2.0, max: 9.0 },
            margin: Margin::default(),
        };

        let order: Vec<&str> = spec
            .bars_in_axis_order()
            .iter()
            .map(|b| b.category.as_str())
            .collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_slice_text() {
        let slice = DonutSlice {
            label: "Books".to_string(),
            value: 125.0,
            share: 0.25,
            color: "#ffffff".to_string(),
        };
        assert_eq!(slice.text(TextInfo::PercentAndLabel), "25.0% Books");
        assert_eq!(slice.text(TextInfo::Percent), "25.0%");
    }

    #[test]
    fn test_chart_spec_is_tagged_by_kind() {
        let chart = ChartSpec::Donut(DonutChartSpec {
            title: "Revenue".to_string(),
            hole: 0.4,
            text_info: TextInfo::PercentAndLabel,
            text_position: TextPosition::Inside,
            slices: vec![],
        });
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["kind"], "donut");
        assert_eq!(json["hole"], 0.4);
        assert_eq!(chart.kind(), "donut");

        let back: ChartSpec = serde_json::from_value(json).unwrap();
        assert_eq!(back, chart);
    }
}
