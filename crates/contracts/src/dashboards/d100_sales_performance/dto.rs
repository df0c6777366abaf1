use serde::{Deserialize, Serialize};

use crate::shared::charts::ChartSpec;
use crate::shared::notice::Notice;

/// Sentinel option that disables the country filter
pub const ALL_COUNTRIES: &str = "All Countries";
pub const PAGE_TITLE: &str = "Sales Performance Dashboard";
pub const FILTER_HEADER: &str = "Filter Options";
pub const FILTER_LABEL: &str = "Select a Country:";

/// Query for the sales performance dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesPerformanceRequest {
    /// Selected option, `None` means "All Countries"
    #[serde(default)]
    pub country: Option<String>,
}

/// The single categorical filter of the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CountryFilter {
    #[default]
    AllCountries,
    Country(String),
}

impl CountryFilter {
    /// Parse a dropdown selection; empty or the sentinel selects everything
    pub fn from_selection(selection: &str) -> Self {
        let selection = selection.trim();
        if selection.is_empty() || selection == ALL_COUNTRIES {
            CountryFilter::AllCountries
        } else {
            CountryFilter::Country(selection.to_string())
        }
    }

    /// Text used in headings and notices
    pub fn label(&self) -> &str {
        match self {
            CountryFilter::AllCountries => ALL_COUNTRIES,
            CountryFilter::Country(country) => country,
        }
    }

    pub fn matches(&self, country: &str) -> bool {
        match self {
            CountryFilter::AllCountries => true,
            CountryFilter::Country(selected) => selected == country,
        }
    }
}

impl From<&SalesPerformanceRequest> for CountryFilter {
    fn from(request: &SalesPerformanceRequest) -> Self {
        request
            .country
            .as_deref()
            .map(CountryFilter::from_selection)
            .unwrap_or_default()
    }
}

/// Dropdown contents for the sidebar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub label: String,
    /// "All Countries" followed by the sorted countries of the dataset
    pub options: Vec<String>,
    pub selected: String,
}

/// Orders and revenue of one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryOrderRow {
    pub category: String,
    pub total_order: u64,
    pub total_revenue: f64,
}

/// Revenue of one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryRevenueRow {
    pub category: String,
    pub total_revenue: f64,
}

/// A chart under its section heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPanel {
    pub heading: String,
    pub chart: ChartSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCategoriesTable {
    pub heading: String,
    pub columns: Vec<String>,
    pub rows: Vec<CategoryOrderRow>,
}

/// Everything the page shows for one filter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPerformanceResponse {
    pub page_title: String,
    pub filter: FilterOptions,
    /// Selected country or "All Countries", appended to every heading
    pub title_suffix: String,
    /// Number of transactions after filtering
    pub record_count: usize,
    pub orders_chart: Option<ChartPanel>,
    pub revenue_chart: Option<ChartPanel>,
    pub scatter_chart: Option<ChartPanel>,
    pub top_categories: Option<TopCategoriesTable>,
    pub notices: Vec<Notice>,
}

impl SalesPerformanceResponse {
    pub fn chart_count(&self) -> usize {
        [&self.orders_chart, &self.revenue_chart, &self.scatter_chart]
            .iter()
            .filter(|chart| chart.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_selection() {
        assert_eq!(
            CountryFilter::from_selection(ALL_COUNTRIES),
            CountryFilter::AllCountries
        );
        assert_eq!(CountryFilter::from_selection(""), CountryFilter::AllCountries);
        assert_eq!(
            CountryFilter::from_selection("Japan"),
            CountryFilter::Country("Japan".to_string())
        );
    }

    #[test]
    fn test_filter_from_request() {
        let request = SalesPerformanceRequest { country: None };
        assert_eq!(CountryFilter::from(&request), CountryFilter::AllCountries);

        let request = SalesPerformanceRequest {
            country: Some("UK".to_string()),
        };
        let filter = CountryFilter::from(&request);
        assert_eq!(filter.label(), "UK");
        assert!(filter.matches("UK"));
        assert!(!filter.matches("USA"));
        assert!(CountryFilter::AllCountries.matches("USA"));
    }

    #[test]
    fn test_rows_use_dataframe_column_names() {
        let row = CategoryOrderRow {
            category: "Sports & Outdoors".to_string(),
            total_order: 3,
            total_revenue: 120.5,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["Category"], "Sports & Outdoors");
        assert_eq!(json["TotalOrder"], 3);
        assert_eq!(json["TotalRevenue"], 120.5);
    }
}
