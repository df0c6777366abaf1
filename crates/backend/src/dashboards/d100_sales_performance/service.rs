use contracts::dashboards::d100_sales_performance::{
    CountryFilter, FilterOptions, SalesPerformanceResponse, TopCategoriesTable, ALL_COUNTRIES,
    FILTER_LABEL, PAGE_TITLE,
};
use contracts::domain::a001_sales_transaction::TransactionColumn;
use contracts::shared::notice::Notice;

use super::aggregation::{orders_by_category, revenue_by_category, top_categories};
use super::charts;
use crate::domain::a001_sales_transaction::Dataset;

pub const TOP_CATEGORIES_LIMIT: usize = 5;

/// Columns the scatter plot reads
const SCATTER_COLUMNS: [TransactionColumn; 2] =
    [TransactionColumn::Quantity, TransactionColumn::TotalRevenue];

/// Header of the per-category order count, which is not a transaction column
const TOTAL_ORDER_COLUMN: &str = "TotalOrder";

fn table_columns() -> Vec<String> {
    vec![
        TransactionColumn::Category.label().to_string(),
        TOTAL_ORDER_COLUMN.to_string(),
        TransactionColumn::TotalRevenue.label().to_string(),
    ]
}

/// Dropdown options: the sentinel followed by the dataset's countries
pub fn filter_options(dataset: &Dataset, filter: &CountryFilter) -> FilterOptions {
    let mut options = vec![ALL_COUNTRIES.to_string()];
    options.extend(dataset.countries());

    FilterOptions {
        label: FILTER_LABEL.to_string(),
        options,
        selected: filter.label().to_string(),
    }
}

/// Compute the whole page for one filter value.
///
/// Pure: the same dataset and filter always give the same response.
pub fn render(dataset: &Dataset, filter: &CountryFilter) -> SalesPerformanceResponse {
    let suffix = filter.label().to_string();
    let view = dataset.filter(filter);

    let mut response = SalesPerformanceResponse {
        page_title: PAGE_TITLE.to_string(),
        filter: filter_options(dataset, filter),
        title_suffix: suffix.clone(),
        record_count: view.len(),
        orders_chart: None,
        revenue_chart: None,
        scatter_chart: None,
        top_categories: None,
        notices: Vec::new(),
    };

    if view.is_empty() {
        response.notices.push(Notice::warning(format!(
            "No data available for {} with the current filters.",
            suffix
        )));
        return response;
    }

    let orders = orders_by_category(&view);
    let revenue = revenue_by_category(&view);

    response.orders_chart = charts::orders_chart(&orders, &suffix);
    response.revenue_chart = charts::revenue_chart(&revenue, &suffix);

    if view.has_columns(&SCATTER_COLUMNS) {
        response.scatter_chart = Some(charts::scatter_chart(&view, &suffix));
    } else {
        response.notices.push(Notice::warning(format!(
            "Cannot create Scatter Plot: '{}' or '{}' column missing.",
            TransactionColumn::TotalRevenue.label(),
            TransactionColumn::Quantity.label()
        )));
        response.notices.push(Notice::info(
            "Scatter plot not generated due to missing data or columns.",
        ));
    }

    response.top_categories = Some(TopCategoriesTable {
        heading: format!("Top Categories by Orders in {}", suffix),
        columns: table_columns(),
        rows: top_categories(&orders, TOP_CATEGORIES_LIMIT),
    });

    response
}
