use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d100_sales_performance::{
    CountryFilter, FilterOptions, SalesPerformanceRequest, SalesPerformanceResponse,
};

use crate::dashboards::d100_sales_performance::service;
use crate::routes::AppState;

/// GET /api/d100/filter_options
pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptions> {
    let options = service::filter_options(&state.dataset, &CountryFilter::AllCountries);
    tracing::debug!(
        "D100 Dashboard: Returning {} filter options",
        options.options.len()
    );
    Json(options)
}

/// GET /api/d100/sales_performance?country=USA
pub async fn get_sales_performance(
    State(state): State<AppState>,
    Query(request): Query<SalesPerformanceRequest>,
) -> Json<SalesPerformanceResponse> {
    let filter = CountryFilter::from(&request);
    tracing::info!("D100 Dashboard: Rendering for '{}'", filter.label());

    let response = service::render(&state.dataset, &filter);
    tracing::info!(
        "D100 Dashboard: {} records, {} charts, {} notices",
        response.record_count,
        response.chart_count(),
        response.notices.len()
    );

    Json(response)
}
