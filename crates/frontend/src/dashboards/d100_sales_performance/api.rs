use contracts::dashboards::d100_sales_performance::{FilterOptions, SalesPerformanceResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;

const API_BASE: &str = "/api/d100";

/// Получить варианты фильтра по стране
pub async fn get_filter_options() -> Result<FilterOptions, String> {
    fetch_json(&api_url(&format!("{}/filter_options", API_BASE))).await
}

/// Получить данные дашборда для выбранной страны
pub async fn get_sales_performance(country: &str) -> Result<SalesPerformanceResponse, String> {
    let url = format!(
        "{}/sales_performance?country={}",
        API_BASE,
        urlencoding::encode(country)
    );
    fetch_json(&api_url(&url)).await
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}
