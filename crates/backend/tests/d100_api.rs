//! HTTP-level tests for the sales performance dashboard API.
//!
//! Each test binds the real router to an ephemeral port and talks to it with
//! `reqwest`.

use std::path::PathBuf;

use backend::domain::a001_sales_transaction::{generate, GeneratorSettings};
use backend::routes::{configure_routes, AppState};
use contracts::dashboards::d100_sales_performance::{FilterOptions, SalesPerformanceResponse};
use contracts::shared::notice::NoticeLevel;
use reqwest::StatusCode;
use tokio::net::TcpListener;

async fn spawn_app() -> String {
    let dataset = generate(&GeneratorSettings::default()).expect("default dataset must generate");
    let app = configure_routes(
        AppState::new(dataset),
        PathBuf::from("tests/no-such-static-dir"),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port must bind");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{}", addr)
}

async fn get_dashboard(base: &str, query: &str) -> SalesPerformanceResponse {
    let response = reqwest::get(format!("{}/api/d100/sales_performance{}", base, query))
        .await
        .expect("request must succeed");
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.expect("body must be a dashboard response")
}

#[tokio::test]
async fn health_returns_ok() {
    let base = spawn_app().await;
    let body = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn filter_options_list_sentinel_then_sorted_countries() {
    let base = spawn_app().await;
    let options: FilterOptions = reqwest::get(format!("{}/api/d100/filter_options", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(options.label, "Select a Country:");
    assert_eq!(options.selected, "All Countries");
    assert_eq!(
        options.options,
        vec![
            "All Countries",
            "Australia",
            "Canada",
            "France",
            "Germany",
            "Japan",
            "Mexico",
            "UK",
            "USA"
        ]
    );
}

#[tokio::test]
async fn default_selection_is_all_countries() {
    let base = spawn_app().await;

    let implicit = get_dashboard(&base, "").await;
    let explicit = get_dashboard(&base, "?country=All%20Countries").await;

    assert_eq!(implicit.record_count, 500);
    assert_eq!(implicit.title_suffix, "All Countries");
    assert_eq!(implicit.chart_count(), 3);
    assert_eq!(implicit, explicit);
}

#[tokio::test]
async fn country_filter_narrows_the_page() {
    let base = spawn_app().await;
    let response = get_dashboard(&base, "?country=USA").await;

    assert!(response.record_count > 0 && response.record_count < 500);
    assert_eq!(response.title_suffix, "USA");
    assert_eq!(response.filter.selected, "USA");

    let table = response.top_categories.expect("table is rendered");
    assert_eq!(table.heading, "Top Categories by Orders in USA");
    assert!(table.rows.len() <= 5);
}

#[tokio::test]
async fn unknown_country_shows_warning_without_charts() {
    let base = spawn_app().await;
    let response = get_dashboard(&base, "?country=Atlantis").await;

    assert_eq!(response.record_count, 0);
    assert_eq!(response.chart_count(), 0);
    assert!(response.top_categories.is_none());
    assert_eq!(response.notices.len(), 1);
    assert_eq!(response.notices[0].level, NoticeLevel::Warning);
    assert!(response.notices[0].message.contains("Atlantis"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let base = spawn_app().await;
    let response = reqwest::get(format!("{}/missing.js", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
