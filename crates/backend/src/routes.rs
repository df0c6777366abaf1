use axum::{http::Method, middleware, routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::domain::a001_sales_transaction::Dataset;
use crate::system::middleware::request_logger;

/// State shared by all handlers; the dataset is read-only
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D100 SALES PERFORMANCE DASHBOARD
        // ========================================
        .route(
            "/api/d100/filter_options",
            get(handlers::d100_sales_performance::get_filter_options),
        )
        .route(
            "/api/d100/sales_performance",
            get(handlers::d100_sales_performance::get_sales_performance),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}
