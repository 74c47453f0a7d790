//! HTTP surface of the CFO scenario calculator

pub mod handlers;
pub mod types;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use handlers::*;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub use types::ApiState;

/// Create API router with all endpoints mounted under `/api`
pub fn create_router(state: ApiState) -> Router {
    let api = Router::new()
        .route("/health", get(health_check))
        .route("/financial-data", get(get_financial_data))
        .route("/calculate-scenario", post(calculate_scenario))
        .route("/ai-assistant", post(ask_assistant))
        .route("/export-report", post(export_report))
        .route("/usage", get(get_usage));

    Router::new()
        .nest("/api", api)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
