use crate::types::ApiState;
use axum::{extract::State, response::Json};
use cfo_types::{ApiResponse, FinancialSnapshot};
use tracing::info;

/// Current financial snapshot
pub async fn get_financial_data(
    State(state): State<ApiState>,
) -> Json<ApiResponse<FinancialSnapshot>> {
    info!("Fetching financial data");
    Json(ApiResponse::ok(state.snapshot.get().clone()))
}
