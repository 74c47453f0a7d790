use crate::types::ApiState;
use axum::{extract::State, response::Json};
use cfo_types::{ApiResponse, UsageLedger};

/// Current usage counters
pub async fn get_usage(State(state): State<ApiState>) -> Json<ApiResponse<UsageLedger>> {
    Json(ApiResponse::ok(state.ledger.read().await))
}
