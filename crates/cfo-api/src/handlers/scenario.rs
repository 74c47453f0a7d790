use crate::types::ApiState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use cfo_core::run_scenario;
use cfo_types::{ApiResponse, ScenarioComparison, ScenarioInput};
use tracing::{error, warn};

const SCENARIO_FAILED: &str = "Failed to calculate scenario";

/// Compute a what-if comparison and count the run
pub async fn calculate_scenario(
    State(state): State<ApiState>,
    payload: Result<Json<ScenarioInput>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse<ScenarioComparison>>) {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected scenario request: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::err(SCENARIO_FAILED)),
            );
        }
    };

    match run_scenario(state.snapshot.get(), &input, &state.ledger).await {
        Ok(comparison) => (StatusCode::OK, Json(ApiResponse::ok(comparison))),
        Err(e) => {
            error!("Error calculating scenario: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::err(SCENARIO_FAILED)),
            )
        }
    }
}
