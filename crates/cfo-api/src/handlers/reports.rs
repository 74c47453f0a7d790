use crate::types::{ApiState, ExportRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use cfo_types::{ApiResponse, ReportRecord};
use tracing::warn;

const EXPORT_FAILED: &str = "Failed to export report";

/// Stamp a report for client-side rendering and count the export
pub async fn export_report(
    State(state): State<ApiState>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse<ReportRecord>>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected export request: {}", rejection.body_text());
            return (StatusCode::BAD_REQUEST, Json(ApiResponse::err(EXPORT_FAILED)));
        }
    };

    let record = state
        .reports
        .export(request.scenario_data, request.ai_summary, &state.ledger)
        .await;
    (StatusCode::OK, Json(ApiResponse::ok(record)))
}
