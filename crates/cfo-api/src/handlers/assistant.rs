use crate::types::{ApiState, AssistantRequest, AssistantResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use cfo_types::ApiResponse;
use tracing::warn;

/// Ask the advisor a question. Always answers with `success: true`.
pub async fn ask_assistant(
    State(state): State<ApiState>,
    payload: Result<Json<AssistantRequest>, JsonRejection>,
) -> Json<ApiResponse<AssistantResponse>> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Unreadable assistant request: {}", rejection.body_text());
            AssistantRequest::default()
        }
    };

    let response = state
        .advisor
        .ask(
            &request.question,
            request.scenario_data.as_ref(),
            state.snapshot.get(),
        )
        .await;

    Json(ApiResponse::ok(AssistantResponse { response }))
}
