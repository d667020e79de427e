use axum::extract::{Path, State};
use nutripilot_core::domain::analysis::value_objects::AnalysisRequest;
use uuid::Uuid;

use crate::application::http::{
    analysis::{dispatch::dispatch_analysis, validators::AnalyzeTextRequest},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    session::views::SessionView,
};

#[utoipa::path(
    post,
    path = "/{session_id}/analysis/text",
    tag = "analysis",
    summary = "Analyze pasted label text",
    description = "Starts analyzing an ingredient list. The session moves to analyzing; poll it for the outcome.",
    responses(
        (status = 202, body = SessionView),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session is busy or not idle"),
        (status = 422, description = "Text is blank")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = AnalyzeTextRequest
)]
pub async fn analyze_text(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<SessionView>, ApiError> {
    let session =
        dispatch_analysis(&state, session_id, AnalysisRequest::from_text(payload.text)).await?;

    Ok(Response::Accepted(session.into()))
}
