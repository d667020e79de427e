use axum::extract::{Path, State};
use nutripilot_core::domain::analysis::{samples::find_sample, value_objects::AnalysisRequest};
use uuid::Uuid;

use crate::application::http::{
    analysis::dispatch::dispatch_analysis,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::views::SessionView,
};

#[utoipa::path(
    post,
    path = "/{session_id}/analysis/samples/{sample_id}",
    tag = "analysis",
    summary = "Analyze a sample label",
    description = "Starts analyzing one of the canned example labels",
    responses(
        (status = 202, body = SessionView),
        (status = 404, description = "Session or sample not found"),
        (status = 409, description = "Session is busy or not idle")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
        ("sample_id" = String, Path, description = "Sample ID (soda, chips, candy)"),
    ),
)]
pub async fn analyze_sample(
    Path((session_id, sample_id)): Path<(Uuid, String)>,
    State(state): State<AppState>,
) -> Result<Response<SessionView>, ApiError> {
    let sample = find_sample(&sample_id)
        .ok_or_else(|| ApiError::NotFound(format!("Sample '{}' not found", sample_id)))?;

    let session =
        dispatch_analysis(&state, session_id, AnalysisRequest::from_text(sample.text)).await?;

    Ok(Response::Accepted(session.into()))
}
