use axum::extract::{Path, State};
use nutripilot_core::domain::session::ports::SessionService;
use tracing::info;
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::views::SessionView,
};

#[utoipa::path(
    post,
    path = "/{session_id}/reset",
    tag = "session",
    summary = "Reset a session",
    description = "Discards the previous result or error and returns the session to idle",
    responses(
        (status = 200, body = SessionView),
        (status = 404, description = "Session not found"),
        (status = 409, description = "An analysis is in progress")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
)]
pub async fn reset_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<SessionView>, ApiError> {
    let session = state
        .service
        .reset_session(session_id)
        .await
        .map_err(ApiError::from)?;

    info!(session_id = %session_id, "Session reset");
    Ok(Response::OK(session.into()))
}
