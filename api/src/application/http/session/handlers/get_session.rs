use axum::extract::{Path, State};
use nutripilot_core::domain::session::ports::SessionService;
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::views::SessionView,
};

#[utoipa::path(
    get,
    path = "/{session_id}",
    tag = "session",
    summary = "Get session state",
    description = "Returns the current status of the session with its result or error",
    responses(
        (status = 200, body = SessionView),
        (status = 404, description = "Session not found")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
)]
pub async fn get_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<SessionView>, ApiError> {
    let session = state
        .service
        .get_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(session.into()))
}
