use axum::extract::{Path, State};
use nutripilot_core::domain::session::ports::SessionService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{session_id}",
    tag = "session",
    summary = "Delete a session",
    responses(
        (status = 204, description = "Session deleted"),
        (status = 404, description = "Session not found")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
)]
pub async fn delete_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
