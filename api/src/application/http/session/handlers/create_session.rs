use axum::extract::State;
use nutripilot_core::domain::session::ports::SessionService;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::views::SessionView,
};

#[utoipa::path(
    post,
    path = "",
    tag = "session",
    summary = "Create a session",
    description = "Creates a new analysis session in the idle state",
    responses(
        (status = 201, body = SessionView)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Response<SessionView>, ApiError> {
    let session = state
        .service
        .create_session()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(session.into()))
}
