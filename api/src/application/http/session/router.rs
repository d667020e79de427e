use super::handlers::{
    create_session::{__path_create_session, create_session},
    delete_session::{__path_delete_session, delete_session},
    get_session::{__path_get_session, get_session},
    reset_session::{__path_reset_session, reset_session},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_session, get_session, delete_session, reset_session))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/sessions", state.args.server.root_path),
            post(create_session),
        )
        .route(
            &format!("{}/sessions/{{session_id}}", state.args.server.root_path),
            get(get_session).delete(delete_session),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/reset", state.args.server.root_path),
            post(reset_session),
        )
}
