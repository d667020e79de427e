use super::handlers::get_samples::{__path_get_samples, get_samples};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_samples))]
pub struct SampleApiDoc;

pub fn sample_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/samples", state.args.server.root_path),
        get(get_samples),
    )
}
