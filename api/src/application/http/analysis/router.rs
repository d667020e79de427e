use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    analyze_sample::{__path_analyze_sample, analyze_sample},
    analyze_text::{__path_analyze_text, analyze_text},
};
use super::validators::MAX_IMAGE_SIZE;
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

/// Room for multipart framing and the optional text field on top of the image.
const MAX_UPLOAD_BODY: usize = MAX_IMAGE_SIZE + 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_text, analyze_image, analyze_sample))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/sessions/{{session_id}}/analysis/text",
                state.args.server.root_path
            ),
            post(analyze_text),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/analysis/image",
                state.args.server.root_path
            ),
            post(analyze_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY)),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/analysis/samples/{{sample_id}}",
                state.args.server.root_path
            ),
            post(analyze_sample),
        )
}
