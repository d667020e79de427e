use crate::application::http::{
    analysis::router::AnalysisApiDoc, sample::router::SampleApiDoc,
    session::router::SessionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriPilot API"
    ),
    nest(
        (path = "/sessions", api = SessionApiDoc),
        (path = "/sessions", api = AnalysisApiDoc),
        (path = "/samples", api = SampleApiDoc),
    )
)]
pub struct ApiDoc;
