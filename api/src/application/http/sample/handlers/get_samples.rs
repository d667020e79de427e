use nutripilot_core::domain::analysis::samples::SAMPLE_LABELS;

use crate::application::http::{
    sample::views::SampleView,
    server::api_entities::{api_error::ApiError, response::Response},
};

#[utoipa::path(
    get,
    path = "",
    tag = "sample",
    summary = "List sample labels",
    description = "Canned ingredient lists that can be analyzed without typing",
    responses(
        (status = 200, body = Vec<SampleView>)
    ),
)]
pub async fn get_samples() -> Result<Response<Vec<SampleView>>, ApiError> {
    Ok(Response::OK(SAMPLE_LABELS.iter().map(SampleView::from).collect()))
}
