use axum::{
    extract::{Multipart, Path, State, multipart::MultipartError},
    http::StatusCode,
};
use nutripilot_core::domain::analysis::value_objects::{AnalysisRequest, ImageInput};
use tracing::{error, warn};
use uuid::Uuid;

use crate::application::http::{
    analysis::{
        dispatch::dispatch_analysis,
        validators::{MAX_IMAGE_SIZE, resolve_image_mime_type},
    },
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::views::SessionView,
};

fn image_too_large() -> ApiError {
    ApiError::PayloadTooLarge(format!(
        "Image too large. Max size is {} bytes",
        MAX_IMAGE_SIZE
    ))
}

/// The body limit surfaces as a multipart stream error carrying 413.
fn multipart_error(context: &str, e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Rejected oversize upload: {}", e);
        return image_too_large();
    }

    error!("{}: {}", context, e);
    ApiError::BadRequest(format!("{}: {}", context, e))
}

#[utoipa::path(
    post,
    path = "/{session_id}/analysis/image",
    tag = "analysis",
    summary = "Analyze a label photo",
    description = "Starts analyzing an uploaded label image (multipart field `image`, optional `text`). The session moves to analyzing; poll it for the outcome.",
    responses(
        (status = 202, body = SessionView),
        (status = 400, description = "Missing or empty image"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session is busy or not idle"),
        (status = 413, description = "Image too large"),
        (status = 415, description = "Upload is not an image")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
)]
pub async fn analyze_image(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<SessionView>, ApiError> {
    let mut image: Option<ImageInput> = None;
    let mut text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart field", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let declared = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Failed to read image", e))?;

                if data.is_empty() {
                    return Err(ApiError::BadRequest("Image cannot be empty".to_string()));
                }

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(image_too_large());
                }

                let Some(mime_type) = resolve_image_mime_type(declared.as_deref(), &data) else {
                    warn!(declared = ?declared, "Rejected non-image upload");
                    return Err(ApiError::UnsupportedMediaType(
                        "Please upload an image file".to_string(),
                    ));
                };

                image = Some(ImageInput::new(data.to_vec(), Some(mime_type)));
            }
            "text" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("Failed to read text", e))?;
                text = Some(value);
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let request = AnalysisRequest {
        text: text.filter(|t| !t.trim().is_empty()),
        image: Some(image),
    };

    let session = dispatch_analysis(&state, session_id, request).await?;

    Ok(Response::Accepted(session.into()))
}
