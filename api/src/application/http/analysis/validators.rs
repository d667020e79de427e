use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Upper bound on an uploaded label photo.
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeTextRequest {
    #[validate(
        length(min = 1, message = "text is required"),
        custom(function = "validate_not_blank")
    )]
    pub text: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("text must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Resolve the media type of an upload, trusting a declared `image/*` type
/// and sniffing the bytes otherwise. `None` means the upload is not an image.
pub fn resolve_image_mime_type(declared: Option<&str>, data: &[u8]) -> Option<String> {
    if let Some(declared) = declared
        && declared.starts_with("image/")
    {
        return Some(declared.to_string());
    }

    infer::get(data)
        .filter(|kind| kind.matcher_type() == infer::MatcherType::Image)
        .map(|kind| kind.mime_type().to_string())
}
