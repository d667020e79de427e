pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Label submitted for analysis. Text and image may both be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub text: Option<String>,
    pub image: Option<ImageInput>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl ImageInput {
    pub fn new(data: Vec<u8>, mime_type: Option<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.unwrap_or_else(|| DEFAULT_IMAGE_MIME_TYPE.to_string()),
        }
    }
}

impl AnalysisRequest {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            image: None,
        }
    }

    pub fn from_image(image: ImageInput) -> Self {
        Self {
            text: None,
            image: Some(image),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Text counts only when something other than whitespace was typed.
    pub fn effective_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.trim().is_empty())
    }

    pub fn effective_image(&self) -> Option<&ImageInput> {
        self.image.as_ref().filter(|image| !image.data.is_empty())
    }

    pub fn has_input(&self) -> bool {
        self.effective_text().is_some() || self.effective_image().is_some()
    }
}

/// Provider-neutral payload handed to an [`LLMClient`](super::ports::LLMClient).
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateContentRequest {
    pub system_instruction: String,
    pub parts: Vec<ContentPart>,
    pub response_schema: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    InlineImage { mime_type: String, data: Vec<u8> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_not_input() {
        assert!(!AnalysisRequest::default().has_input());
        assert!(!AnalysisRequest::from_text("   \n\t").has_input());
        assert!(AnalysisRequest::from_text(" Sugar ").has_input());
    }

    #[test]
    fn test_empty_image_is_not_input() {
        let request = AnalysisRequest::from_image(ImageInput::new(Vec::new(), None));
        assert!(!request.has_input());

        let request = AnalysisRequest::from_image(ImageInput::new(vec![0xFF, 0xD8], None));
        assert!(request.has_input());
        assert_eq!(request.effective_image().unwrap().mime_type, DEFAULT_IMAGE_MIME_TYPE);
    }
}
