use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    analysis::{
        entities::AnalysisError,
        ports::LLMClient,
        schema::RESPONSE_MIME_TYPE,
        value_objects::{ContentPart, GenerateContentRequest},
    },
    common::{LLMConfig, entities::app_errors::CoreError},
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl From<ContentPart> for Part {
    fn from(part: ContentPart) -> Self {
        match part {
            ContentPart::Text(text) => Part::Text { text },
            ContentPart::InlineImage { mime_type, data } => Part::InlineData {
                inline_data: InlineData {
                    mime_type,
                    data: general_purpose::STANDARD.encode(data),
                },
            },
        }
    }
}

impl GeminiResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        (!text.is_empty()).then_some(text)
    }
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            CoreError::ExternalServiceError(format!("HTTP client error: {}", e))
        })?;

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model_name)
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, AnalysisError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                AnalysisError::Transport(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(AnalysisError::Transport(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            AnalysisError::Validation(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .into_text()
            .ok_or_else(|| AnalysisError::Validation("No response from AI".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<String, AnalysisError> {
        let request = GeminiRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part::Text {
                    text: request.system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: request.parts.into_iter().map(Part::from).collect(),
            }],
            generation_config: GenerationConfig {
                response_mime_type: RESPONSE_MIME_TYPE.to_string(),
                response_schema: request.response_schema,
            },
        };

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;
    use crate::domain::analysis::entities::AnalysisErrorKind;

    const MODEL_PATH: &str = "/models/gemini-flash-latest:generateContent";

    fn client(base_url: String) -> GeminiLLMClient {
        let mut config = LLMConfig::new("test-key");
        config.gemini_base_url = base_url;
        GeminiLLMClient::new(&config).unwrap()
    }

    fn request() -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: "Be critical.".to_string(),
            parts: vec![
                ContentPart::InlineImage {
                    mime_type: "image/png".to_string(),
                    data: b"png".to_vec(),
                },
                ContentPart::Text("Ingredients: Oats.".to_string()),
            ],
            response_schema: json!({ "type": "object" }),
        }
    }

    #[tokio::test]
    async fn test_sends_instruction_parts_and_schema() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", MODEL_PATH)
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::PartialJson(json!({
                "system_instruction": { "parts": [{ "text": "Be critical." }] },
                "contents": [{
                    "role": "user",
                    "parts": [
                        { "inline_data": { "mime_type": "image/png", "data": "cG5n" } },
                        { "text": "Ingredients: Oats." }
                    ]
                }],
                "generation_config": {
                    "response_mime_type": "application/json",
                    "response_schema": { "type": "object" }
                }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "candidates": [{
                        "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] }
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let text = client(server.url()).generate_content(request()).await.unwrap();

        assert_eq!(text, "{\"a\":1}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_transport_failure() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", MODEL_PATH)
            .with_status(429)
            .with_body("RESOURCE_EXHAUSTED")
            .create_async()
            .await;

        let err = client(server.url())
            .generate_content(request())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), AnalysisErrorKind::Transport);
        assert!(err.detail().unwrap().contains("429"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_candidates_is_validation_failure() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", MODEL_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string())
            .create_async()
            .await;

        let err = client(server.url())
            .generate_content(request())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), AnalysisErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_failure() {
        let err = client("http://127.0.0.1:9".to_string())
            .generate_content(request())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), AnalysisErrorKind::Transport);
    }
}
