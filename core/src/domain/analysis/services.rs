use tracing::{debug, error};

use crate::domain::{
    analysis::{
        entities::{AnalysisError, AnalysisResult},
        ports::{AnalysisService, LLMClient},
        schema::{ANALYSIS_DIRECTIVE, SYSTEM_INSTRUCTION, get_analysis_schema},
        validation::parse_analysis_result,
        value_objects::{AnalysisRequest, ContentPart, GenerateContentRequest},
    },
    common::services::Service,
    session::ports::SessionRepository,
};

/// Build the model payload: image first, then the text verbatim, then the
/// fixed directive.
pub fn build_generate_request(
    request: &AnalysisRequest,
) -> Result<GenerateContentRequest, AnalysisError> {
    if !request.has_input() {
        return Err(AnalysisError::NoInput);
    }

    let mut parts = Vec::with_capacity(3);

    if let Some(image) = request.effective_image() {
        parts.push(ContentPart::InlineImage {
            mime_type: image.mime_type.clone(),
            data: image.data.clone(),
        });
    }

    if let Some(text) = request.effective_text() {
        parts.push(ContentPart::Text(text.to_string()));
    }

    parts.push(ContentPart::Text(ANALYSIS_DIRECTIVE.to_string()));

    Ok(GenerateContentRequest {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        parts,
        response_schema: get_analysis_schema(),
    })
}

impl<LLM, SR> AnalysisService for Service<LLM, SR>
where
    LLM: LLMClient,
    SR: SessionRepository,
{
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let generate_request = build_generate_request(&request)?;

        debug!(
            has_text = request.effective_text().is_some(),
            has_image = request.effective_image().is_some(),
            "Sending label to LLM"
        );

        let outcome = match self.llm_client.generate_content(generate_request).await {
            Ok(raw_response) => parse_analysis_result(&raw_response),
            Err(e) => Err(e),
        };

        if let Err(e) = &outcome {
            error!(
                kind = %e.kind(),
                detail = e.detail().unwrap_or_default(),
                "Gemini analysis error"
            );
        }

        outcome
    }
}
