use std::future::Future;

use crate::domain::analysis::{
    entities::{AnalysisError, AnalysisResult},
    value_objects::{AnalysisRequest, GenerateContentRequest},
};

/// LLM Client trait for calling AI models
///
/// Implementations return the raw text of the model reply. Network and
/// status failures map to [`AnalysisError::Transport`], a reply without text
/// maps to [`AnalysisError::Validation`].
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync + 'static {
    fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> impl Future<Output = Result<String, AnalysisError>> + Send;
}

/// Service trait for label analysis
pub trait AnalysisService: Send + Sync {
    fn analyze(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResult, AnalysisError>> + Send;
}
