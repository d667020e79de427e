use crate::domain::analysis::entities::{AnalysisError, AnalysisResult};

pub const MIN_HEALTH_SCORE: f64 = 0.0;
pub const MAX_HEALTH_SCORE: f64 = 100.0;

/// Parse and validate a raw model reply.
///
/// Field presence, types and enum membership are enforced by the serde
/// derive on [`AnalysisResult`]; the score range is checked here.
pub fn parse_analysis_result(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let payload = raw.trim();
    if payload.is_empty() {
        return Err(AnalysisError::Validation("No response from AI".to_string()));
    }

    let result: AnalysisResult = serde_json::from_str(payload)
        .map_err(|e| AnalysisError::Validation(format!("Invalid analysis payload: {}", e)))?;

    if !result.health_score.is_finite()
        || !(MIN_HEALTH_SCORE..=MAX_HEALTH_SCORE).contains(&result.health_score)
    {
        return Err(AnalysisError::Validation(format!(
            "healthScore {} outside [{}, {}]",
            result.health_score, MIN_HEALTH_SCORE, MAX_HEALTH_SCORE
        )));
    }

    Ok(result)
}
