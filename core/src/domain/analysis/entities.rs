use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze ingredients. Please try again.";

/// Structured verdict returned by the model for a single label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub intent: String,
    pub summary: String,
    pub verdict: Verdict,
    pub health_score: f64,
    pub processing_level: ProcessingLevel,
    pub key_insights: Vec<KeyInsight>,
    pub trade_offs: String,
    pub uncertainty: String,
}

impl AnalysisResult {
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.health_score)
    }
}

/// Ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum Verdict {
    Excellent,
    Good,
    Fair,
    Poor,
    Avoid,
}

impl Verdict {
    pub const ALL: [Verdict; 5] = [
        Verdict::Excellent,
        Verdict::Good,
        Verdict::Fair,
        Verdict::Poor,
        Verdict::Avoid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent",
            Verdict::Good => "Good",
            Verdict::Fair => "Fair",
            Verdict::Poor => "Poor",
            Verdict::Avoid => "Avoid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ProcessingLevel {
    Unprocessed,
    #[serde(rename = "Minimally Processed")]
    MinimallyProcessed,
    Processed,
    #[serde(rename = "Ultra-Processed")]
    UltraProcessed,
}

impl ProcessingLevel {
    pub const ALL: [ProcessingLevel; 4] = [
        ProcessingLevel::Unprocessed,
        ProcessingLevel::MinimallyProcessed,
        ProcessingLevel::Processed,
        ProcessingLevel::UltraProcessed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingLevel::Unprocessed => "Unprocessed",
            ProcessingLevel::MinimallyProcessed => "Minimally Processed",
            ProcessingLevel::Processed => "Processed",
            ProcessingLevel::UltraProcessed => "Ultra-Processed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KeyInsight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Negative,
    Neutral,
}

impl InsightKind {
    pub const ALL: [InsightKind; 3] = [
        InsightKind::Positive,
        InsightKind::Negative,
        InsightKind::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Positive => "positive",
            InsightKind::Negative => "negative",
            InsightKind::Neutral => "neutral",
        }
    }
}

/// Coarse bucket of the health score, as shown on the score gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Moderate,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score > 70.0 {
            ScoreBand::High
        } else if score > 40.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisErrorKind {
    Input,
    Transport,
    Validation,
}

impl fmt::Display for AnalysisErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            AnalysisErrorKind::Input => "input",
            AnalysisErrorKind::Transport => "transport",
            AnalysisErrorKind::Validation => "validation",
        };
        f.write_str(kind)
    }
}

/// Failure of a single analysis call.
///
/// `Display` yields the message shown to users. Transport and validation
/// failures share one message; the detail is only meant for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("No input provided")]
    NoInput,

    #[error("Failed to analyze ingredients. Please try again.")]
    Transport(String),

    #[error("Failed to analyze ingredients. Please try again.")]
    Validation(String),
}

impl AnalysisError {
    pub fn kind(&self) -> AnalysisErrorKind {
        match self {
            AnalysisError::NoInput => AnalysisErrorKind::Input,
            AnalysisError::Transport(_) => AnalysisErrorKind::Transport,
            AnalysisError::Validation(_) => AnalysisErrorKind::Validation,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            AnalysisError::NoInput => None,
            AnalysisError::Transport(detail) | AnalysisError::Validation(detail) => Some(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100.0), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(70.5), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(70.0), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(41.0), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(40.0), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(0.0), ScoreBand::Low);
    }

    #[test]
    fn test_verdict_order_best_to_worst() {
        assert!(Verdict::Excellent < Verdict::Good);
        assert!(Verdict::Poor < Verdict::Avoid);
        let mut shuffled = vec![Verdict::Avoid, Verdict::Fair, Verdict::Excellent];
        shuffled.sort();
        assert_eq!(shuffled, vec![Verdict::Excellent, Verdict::Fair, Verdict::Avoid]);
    }

    #[test]
    fn test_processing_level_wire_names() {
        for level in ProcessingLevel::ALL {
            let encoded = serde_json::to_value(level).unwrap();
            assert_eq!(encoded, serde_json::json!(level.as_str()));
        }
    }

    #[test]
    fn test_error_messages_are_normalized() {
        assert_eq!(AnalysisError::NoInput.to_string(), "No input provided");
        assert_eq!(
            AnalysisError::Transport("connection refused".into()).to_string(),
            ANALYSIS_FAILED_MESSAGE
        );
        assert_eq!(
            AnalysisError::Validation("missing field `verdict`".into()).to_string(),
            ANALYSIS_FAILED_MESSAGE
        );
        assert_eq!(
            AnalysisError::Transport("connection refused".into()).detail(),
            Some("connection refused")
        );
    }
}
