use chrono::{DateTime, Utc};
use nutripilot_core::domain::{
    analysis::entities::{AnalysisResult, ScoreBand},
    session::entities::{Session, SessionStatus},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Rendering of one session's state machine. `result` and `score_band` are
/// only set on success, `error` only on error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionView {
    pub id: Uuid,
    pub status: SessionStatus,
    pub result: Option<AnalysisResult>,
    pub score_band: Option<ScoreBand>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Session> for SessionView {
    fn from(session: Session) -> Self {
        let status = session.status();
        let score_band = session.state.result().map(AnalysisResult::score_band);
        let error = session.state.error().map(str::to_string);
        let result = session.state.result().cloned();

        Self {
            id: session.id,
            status,
            result,
            score_band,
            error,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use nutripilot_core::domain::{
        analysis::entities::{InsightKind, KeyInsight, ProcessingLevel, Verdict},
        session::entities::ApplicationState,
    };

    use super::*;

    #[test]
    fn test_idle_view_is_empty() {
        let view = SessionView::from(Session::new());
        assert_eq!(view.status, SessionStatus::Idle);
        assert!(view.result.is_none());
        assert!(view.score_band.is_none());
        assert!(view.error.is_none());
    }

    #[test]
    fn test_success_view_carries_band() {
        let mut session = Session::new();
        session.state = ApplicationState::Success(AnalysisResult {
            intent: "Weight Loss".to_string(),
            summary: "Mostly sugar.".to_string(),
            verdict: Verdict::Avoid,
            health_score: 12.0,
            processing_level: ProcessingLevel::UltraProcessed,
            key_insights: vec![KeyInsight {
                kind: InsightKind::Negative,
                text: "High fructose corn syrup".to_string(),
            }],
            trade_offs: "Cheap energy, no nutrients.".to_string(),
            uncertainty: "Natural flavors unspecified.".to_string(),
        });

        let view = SessionView::from(session);
        assert_eq!(view.status, SessionStatus::Success);
        assert_eq!(view.score_band, Some(ScoreBand::Low));
        assert!(view.error.is_none());
    }

    #[test]
    fn test_error_view_carries_message() {
        let mut session = Session::new();
        session.state = ApplicationState::Error("Failed".to_string());

        let view = SessionView::from(session);
        assert_eq!(view.error.as_deref(), Some("Failed"));
        assert!(view.result.is_none());
    }
}
