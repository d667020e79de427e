use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    analysis::{
        entities::AnalysisError,
        ports::{AnalysisService, LLMClient},
        value_objects::AnalysisRequest,
    },
    common::{entities::app_errors::CoreError, services::Service},
    session::{
        entities::{Session, SessionEvent},
        ports::{SessionRepository, SessionService},
    },
};

impl<LLM, SR> SessionService for Service<LLM, SR>
where
    LLM: LLMClient,
    SR: SessionRepository,
{
    async fn create_session(&self) -> Result<Session, CoreError> {
        let session = self.session_repository.create_session().await?;
        info!(session_id = %session.id, "Session created");
        Ok(session)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.session_repository
            .get_by_id(session_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn submit_analysis(
        &self,
        session_id: Uuid,
        request: &AnalysisRequest,
    ) -> Result<Session, CoreError> {
        if !request.has_input() {
            return Err(AnalysisError::NoInput.into());
        }

        self.session_repository
            .apply_event(session_id, SessionEvent::Submit)
            .await
    }

    async fn complete_analysis(
        &self,
        session_id: Uuid,
        request: AnalysisRequest,
    ) -> Result<Session, CoreError> {
        let event = match self.analyze(request).await {
            Ok(result) => SessionEvent::Resolve(result),
            Err(e) => SessionEvent::Reject(e.to_string()),
        };

        let session = self
            .session_repository
            .apply_event(session_id, event)
            .await
            .inspect_err(|e| warn!(session_id = %session_id, error = %e, "Dropping analysis outcome"))?;

        info!(session_id = %session_id, status = %session.status(), "Analysis finished");
        Ok(session)
    }

    async fn reset_session(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.session_repository
            .apply_event(session_id, SessionEvent::Reset)
            .await
    }

    async fn delete_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        if self.session_repository.delete_session(session_id).await? {
            Ok(())
        } else {
            Err(CoreError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        domain::{
            analysis::{entities::ANALYSIS_FAILED_MESSAGE, ports::MockLLMClient},
            session::{
                entities::{ApplicationState, SessionStatus},
                ports::MockSessionRepository,
            },
        },
        infrastructure::session::InMemorySessionRepository,
    };

    const SUGARY_WATER: &str = "Ingredients: Water, Sugar, Citric Acid.";

    fn reply() -> String {
        json!({
            "intent": "General Health",
            "summary": "Simple but sugary.",
            "verdict": "Fair",
            "healthScore": 55,
            "processingLevel": "Processed",
            "keyInsights": [{ "type": "negative", "text": "Contains added sugar" }],
            "tradeOffs": "Few additives but sugar content is notable.",
            "uncertainty": "Sugar quantity unspecified."
        })
        .to_string()
    }

    fn answering(reply: Result<String, AnalysisError>) -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_content()
            .times(1)
            .returning(move |_| {
                let reply = reply.clone();
                Box::pin(async move { reply })
            });
        llm
    }

    #[tokio::test]
    async fn test_successful_analysis_ends_in_success() {
        let service = Service::new(answering(Ok(reply())), InMemorySessionRepository::new());
        let session = service.create_session().await.unwrap();
        let request = AnalysisRequest::from_text(SUGARY_WATER);

        let submitted = service.submit_analysis(session.id, &request).await.unwrap();
        assert_eq!(submitted.status(), SessionStatus::Analyzing);

        let finished = service.complete_analysis(session.id, request).await.unwrap();
        assert_eq!(finished.status(), SessionStatus::Success);
        assert_eq!(finished.state.result().unwrap().health_score, 55.0);
        assert!(finished.state.error().is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_ends_in_error() {
        let service = Service::new(
            answering(Err(AnalysisError::Transport("connection reset".to_string()))),
            InMemorySessionRepository::new(),
        );
        let session = service.create_session().await.unwrap();
        let request = AnalysisRequest::from_text(SUGARY_WATER);

        service.submit_analysis(session.id, &request).await.unwrap();
        let finished = service.complete_analysis(session.id, request).await.unwrap();

        assert_eq!(
            finished.state,
            ApplicationState::Error(ANALYSIS_FAILED_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_second_submit_is_busy() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_content().times(0);
        let service = Service::new(llm, InMemorySessionRepository::new());
        let session = service.create_session().await.unwrap();
        let request = AnalysisRequest::from_text(SUGARY_WATER);

        service.submit_analysis(session.id, &request).await.unwrap();
        let err = service.submit_analysis(session.id, &request).await.unwrap_err();

        assert_eq!(err, CoreError::Busy);
        let current = service.get_session(session.id).await.unwrap();
        assert_eq!(current.status(), SessionStatus::Analyzing);
    }

    #[tokio::test]
    async fn test_empty_submit_leaves_state_untouched() {
        let mut repository = MockSessionRepository::new();
        repository.expect_apply_event().times(0);
        let mut llm = MockLLMClient::new();
        llm.expect_generate_content().times(0);
        let service = Service::new(llm, repository);

        let err = service
            .submit_analysis(Uuid::new_v4(), &AnalysisRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Analysis(AnalysisError::NoInput));
    }

    #[tokio::test]
    async fn test_reset_discards_previous_outcome() {
        let service = Service::new(
            answering(Err(AnalysisError::Validation("empty".to_string()))),
            InMemorySessionRepository::new(),
        );
        let session = service.create_session().await.unwrap();
        let request = AnalysisRequest::from_text(SUGARY_WATER);

        service.submit_analysis(session.id, &request).await.unwrap();
        service.complete_analysis(session.id, request).await.unwrap();
        let reset = service.reset_session(session.id).await.unwrap();

        assert_eq!(reset.state, ApplicationState::Idle);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_content().times(0);
        let service = Service::new(llm, InMemorySessionRepository::new());
        let id = Uuid::new_v4();

        assert_eq!(service.get_session(id).await.unwrap_err(), CoreError::NotFound);
        assert_eq!(service.reset_session(id).await.unwrap_err(), CoreError::NotFound);
        assert_eq!(service.delete_session(id).await.unwrap_err(), CoreError::NotFound);
    }
}
