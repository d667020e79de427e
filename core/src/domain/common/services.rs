use std::sync::Arc;

use crate::domain::{analysis::ports::LLMClient, session::ports::SessionRepository};

/// Domain service wiring the outbound ports together. Trait implementations
/// for each bounded context live next to their domain module.
pub struct Service<LLM, SR>
where
    LLM: LLMClient,
    SR: SessionRepository,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) session_repository: Arc<SR>,
}

impl<LLM, SR> Service<LLM, SR>
where
    LLM: LLMClient,
    SR: SessionRepository,
{
    pub fn new(llm_client: LLM, session_repository: SR) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            session_repository: Arc::new(session_repository),
        }
    }
}

impl<LLM, SR> Clone for Service<LLM, SR>
where
    LLM: LLMClient,
    SR: SessionRepository,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            session_repository: Arc::clone(&self.session_repository),
        }
    }
}
