use crate::{
    domain::common::{NutriPilotConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{llm::GeminiLLMClient, session::InMemorySessionRepository},
};

pub type NutriPilotService = Service<GeminiLLMClient, InMemorySessionRepository>;

pub fn create_service(config: NutriPilotConfig) -> Result<NutriPilotService, CoreError> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;
    let session_repository = InMemorySessionRepository::from_config(&config.session);

    tracing::info!(
        model = %config.llm.gemini_model,
        session_idle_ttl_secs = config.session.idle_ttl_secs,
        "Analysis service ready"
    );

    Ok(Service::new(llm_client, session_repository))
}
