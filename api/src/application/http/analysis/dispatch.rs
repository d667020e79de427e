use nutripilot_core::domain::{
    analysis::value_objects::AnalysisRequest,
    session::{entities::Session, ports::SessionService},
};
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Move the session to `analyzing` and finish the analysis in the background.
///
/// The returned session is the `analyzing` snapshot; callers poll the session
/// for the outcome.
pub async fn dispatch_analysis(
    state: &AppState,
    session_id: Uuid,
    request: AnalysisRequest,
) -> Result<Session, ApiError> {
    let session = state
        .service
        .submit_analysis(session_id, &request)
        .await
        .map_err(ApiError::from)?;

    let service = state.service.clone();
    tokio::spawn(
        async move {
            if let Err(e) = service.complete_analysis(session_id, request).await {
                warn!(error = %e, "Analysis outcome was not recorded");
            }
        }
        .instrument(info_span!("analysis", session_id = %session_id)),
    );

    Ok(session)
}
