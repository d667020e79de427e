use thiserror::Error;

use crate::domain::{analysis::entities::AnalysisError, session::entities::SessionStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("An analysis is already in progress")]
    Busy,

    #[error("Cannot {event} while session is {from}")]
    InvalidTransition {
        from: SessionStatus,
        event: &'static str,
    },

    #[error("Not found")]
    NotFound,

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}
