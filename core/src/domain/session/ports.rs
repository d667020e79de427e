use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    analysis::value_objects::AnalysisRequest,
    common::entities::app_errors::CoreError,
    session::entities::{Session, SessionEvent},
};

/// Repository trait for session state
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync + 'static {
    fn create_session(&self) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn get_by_id(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<Session>, CoreError>> + Send;

    /// Apply `event` to the stored state atomically. Returns `NotFound` for
    /// unknown sessions and the transition error when the event is rejected.
    fn apply_event(
        &self,
        session_id: Uuid,
        event: SessionEvent,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn delete_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Service trait driving the per-session state machine
pub trait SessionService: Send + Sync {
    fn create_session(&self) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn get_session(&self, session_id: Uuid)
    -> impl Future<Output = Result<Session, CoreError>> + Send;

    /// Move the session to `analyzing`. Empty requests are refused before the
    /// state is touched.
    fn submit_analysis(
        &self,
        session_id: Uuid,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    /// Run the analysis for a session already in `analyzing` and record the
    /// outcome.
    fn complete_analysis(
        &self,
        session_id: Uuid,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn reset_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn delete_session(&self, session_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}
