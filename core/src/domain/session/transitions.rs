use crate::domain::{
    common::entities::app_errors::CoreError,
    session::entities::{ApplicationState, SessionEvent},
};

/// Apply `event` to `state`. Rejected events leave the caller's state as is.
pub fn transition(
    state: &ApplicationState,
    event: SessionEvent,
) -> Result<ApplicationState, CoreError> {
    match (state, event) {
        (ApplicationState::Idle, SessionEvent::Submit) => Ok(ApplicationState::Analyzing),
        (ApplicationState::Analyzing, SessionEvent::Submit) => Err(CoreError::Busy),
        (ApplicationState::Analyzing, SessionEvent::Resolve(result)) => {
            Ok(ApplicationState::Success(result))
        }
        (ApplicationState::Analyzing, SessionEvent::Reject(message)) => {
            Ok(ApplicationState::Error(message))
        }
        (
            ApplicationState::Idle | ApplicationState::Success(_) | ApplicationState::Error(_),
            SessionEvent::Reset,
        ) => Ok(ApplicationState::Idle),
        (state, event) => Err(CoreError::InvalidTransition {
            from: state.status(),
            event: event.name(),
        }),
    }
}
