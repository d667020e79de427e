use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{analysis::entities::AnalysisResult, common::generate_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Idle,
    Analyzing,
    Success,
    Error,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Analyzing => "analyzing",
            SessionStatus::Success => "success",
            SessionStatus::Error => "error",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI state of one session. A result only exists in `Success` and an error
/// message only in `Error`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ApplicationState {
    #[default]
    Idle,
    Analyzing,
    Success(AnalysisResult),
    Error(String),
}

impl ApplicationState {
    pub fn status(&self) -> SessionStatus {
        match self {
            ApplicationState::Idle => SessionStatus::Idle,
            ApplicationState::Analyzing => SessionStatus::Analyzing,
            ApplicationState::Success(_) => SessionStatus::Success,
            ApplicationState::Error(_) => SessionStatus::Error,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            ApplicationState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ApplicationState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Submit,
    Resolve(AnalysisResult),
    Reject(String),
    Reset,
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Submit => "submit",
            SessionEvent::Resolve(_) => "resolve",
            SessionEvent::Reject(_) => "reject",
            SessionEvent::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub state: ApplicationState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            state: ApplicationState::Idle,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.state.status()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
