use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::{SessionConfig, entities::app_errors::CoreError},
    session::{
        entities::{Session, SessionEvent, SessionStatus},
        ports::SessionRepository,
        transitions::transition,
    },
};

/// Process-local session store. Transitions run under the write lock, so
/// the check-and-set of the state machine is atomic per session.
///
/// Sessions idle for longer than `idle_ttl` read as absent and are swept
/// whenever a new session is created. A session in `analyzing` never expires,
/// so an in-flight outcome always has somewhere to land.
#[derive(Debug, Clone)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    idle_ttl: TimeDelta,
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: TimeDelta) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        let idle_ttl = i64::try_from(config.idle_ttl_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);

        Self::with_idle_ttl(idle_ttl)
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        session.status() != SessionStatus::Analyzing && now - session.updated_at >= self.idle_ttl
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create_session(&self) -> Result<Session, CoreError> {
        let session = Session::new();
        let now = Utc::now();

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, stored| !self.is_expired(stored, now));
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, "Evicted idle sessions");
        }

        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn get_by_id(&self, session_id: Uuid) -> Result<Option<Session>, CoreError> {
        let now = Utc::now();
        Ok(self
            .sessions
            .read()
            .await
            .get(&session_id)
            .filter(|session| !self.is_expired(session, now))
            .cloned())
    }

    async fn apply_event(
        &self,
        session_id: Uuid,
        event: SessionEvent,
    ) -> Result<Session, CoreError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        if sessions
            .get(&session_id)
            .is_some_and(|session| self.is_expired(session, now))
        {
            sessions.remove(&session_id);
            return Err(CoreError::NotFound);
        }

        let session = sessions.get_mut(&session_id).ok_or(CoreError::NotFound)?;

        let event_name = event.name();
        let next = transition(&session.state, event)?;
        debug!(
            session_id = %session_id,
            from = %session.status(),
            to = %next.status(),
            event = event_name,
            "Session transition"
        );

        session.state = next;
        session.updated_at = now;
        Ok(session.clone())
    }

    async fn delete_session(&self, session_id: Uuid) -> Result<bool, CoreError> {
        let now = Utc::now();
        Ok(self
            .sessions
            .write()
            .await
            .remove(&session_id)
            .is_some_and(|session| !self.is_expired(&session, now)))
    }
}
