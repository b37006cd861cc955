use async_trait::async_trait;
use railmock_core::session::{parse_credential, Session, SessionError, SessionStore};
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Process-lifetime session map. Sessions are never expired.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<Uuid, HashMap<String, Value>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn create(&self) -> Session {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, HashMap::new());
        debug!("Session created: {}", id);
        Session::new(id)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, credential: Option<&str>) -> Result<Session, SessionError> {
        let Some(raw) = credential else {
            return Ok(self.create().await);
        };

        let id = parse_credential(raw)?;
        let existing = self.sessions.read().await.get(&id).cloned();
        match existing {
            Some(values) => Ok(Session::with_values(id, values)),
            // Stale cookie from a previous process: hand out a fresh session.
            None => Ok(self.create().await),
        }
    }

    async fn set(&self, session: &mut Session, key: &str, value: Value) -> Result<(), SessionError> {
        session.insert(key, value.clone());
        self.sessions
            .write()
            .await
            .entry(session.id())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }
}
