use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

pub const USER_ID_KEY: &str = "user_id";
pub const CSRF_TOKEN_KEY: &str = "csrf_token";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Malformed session credential: {0}")]
    Malformed(String),
    #[error("Session backend failure: {0}")]
    Backend(String),
}

/// Attributes attached to one caller, addressed by an opaque id carried in a cookie.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: Uuid,
    values: HashMap<String, Value>,
}

impl Session {
    pub fn new(id: Uuid) -> Self {
        Self { id, values: HashMap::new() }
    }

    pub fn with_values(id: Uuid, values: HashMap<String, Value>) -> Self {
        Self { id, values }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn insert(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    pub fn values(&self) -> &HashMap<String, Value> {
        &self.values
    }

    pub fn user_id(&self) -> Option<i64> {
        self.get(USER_ID_KEY).and_then(Value::as_i64)
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.get(CSRF_TOKEN_KEY).and_then(Value::as_str)
    }
}

/// Parses the raw cookie value into a session id.
pub fn parse_credential(raw: &str) -> Result<Uuid, SessionError> {
    Uuid::parse_str(raw).map_err(|_| SessionError::Malformed(raw.to_string()))
}

/// Session lifecycle keyed by the caller's credential.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the caller's session, creating an empty one when the caller has none.
    async fn get(&self, credential: Option<&str>) -> Result<Session, SessionError>;

    /// Writes `key` into the session and persists it.
    async fn set(&self, session: &mut Session, key: &str, value: Value) -> Result<(), SessionError>;
}
