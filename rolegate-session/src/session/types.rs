//! Session Types and Structures

use super::store::{MemorySessionStore, SessionStore};
use crate::auth::USER_GROUPS_SESSION_KEY;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Minutes of inactivity after which a session is considered stale
    pub timeout_minutes: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout_minutes: 480, // 8 hours
        }
    }
}

impl From<&rolegate_core::SessionSettings> for SessionConfig {
    fn from(settings: &rolegate_core::SessionSettings) -> Self {
        Self {
            timeout_minutes: settings.timeout_minutes,
        }
    }
}

/// One live user session: identity, timestamps, and the owned store
pub struct SessionState {
    /// Unique session identifier
    pub id: String,
    /// Login the session was started for
    pub login: String,
    /// Session creation and activity timestamps
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    /// Session configuration
    pub config: SessionConfig,
    /// Per-session key-value storage
    store: MemorySessionStore,
}

impl SessionState {
    /// Create a new session for a login
    pub fn new<S: Into<String>>(login: S, config: SessionConfig) -> Self {
        let now = Utc::now();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            login: login.into(),
            created_at: now,
            last_activity: now,
            config,
            store: MemorySessionStore::new(),
        }
    }

    /// Update the last activity timestamp
    pub fn update_activity(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Get session age in minutes
    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.created_at).num_minutes()
    }

    /// Check if the session is stale based on configuration
    pub fn is_stale(&self) -> bool {
        let timeout_minutes = self.config.timeout_minutes;
        (Utc::now() - self.last_activity).num_minutes() > timeout_minutes as i64
    }

    /// Whether group membership has been cached for this session
    pub fn is_initialized(&self) -> bool {
        self.store.contains_key(USER_GROUPS_SESSION_KEY)
    }
}

impl SessionStore for SessionState {
    fn get(&self, key: &str) -> Option<&Value> {
        self.store.get(key)
    }

    fn insert(&mut self, key: &str, value: Value) {
        self.store.insert(key, value);
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.store.remove(key)
    }
}

/// Session information for external consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: String,
    pub login: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub age_minutes: i64,
    pub is_initialized: bool,
}

impl From<&SessionState> for SessionInfo {
    fn from(session: &SessionState) -> Self {
        Self {
            id: session.id.clone(),
            login: session.login.clone(),
            created_at: session.created_at,
            last_activity: session.last_activity,
            age_minutes: session.age_minutes(),
            is_initialized: session.is_initialized(),
        }
    }
}
