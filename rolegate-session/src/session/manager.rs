//! Session Registry - Session lifecycle over the group cache
//!
//! Owns live sessions for hosts without their own session machinery and
//! routes membership queries to the cache by session id. Initialization at
//! session start is the only write path for group state; everything else is
//! a read.

use super::types::{SessionConfig, SessionInfo, SessionState};
use crate::auth::{GroupCache, GroupResolver, LoginIdentity};
use crate::{SessionError, SessionResult};
use rolegate_core::GroupType;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Registry of live sessions with cached group membership
pub struct SessionRegistry {
    /// Active sessions
    sessions: Arc<RwLock<HashMap<String, SessionState>>>,
    /// Group membership cache
    cache: GroupCache,
    /// Default session configuration
    default_config: SessionConfig,
}

impl SessionRegistry {
    /// Create a new session registry
    pub fn new(resolver: Arc<dyn GroupResolver>, default_config: SessionConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            cache: GroupCache::new(resolver),
            default_config,
        }
    }

    /// The group cache used by this registry
    pub fn cache(&self) -> &GroupCache {
        &self.cache
    }

    /// Start a session for an authenticated identity.
    ///
    /// Resolves and caches the login's memberships before the session becomes
    /// visible; a resolver fault aborts the start and registers nothing.
    pub async fn start_session(&self, identity: &LoginIdentity) -> SessionResult<String> {
        let mut session = SessionState::new(identity.login.clone(), self.default_config.clone());
        self.cache.initialize(&mut session, &identity.login).await?;

        let session_id = session.id.clone();
        info!(
            "Started session {} for {}",
            session_id,
            identity.display_string()
        );

        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id.clone(), session);

        Ok(session_id)
    }

    /// Whether the session's cached memberships contain `group`
    pub async fn has_group(&self, session_id: &str, group: GroupType) -> SessionResult<bool> {
        let mut sessions = self.sessions.write().await;
        let session = Self::get_mut(&mut sessions, session_id)?;

        session.update_activity();
        Ok(self.cache.has_group(session, group))
    }

    /// The session's cached membership list, `None` if never initialized
    pub async fn groups(&self, session_id: &str) -> SessionResult<Option<Vec<GroupType>>> {
        let mut sessions = self.sessions.write().await;
        let session = Self::get_mut(&mut sessions, session_id)?;

        session.update_activity();
        Ok(self.cache.groups(session))
    }

    /// Comma-joined form of the session's cached membership list
    pub async fn groups_csv(&self, session_id: &str) -> SessionResult<String> {
        let mut sessions = self.sessions.write().await;
        let session = Self::get_mut(&mut sessions, session_id)?;

        session.update_activity();
        Ok(self.cache.groups_csv(session))
    }

    /// The legacy single-group value frozen at session start
    #[deprecated(
        note = "kept so consumers of the old single-group session entry keep working; read the full membership list instead"
    )]
    #[allow(deprecated)]
    pub async fn legacy_group_value(&self, session_id: &str) -> SessionResult<Option<String>> {
        let mut sessions = self.sessions.write().await;
        let session = Self::get_mut(&mut sessions, session_id)?;

        session.update_activity();
        Ok(self.cache.legacy_group_value(session))
    }

    /// One-line diagnostic summary of the session's membership state
    pub async fn summary(&self, session_id: &str) -> SessionResult<String> {
        let sessions = self.sessions.read().await;
        let session = Self::get(&sessions, session_id)?;

        Ok(self.cache.summary(session))
    }

    /// Get session information
    pub async fn get_session(&self, session_id: &str) -> SessionResult<SessionInfo> {
        let sessions = self.sessions.read().await;
        let session = Self::get(&sessions, session_id)?;

        Ok(SessionInfo::from(session))
    }

    /// List all live sessions
    pub async fn list_sessions(&self) -> Vec<SessionInfo> {
        let sessions = self.sessions.read().await;
        sessions.values().map(SessionInfo::from).collect()
    }

    /// Number of live sessions
    pub async fn session_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }

    /// End a session, dropping everything in its store
    pub async fn end_session(&self, session_id: &str) -> SessionResult<()> {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(session_id).is_none() {
            return Err(SessionError::session(format!(
                "Session not found: {}",
                session_id
            )));
        }

        info!("Ended session: {}", session_id);
        Ok(())
    }

    /// Evict sessions whose last activity exceeds their timeout
    pub async fn cleanup_stale_sessions(&self) -> usize {
        let mut sessions = self.sessions.write().await;

        let stale_sessions: Vec<String> = sessions
            .iter()
            .filter(|(_, session)| session.is_stale())
            .map(|(id, _)| id.clone())
            .collect();

        let count = stale_sessions.len();
        for session_id in stale_sessions {
            sessions.remove(&session_id);
            debug!("Cleaned up stale session: {}", session_id);
        }

        count
    }

    fn get<'a>(
        sessions: &'a HashMap<String, SessionState>,
        session_id: &str,
    ) -> SessionResult<&'a SessionState> {
        sessions.get(session_id).ok_or_else(|| {
            SessionError::session(format!("Session not found: {}", session_id))
        })
    }

    fn get_mut<'a>(
        sessions: &'a mut HashMap<String, SessionState>,
        session_id: &str,
    ) -> SessionResult<&'a mut SessionState> {
        sessions.get_mut(session_id).ok_or_else(|| {
            SessionError::session(format!("Session not found: {}", session_id))
        })
    }
}
