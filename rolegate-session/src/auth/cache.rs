//! Group Cache
//!
//! Populates and queries per-session group membership. The cache owns no
//! session state of its own: every operation takes an explicit session-store
//! handle, so the component is testable without a live hosting framework.

use crate::session::SessionStore;
use crate::SessionResult;
use rolegate_core::GroupType;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use super::resolver::GroupResolver;

/// Session key holding the ordered group membership list
pub const USER_GROUPS_SESSION_KEY: &str = "UserGroups";

/// Session key holding the legacy single-group value
pub const LEGACY_GROUP_SESSION_KEY: &str = "Group";

/// Facade over the session store for group membership caching.
///
/// `initialize` is the sole writer of group state and runs once per session
/// lifecycle, at login; all other operations are readers.
#[derive(Clone)]
pub struct GroupCache {
    resolver: Arc<dyn GroupResolver>,
}

impl GroupCache {
    /// Create a group cache backed by the given resolver
    pub fn new(resolver: Arc<dyn GroupResolver>) -> Self {
        Self { resolver }
    }

    /// Resolve the login's memberships and cache them in the session.
    ///
    /// Overwrites any prior group state unconditionally. The legacy entry is
    /// derived here and frozen: later writes to the membership list that
    /// bypass this method leave it untouched. An empty resolver result is not
    /// an error; a resolver fault propagates to the caller uncaught.
    pub async fn initialize(
        &self,
        session: &mut dyn SessionStore,
        login: &str,
    ) -> SessionResult<()> {
        let groups = self.resolver.resolve_groups(login).await?;
        debug!("Caching {} group membership(s) for login {}", groups.len(), login);

        let value = serde_json::to_value(&groups)?;
        session.insert(USER_GROUPS_SESSION_KEY, value);

        let legacy = groups
            .first()
            .map(|group| group.to_string())
            .unwrap_or_default();
        session.insert(LEGACY_GROUP_SESSION_KEY, Value::String(legacy));

        Ok(())
    }

    /// The cached membership list, or `None` until `initialize` has run.
    ///
    /// A stored value that no longer deserializes is treated as absent.
    pub fn groups(&self, session: &dyn SessionStore) -> Option<Vec<GroupType>> {
        session
            .get(USER_GROUPS_SESSION_KEY)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Whether the cached membership list contains `group`.
    ///
    /// Never errors: an uninitialized session is the defined "no membership"
    /// state, and a value outside the known flags is simply never found.
    pub fn has_group(&self, session: &dyn SessionStore, group: GroupType) -> bool {
        match self.groups(session) {
            Some(groups) => !groups.is_empty() && groups.contains(&group),
            None => false,
        }
    }

    /// Comma-joined group names in cached order, or an empty string when the
    /// session has no cached memberships. Pure projection, no side effects.
    pub fn groups_csv(&self, session: &dyn SessionStore) -> String {
        self.groups(session)
            .map(|groups| {
                groups
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default()
    }

    /// The legacy single-group value frozen at initialization time, or `None`
    /// when the session was never initialized.
    #[deprecated(
        note = "kept so consumers of the old single-group session entry keep working; read the full membership list instead"
    )]
    pub fn legacy_group_value(&self, session: &dyn SessionStore) -> Option<String> {
        session
            .get(LEGACY_GROUP_SESSION_KEY)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// One-line diagnostic summary of the session's cached membership state
    #[allow(deprecated)]
    pub fn summary(&self, session: &dyn SessionStore) -> String {
        format!(
            "GroupSession[groups={}, admin={}, legacy={}]",
            self.groups_csv(session),
            self.has_group(session, GroupType::Admin),
            self.legacy_group_value(session).unwrap_or_default()
        )
    }
}
