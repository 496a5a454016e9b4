//! Group Resolver
//!
//! Maps a login identifier to its recorded group memberships. The resolver is
//! an injected capability so a persistence-backed lookup (e.g. a database
//! query) can replace the static implementation without touching cache logic.

use crate::{SessionError, SessionResult};
use async_trait::async_trait;
use rolegate_core::{GroupType, ResolverSettings};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;

/// Resolves the ordered group memberships for a login.
///
/// Contract: return the memberships in their canonical order, or an empty
/// list when the login has no recorded groups. A failed lookup surfaces as an
/// error; the group cache does not catch, wrap, or retry it.
#[async_trait]
pub trait GroupResolver: Send + Sync {
    async fn resolve_groups(&self, login: &str) -> SessionResult<Vec<GroupType>>;
}

/// Static in-memory group resolver for testing and simple deployments.
///
/// Answers with a per-login override when one is registered, and with the
/// default membership list otherwise.
pub struct StaticGroupResolver {
    default_groups: Vec<GroupType>,
    overrides: HashMap<String, Vec<GroupType>>,
}

impl StaticGroupResolver {
    /// Create a resolver answering `[ADMIN, USER, GROUP2]` for every login
    pub fn new() -> Self {
        Self::with_default_groups(vec![GroupType::Admin, GroupType::User, GroupType::Group2])
    }

    /// Create a resolver with a custom default membership list
    pub fn with_default_groups(default_groups: Vec<GroupType>) -> Self {
        Self {
            default_groups,
            overrides: HashMap::new(),
        }
    }

    /// Register a per-login membership override
    pub fn with_user<S: Into<String>>(mut self, login: S, groups: Vec<GroupType>) -> Self {
        self.overrides.insert(login.into(), groups);
        self
    }

    /// Build a resolver from configuration, parsing group names
    pub fn from_settings(settings: &ResolverSettings) -> SessionResult<Self> {
        let default_groups = parse_groups(&settings.default_groups)?;

        let mut resolver = Self::with_default_groups(default_groups);
        for (login, names) in &settings.overrides {
            resolver = resolver.with_user(login.clone(), parse_groups(names)?);
        }

        Ok(resolver)
    }
}

impl Default for StaticGroupResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroupResolver for StaticGroupResolver {
    async fn resolve_groups(&self, login: &str) -> SessionResult<Vec<GroupType>> {
        let groups = self
            .overrides
            .get(login)
            .cloned()
            .unwrap_or_else(|| self.default_groups.clone());

        debug!("Resolved {} group(s) for login {}", groups.len(), login);
        Ok(groups)
    }
}

fn parse_groups(names: &[String]) -> SessionResult<Vec<GroupType>> {
    names
        .iter()
        .map(|name| {
            GroupType::from_str(name)
                .map_err(|e| SessionError::config(format!("Invalid group in settings: {}", e)))
        })
        .collect()
}
