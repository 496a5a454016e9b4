//! Login Identity
//!
//! The authenticated login identifier supplied by the hosting application at
//! session start. No credential verification happens here; whoever hosts the
//! session is responsible for authentication.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Authenticated login identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginIdentity {
    /// Login identifier, accepted as-is with no format validation
    pub login: String,
    /// Display name (optional)
    pub display_name: Option<String>,
}

impl LoginIdentity {
    /// Create an identity from a login identifier
    pub fn new<S: Into<String>>(login: S) -> Self {
        Self {
            login: login.into(),
            display_name: None,
        }
    }

    /// Set the display name
    pub fn with_display_name<S: Into<String>>(mut self, display_name: S) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Create an identity from HTTP headers (for web usage)
    ///
    /// Returns `None` when no authenticated user is present in the headers.
    pub fn from_headers(headers: &HashMap<String, String>) -> Option<Self> {
        let login = headers.get("x-user-id")?;

        let mut identity = Self::new(login.clone());
        if let Some(name) = headers.get("x-user-name") {
            identity = identity.with_display_name(name.clone());
        }

        Some(identity)
    }

    /// Create an identity from environment variables (for CLI usage)
    pub fn from_env() -> Option<Self> {
        let login = std::env::var("ROLEGATE_USER_ID").ok()?;

        let mut identity = Self::new(login);
        if let Ok(name) = std::env::var("ROLEGATE_USER_NAME") {
            identity = identity.with_display_name(name);
        }

        Some(identity)
    }

    /// Get a display string for logging
    pub fn display_string(&self) -> String {
        match &self.display_name {
            Some(name) => format!("{} ({})", name, self.login),
            None => self.login.clone(),
        }
    }
}
