//! Rolegate Session - Session-scoped group membership caching
//!
//! This crate resolves a user's group memberships once, at session start, and
//! caches them in the session's key-value store; every later request answers
//! membership queries from the cache without touching the membership backend.
//!
//! ## Architecture
//!
//! The crate follows a clear separation between:
//! - **Session store** ([`session::SessionStore`]): the per-session key-value
//!   storage seam supplied by the hosting environment
//! - **Group resolution** ([`auth::GroupResolver`]): the injected lookup that
//!   maps a login to its memberships
//! - **Group cache** ([`auth::GroupCache`]): the facade that populates and
//!   queries cached memberships through an explicit session-store handle
//! - **Session registry** ([`session::SessionRegistry`]): session lifecycle
//!   for hosts without their own session machinery

pub mod auth;
pub mod session;

pub use auth::{
    GroupCache, GroupResolver, LoginIdentity, StaticGroupResolver, LEGACY_GROUP_SESSION_KEY,
    USER_GROUPS_SESSION_KEY,
};
pub use session::{
    MemorySessionStore, SessionConfig, SessionInfo, SessionRegistry, SessionState, SessionStore,
};

/// Session-level error type
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Core error: {0}")]
    Core(#[from] rolegate_core::RolegateError),

    #[error("Session error: {message}")]
    Session { message: String },

    #[error("Resolver error: {message}")]
    Resolver { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

impl SessionError {
    /// Create a session error
    pub fn session<S: Into<String>>(message: S) -> Self {
        Self::Session {
            message: message.into(),
        }
    }

    /// Create a resolver error
    pub fn resolver<S: Into<String>>(message: S) -> Self {
        Self::Resolver {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}
