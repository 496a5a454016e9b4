//! Group Membership Module
//!
//! Resolves and caches per-session group memberships:
//! - Identity: the authenticated login handed over by the hosting application
//! - Resolution: an injected capability mapping a login to its memberships
//! - Caching: session-store population at login, cheap reads on every request

pub mod cache;
pub mod identity;
pub mod resolver;

pub use cache::{GroupCache, LEGACY_GROUP_SESSION_KEY, USER_GROUPS_SESSION_KEY};
pub use identity::LoginIdentity;
pub use resolver::{GroupResolver, StaticGroupResolver};
