//! Core data type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Access-category flag for an authenticated user.
///
/// Values are powers of two so that callers can combine flags into a bitmask
/// via [`GroupType::bits`]. Cached memberships are stored as an ordered list
/// of individual flags rather than a combined mask; the CSV projection and
/// the legacy session entry both depend on the list form.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupType {
    None = 0,
    Admin = 1,
    User = 2,
    Group1 = 4,
    Group2 = 8,
}

impl GroupType {
    /// All non-empty flags, in declaration order.
    pub const ALL: [GroupType; 4] = [
        GroupType::Admin,
        GroupType::User,
        GroupType::Group1,
        GroupType::Group2,
    ];

    /// Raw flag value for bitmask composition.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for GroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupType::None => write!(f, "NONE"),
            GroupType::Admin => write!(f, "ADMIN"),
            GroupType::User => write!(f, "USER"),
            GroupType::Group1 => write!(f, "GROUP1"),
            GroupType::Group2 => write!(f, "GROUP2"),
        }
    }
}

impl std::str::FromStr for GroupType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(GroupType::None),
            "ADMIN" => Ok(GroupType::Admin),
            "USER" => Ok(GroupType::User),
            "GROUP1" => Ok(GroupType::Group1),
            "GROUP2" => Ok(GroupType::Group2),
            _ => Err(format!("Unknown group: {}", s)),
        }
    }
}

/// Top-level rolegate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolegateConfig {
    /// Session lifecycle settings
    pub session: SessionSettings,
    /// Static resolver settings
    pub resolver: ResolverSettings,
    /// Logging settings
    pub logging: crate::logging::LoggingConfig,
}

/// Session lifecycle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Minutes of inactivity after which a session is considered stale
    pub timeout_minutes: u32,
}

/// Settings for the static group resolver.
///
/// Group names are kept as strings in the configuration layer and parsed into
/// [`GroupType`] values when the resolver is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Groups resolved for logins without an explicit entry
    pub default_groups: Vec<String>,
    /// Per-login membership overrides
    pub overrides: HashMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_group_type_display_names() {
        assert_eq!(GroupType::None.to_string(), "NONE");
        assert_eq!(GroupType::Admin.to_string(), "ADMIN");
        assert_eq!(GroupType::User.to_string(), "USER");
        assert_eq!(GroupType::Group1.to_string(), "GROUP1");
        assert_eq!(GroupType::Group2.to_string(), "GROUP2");
    }

    #[test]
    fn test_group_type_from_str_round_trip() {
        for group in GroupType::ALL {
            let parsed = GroupType::from_str(&group.to_string()).unwrap();
            assert_eq!(parsed, group);
        }

        // Parsing is case-insensitive
        assert_eq!(GroupType::from_str("admin").unwrap(), GroupType::Admin);
        assert_eq!(GroupType::from_str("Group2").unwrap(), GroupType::Group2);

        assert!(GroupType::from_str("SUPERUSER").is_err());
    }

    #[test]
    fn test_group_type_bits_are_flags() {
        assert_eq!(GroupType::None.bits(), 0);
        assert_eq!(GroupType::Admin.bits(), 1);
        assert_eq!(GroupType::User.bits(), 2);
        assert_eq!(GroupType::Group1.bits(), 4);
        assert_eq!(GroupType::Group2.bits(), 8);

        let mask = GroupType::Admin.bits() | GroupType::User.bits();
        assert_eq!(mask, 3);
    }

    #[test]
    fn test_group_type_serde_uses_wire_names() {
        let json = serde_json::to_string(&GroupType::Group1).unwrap();
        assert_eq!(json, "\"GROUP1\"");

        let parsed: GroupType = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(parsed, GroupType::Admin);

        let list: Vec<GroupType> =
            serde_json::from_str("[\"ADMIN\",\"USER\",\"GROUP2\"]").unwrap();
        assert_eq!(
            list,
            vec![GroupType::Admin, GroupType::User, GroupType::Group2]
        );
    }
}
