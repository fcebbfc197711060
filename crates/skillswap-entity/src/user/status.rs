//! User account status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account status for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Account is active and can participate in swaps.
    Active,
    /// Account is temporarily suspended by moderation.
    Suspended,
    /// Account is permanently banned.
    Banned,
}

impl UserStatus {
    /// Check whether the user may act on the platform with this status.
    pub fn can_act(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Banned => "banned",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = skillswap_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            "banned" => Ok(Self::Banned),
            _ => Err(skillswap_core::AppError::validation(format!(
                "Invalid user status: '{s}'. Expected one of: active, suspended, banned"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_active_can_act() {
        assert!(UserStatus::Active.can_act());
        assert!(!UserStatus::Suspended.can_act());
        assert!(!UserStatus::Banned.can_act());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("active".parse::<UserStatus>().unwrap(), UserStatus::Active);
        assert_eq!("BANNED".parse::<UserStatus>().unwrap(), UserStatus::Banned);
        assert!("frozen".parse::<UserStatus>().is_err());
    }
}
