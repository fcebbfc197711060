//! Swap-request lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a swap request.
///
/// `PENDING → {ACCEPTED, DECLINED}` by the receiver; a requester cancel
/// deletes the row instead of recording a state. `ACCEPTED ↔ SCHEDULED`
/// as sessions are booked and cancelled. `COMPLETED` may be reached from
/// either `ACCEPTED` or `SCHEDULED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "swap_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    /// Created by the requester, awaiting the receiver's decision.
    Pending,
    /// Accepted by the receiver.
    Accepted,
    /// Declined by the receiver. Terminal.
    Declined,
    /// A session has been booked.
    Scheduled,
    /// The exchange took place. Terminal.
    Completed,
}

impl SwapStatus {
    /// Whether no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Declined | Self::Completed)
    }

    /// Whether a request in this state blocks a new request between the
    /// same pair of users.
    pub fn blocks_new_request(&self) -> bool {
        matches!(self, Self::Pending | Self::Accepted | Self::Scheduled)
    }

    /// Whether the requester may still cancel (delete) the request.
    pub fn cancellable(&self) -> bool {
        self.blocks_new_request()
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SwapStatus {
    type Err = skillswap_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            "scheduled" => Ok(Self::Scheduled),
            "completed" => Ok(Self::Completed),
            _ => Err(skillswap_core::AppError::validation(format!(
                "Invalid swap status: '{s}'. Expected one of: pending, accepted, declined, scheduled, completed"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(SwapStatus::Declined.is_terminal());
        assert!(SwapStatus::Completed.is_terminal());
        assert!(!SwapStatus::Pending.is_terminal());
        assert!(!SwapStatus::Scheduled.is_terminal());
    }

    #[test]
    fn test_blocking_states() {
        assert!(SwapStatus::Pending.blocks_new_request());
        assert!(SwapStatus::Accepted.blocks_new_request());
        assert!(SwapStatus::Scheduled.blocks_new_request());
        assert!(!SwapStatus::Declined.blocks_new_request());
        assert!(!SwapStatus::Completed.blocks_new_request());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "pending".parse::<SwapStatus>().unwrap(),
            SwapStatus::Pending
        );
        assert!("cancelled".parse::<SwapStatus>().is_err());
    }
}
