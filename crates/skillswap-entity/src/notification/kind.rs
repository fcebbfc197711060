//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a notification is about.
///
/// One variant per lifecycle side effect that fans out a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A new swap request arrived.
    SwapRequest,
    /// The receiver accepted.
    SwapAccepted,
    /// The receiver declined.
    SwapDeclined,
    /// The requester cancelled.
    SwapCancelled,
    /// A session was booked.
    SessionScheduled,
    /// A booked session was cancelled.
    SessionCancelled,
    /// The swap was marked complete.
    SwapCompleted,
    /// A review was left about the user.
    ReviewReceived,
    /// Credits arrived via transfer.
    CreditsReceived,
}

impl NotificationKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SwapRequest => "swap_request",
            Self::SwapAccepted => "swap_accepted",
            Self::SwapDeclined => "swap_declined",
            Self::SwapCancelled => "swap_cancelled",
            Self::SessionScheduled => "session_scheduled",
            Self::SessionCancelled => "session_cancelled",
            Self::SwapCompleted => "swap_completed",
            Self::ReviewReceived => "review_received",
            Self::CreditsReceived => "credits_received",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
