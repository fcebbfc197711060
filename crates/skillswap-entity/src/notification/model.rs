//! Notification entity model.
//!
//! Fire-and-forget records: there is no delivery guarantee beyond the
//! row insert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;

/// An in-app notification for a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique identifier.
    pub id: Uuid,
    /// The user being notified.
    pub user_id: Uuid,
    /// What the notification is about.
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Optional client route to open.
    pub action_url: Option<String>,
    /// Whether the user has read it.
    pub is_read: bool,
    /// Whether the user has dismissed it.
    pub is_dismissed: bool,
    /// When it was created.
    pub created_at: DateTime<Utc>,
    /// When it was read, if it was.
    pub read_at: Option<DateTime<Utc>>,
}

/// Data to create a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotification {
    /// The user being notified.
    pub user_id: Uuid,
    /// Kind.
    pub kind: NotificationKind,
    /// Title.
    pub title: String,
    /// Body.
    pub body: String,
    /// Optional client route.
    pub action_url: Option<String>,
}
