//! Scheduled-session entity: the 1:1 booking attached to an accepted swap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A booked session for an accepted swap request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScheduledSession {
    /// Unique identifier.
    pub id: Uuid,
    /// Parent swap request (unique — at most one session per swap).
    pub swap_request_id: Uuid,
    /// When the session takes place.
    pub scheduled_at: DateTime<Utc>,
    /// Optional video-call link.
    pub meeting_link: Option<String>,
    /// Free-text notes for the participants.
    pub notes: Option<String>,
    /// When the session row was created.
    pub created_at: DateTime<Utc>,
    /// When the session row was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data to create or replace the session for a swap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertSession {
    /// Parent swap request.
    pub swap_request_id: Uuid,
    /// When the session takes place.
    pub scheduled_at: DateTime<Utc>,
    /// Optional video-call link.
    pub meeting_link: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}
