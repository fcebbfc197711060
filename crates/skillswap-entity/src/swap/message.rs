//! Message rows attached to a swap request.
//!
//! Messages are only appended through the status-update operation; there
//! is no standalone messaging surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A message attached to a swap request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    /// Unique identifier.
    pub id: Uuid,
    /// Parent swap request.
    pub swap_request_id: Uuid,
    /// The participant who wrote the message.
    pub sender_id: Uuid,
    /// Message body.
    pub body: String,
    /// When the message was written.
    pub created_at: DateTime<Utc>,
}

/// Data to append a message to a swap request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessage {
    /// Parent swap request.
    pub swap_request_id: Uuid,
    /// Author.
    pub sender_id: Uuid,
    /// Body text.
    pub body: String,
}
