//! Swap-request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::status::SwapStatus;

/// How the exchange will take place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "swap_format", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SwapFormat {
    /// Live video call.
    Video,
    /// Meet in person.
    InPerson,
    /// Asynchronous text chat.
    Chat,
}

impl SwapFormat {
    /// Return the format as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::InPerson => "in_person",
            Self::Chat => "chat",
        }
    }
}

impl fmt::Display for SwapFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SwapFormat {
    type Err = skillswap_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "video" => Ok(Self::Video),
            "in_person" => Ok(Self::InPerson),
            "chat" => Ok(Self::Chat),
            _ => Err(skillswap_core::AppError::validation(format!(
                "Invalid swap format: '{s}'. Expected one of: video, in_person, chat"
            ))),
        }
    }
}

/// Requester-assigned urgency of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "swap_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SwapPriority {
    /// Whenever convenient.
    Low,
    /// Normal.
    Medium,
    /// Time-sensitive.
    High,
}

impl SwapPriority {
    /// Return the priority as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for SwapPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SwapPriority {
    type Err = skillswap_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(skillswap_core::AppError::validation(format!(
                "Invalid swap priority: '{s}'. Expected one of: low, medium, high"
            ))),
        }
    }
}

/// The central record of a proposed skill exchange between two users.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SwapRequest {
    /// Unique identifier.
    pub id: Uuid,
    /// The user who initiated the request.
    pub requester_id: Uuid,
    /// The user being asked to swap.
    pub receiver_id: Uuid,
    /// Skill the requester offers to teach.
    pub skill_offered: String,
    /// Skill the requester wants to learn.
    pub skill_requested: String,
    /// Optional introductory message.
    pub message: Option<String>,
    /// Exchange format.
    pub format: SwapFormat,
    /// Planned session length in minutes.
    pub duration_minutes: Option<i32>,
    /// Requester-assigned urgency.
    pub priority: SwapPriority,
    /// Current lifecycle state.
    pub status: SwapStatus,
    /// When the request lapses (stored, never enforced by a worker).
    pub expires_at: Option<DateTime<Utc>>,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// When the request was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the swap was completed, if it was.
    pub completed_at: Option<DateTime<Utc>>,
}

impl SwapRequest {
    /// Whether the given user is one of the two participants.
    pub fn is_participant(&self, user_id: Uuid) -> bool {
        self.requester_id == user_id || self.receiver_id == user_id
    }

    /// The other participant, seen from `user_id`'s side.
    ///
    /// Returns `None` when `user_id` is not a participant.
    pub fn counterpart_of(&self, user_id: Uuid) -> Option<Uuid> {
        if self.requester_id == user_id {
            Some(self.receiver_id)
        } else if self.receiver_id == user_id {
            Some(self.requester_id)
        } else {
            None
        }
    }
}

/// Data to create a new swap request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSwapRequest {
    /// Initiating user.
    pub requester_id: Uuid,
    /// Target user.
    pub receiver_id: Uuid,
    /// Skill the requester offers.
    pub skill_offered: String,
    /// Skill the requester wants.
    pub skill_requested: String,
    /// Optional introductory message.
    pub message: Option<String>,
    /// Exchange format.
    pub format: SwapFormat,
    /// Planned session length in minutes.
    pub duration_minutes: Option<i32>,
    /// Urgency.
    pub priority: SwapPriority,
    /// When the request lapses.
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(requester: Uuid, receiver: Uuid) -> SwapRequest {
        SwapRequest {
            id: Uuid::new_v4(),
            requester_id: requester,
            receiver_id: receiver,
            skill_offered: "Guitar".to_string(),
            skill_requested: "Spanish".to_string(),
            message: None,
            format: SwapFormat::Video,
            duration_minutes: Some(60),
            priority: SwapPriority::Medium,
            status: SwapStatus::Pending,
            expires_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            completed_at: None,
        }
    }

    #[test]
    fn test_counterpart() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let swap = request(a, b);
        assert_eq!(swap.counterpart_of(a), Some(b));
        assert_eq!(swap.counterpart_of(b), Some(a));
        assert_eq!(swap.counterpart_of(Uuid::new_v4()), None);
    }
}
