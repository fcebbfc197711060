//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password (also checked against the strength policy).
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Display name.
    pub display_name: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// Display name.
    pub display_name: Option<String>,
    /// Bio text.
    pub bio: Option<String>,
    /// Profile visibility.
    pub is_public: Option<bool>,
}

/// Add an offered skill.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSkillOfferedRequest {
    /// Skill name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Category.
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    /// Proficiency level: beginner/intermediate/advanced/expert.
    pub level: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Add a wanted skill.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSkillWantedRequest {
    /// Skill name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Category.
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    /// Priority: low/medium/high.
    pub priority: Option<String>,
}

/// Create a swap request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSwapRequestBody {
    /// Target user.
    pub receiver_id: Uuid,
    /// Skill offered to teach.
    #[validate(length(min = 1, max = 100))]
    pub skill_offered: String,
    /// Skill to learn.
    #[validate(length(min = 1, max = 100))]
    pub skill_requested: String,
    /// Optional introductory message.
    pub message: Option<String>,
    /// Format: video/in_person/chat (defaults to video).
    pub format: Option<String>,
    /// Planned session length in minutes.
    #[validate(range(min = 15, max = 480))]
    pub duration_minutes: Option<i32>,
    /// Priority: low/medium/high (defaults to medium).
    pub priority: Option<String>,
    /// Explicit expiry; defaults to the configured window.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Session details supplied when accepting or scheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSessionRequest {
    /// When the session takes place.
    pub scheduled_at: DateTime<Utc>,
    /// Optional video-call link.
    pub meeting_link: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// Optional body for the accept endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptSwapRequestBody {
    /// Book the session in the same call.
    pub schedule: Option<ScheduleSessionRequest>,
}

/// Generic status update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSwapStatusRequest {
    /// Target status: accepted/declined/completed.
    pub status: String,
    /// Optional message appended to the swap's thread.
    pub message: Option<String>,
}

/// Create a review of the other participant.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReviewRequest {
    /// Overall rating, 1-5.
    #[validate(range(min = 1, max = 5))]
    pub overall: i16,
    /// Teaching quality, 1-5.
    #[validate(range(min = 1, max = 5))]
    pub teaching_quality: i16,
    /// Reliability, 1-5.
    #[validate(range(min = 1, max = 5))]
    pub reliability: i16,
    /// Communication, 1-5.
    #[validate(range(min = 1, max = 5))]
    pub communication: i16,
    /// Optional comment.
    pub comment: Option<String>,
}

/// Edit a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReviewRequest {
    /// New overall rating.
    pub overall: Option<i16>,
    /// New teaching quality rating.
    pub teaching_quality: Option<i16>,
    /// New reliability rating.
    pub reliability: Option<i16>,
    /// New communication rating.
    pub communication: Option<i16>,
    /// New comment.
    pub comment: Option<String>,
}

/// Transfer credits to another user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransferCreditsRequest {
    /// Receiving user.
    pub receiver_id: Uuid,
    /// Amount to transfer.
    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount: i64,
    /// Optional note stored on both ledger rows.
    pub note: Option<String>,
}
