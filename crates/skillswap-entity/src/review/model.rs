//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lowest allowed sub-rating.
pub const MIN_RATING: i16 = 1;
/// Highest allowed sub-rating.
pub const MAX_RATING: i16 = 5;

/// A review written by one participant of a completed swap about the other.
///
/// Unique per (swap_request, reviewer).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    /// Unique identifier.
    pub id: Uuid,
    /// The completed swap being reviewed.
    pub swap_request_id: Uuid,
    /// The participant writing the review.
    pub reviewer_id: Uuid,
    /// The participant being reviewed.
    pub reviewee_id: Uuid,
    /// Overall rating, 1–5.
    pub overall: i16,
    /// How well the reviewee taught, 1–5.
    pub teaching_quality: i16,
    /// Whether the reviewee showed up as agreed, 1–5.
    pub reliability: i16,
    /// Communication quality, 1–5.
    pub communication: i16,
    /// Optional free-text comment.
    pub comment: Option<String>,
    /// When the review was written.
    pub created_at: DateTime<Utc>,
    /// When the review was last edited.
    pub updated_at: DateTime<Utc>,
}

/// Data to create a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReview {
    /// The completed swap being reviewed.
    pub swap_request_id: Uuid,
    /// Author.
    pub reviewer_id: Uuid,
    /// Subject.
    pub reviewee_id: Uuid,
    /// Overall rating, 1–5.
    pub overall: i16,
    /// Teaching quality, 1–5.
    pub teaching_quality: i16,
    /// Reliability, 1–5.
    pub reliability: i16,
    /// Communication, 1–5.
    pub communication: i16,
    /// Optional comment.
    pub comment: Option<String>,
}

/// Data to edit an existing review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReview {
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

/// Check that a sub-rating falls in the allowed 1–5 range.
pub fn rating_in_range(value: i16) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(rating_in_range(1));
        assert!(rating_in_range(5));
        assert!(!rating_in_range(0));
        assert!(!rating_in_range(6));
    }
}
