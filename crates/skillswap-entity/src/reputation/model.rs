//! Reputation entity model.
//!
//! Derived state: one row per user, recomputed from the full review set
//! on every review create/update/delete and on swap completion. Last
//! writer wins; there is no versioning or audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Derived rating aggregate and trust score for a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reputation {
    /// The user this reputation belongs to.
    pub user_id: Uuid,
    /// Arithmetic mean of all overall ratings received.
    pub avg_overall: f64,
    /// Mean teaching-quality rating.
    pub avg_teaching_quality: f64,
    /// Mean reliability rating.
    pub avg_reliability: f64,
    /// Mean communication rating.
    pub avg_communication: f64,
    /// Number of reviews received.
    pub review_count: i64,
    /// Number of completed swaps the user took part in.
    pub completed_swaps: i64,
    /// Bounded [0, 100] heuristic blending rating and swap volume.
    pub trust_score: f64,
    /// When the row was last recomputed.
    pub updated_at: DateTime<Utc>,
}
