//! Reputation repository implementation.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use skillswap_core::error::{AppError, ErrorKind};
use skillswap_core::result::AppResult;
use skillswap_entity::reputation::Reputation;

use super::review::ReviewAggregates;

/// One row of the trust-score leaderboard.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LeaderboardEntry {
    /// The ranked user.
    pub user_id: Uuid,
    /// Username.
    pub username: String,
    /// Display name, if set.
    pub display_name: Option<String>,
    /// Trust score.
    pub trust_score: f64,
    /// Mean overall rating.
    pub avg_overall: f64,
    /// Completed swap count.
    pub completed_swaps: i64,
}

/// Repository for the derived reputation rows.
#[derive(Debug, Clone)]
pub struct ReputationRepository {
    pool: PgPool,
}

impl ReputationRepository {
    /// Create a new reputation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a user's reputation row.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Reputation>> {
        sqlx::query_as::<_, Reputation>("SELECT * FROM reputations WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find reputation", e))
    }

    /// Write the recomputed aggregate. Last writer wins.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        aggregates: &ReviewAggregates,
        completed_swaps: i64,
        trust_score: f64,
    ) -> AppResult<Reputation> {
        sqlx::query_as::<_, Reputation>(
            "INSERT INTO reputations \
             (user_id, avg_overall, avg_teaching_quality, avg_reliability, avg_communication, \
              review_count, completed_swaps, trust_score, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW()) \
             ON CONFLICT (user_id) DO UPDATE \
                SET avg_overall = $2, avg_teaching_quality = $3, avg_reliability = $4, \
                    avg_communication = $5, review_count = $6, completed_swaps = $7, \
                    trust_score = $8, updated_at = NOW() \
             RETURNING *",
        )
        .bind(user_id)
        .bind(aggregates.avg_overall)
        .bind(aggregates.avg_teaching_quality)
        .bind(aggregates.avg_reliability)
        .bind(aggregates.avg_communication)
        .bind(aggregates.review_count)
        .bind(completed_swaps)
        .bind(trust_score)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert reputation", e))
    }

    /// Top users by trust score, for the leaderboard.
    pub async fn leaderboard(&self, limit: i64) -> AppResult<Vec<LeaderboardEntry>> {
        sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT r.user_id, u.username, u.display_name, r.trust_score, \
                    r.avg_overall, r.completed_swaps \
             FROM reputations r \
             JOIN users u ON u.id = r.user_id \
             WHERE u.status = 'active' AND u.is_public \
             ORDER BY r.trust_score DESC, r.completed_swaps DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load leaderboard", e))
    }
}
