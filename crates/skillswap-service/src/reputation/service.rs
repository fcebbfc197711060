//! Reputation recomputation — derived ratings and the trust score.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use skillswap_core::error::AppError;
use skillswap_database::repositories::reputation::{LeaderboardEntry, ReputationRepository};
use skillswap_database::repositories::review::ReviewRepository;
use skillswap_database::repositories::swap::SwapRepository;
use skillswap_entity::reputation::Reputation;

/// Upper bound of the trust score.
const TRUST_CEILING: f64 = 100.0;
/// Cap on the completed-swap volume bonus.
const VOLUME_BONUS_CAP: f64 = 20.0;

/// Recomputes a user's derived rating aggregate and trust score.
///
/// Called whenever a review is created, updated, or deleted, and when a
/// swap completes. The single reputation row is overwritten each time;
/// last writer wins, with no guard against concurrent review writes for
/// the same user racing each other.
#[derive(Debug, Clone)]
pub struct ReputationService {
    reputation_repo: Arc<ReputationRepository>,
    review_repo: Arc<ReviewRepository>,
    swap_repo: Arc<SwapRepository>,
}

impl ReputationService {
    /// Creates a new reputation service.
    pub fn new(
        reputation_repo: Arc<ReputationRepository>,
        review_repo: Arc<ReviewRepository>,
        swap_repo: Arc<SwapRepository>,
    ) -> Self {
        Self {
            reputation_repo,
            review_repo,
            swap_repo,
        }
    }

    /// Recompute and persist the reputation row for a user.
    pub async fn recompute(&self, user_id: Uuid) -> Result<Reputation, AppError> {
        let aggregates = self.review_repo.aggregates_for(user_id).await?;
        let completed = self.swap_repo.count_completed_for(user_id).await?;
        let trust = trust_score(aggregates.avg_overall, completed);

        debug!(
            user_id = %user_id,
            reviews = aggregates.review_count,
            completed_swaps = completed,
            trust_score = trust,
            "Recomputed reputation"
        );

        self.reputation_repo
            .upsert(user_id, &aggregates, completed, trust)
            .await
    }

    /// Fetch a user's reputation row.
    pub async fn get(&self, user_id: Uuid) -> Result<Option<Reputation>, AppError> {
        self.reputation_repo.find_by_user(user_id).await
    }

    /// Top users by trust score.
    pub async fn leaderboard(&self, limit: i64) -> Result<Vec<LeaderboardEntry>, AppError> {
        self.reputation_repo.leaderboard(limit).await
    }
}

/// Trust score heuristic: `min(avg_rating x 20 + min(completed x 2, 20), 100)`.
///
/// A perfect 5.0 average alone yields 100; swap volume adds up to 20
/// points for users with middling averages.
pub fn trust_score(avg_overall: f64, completed_swaps: i64) -> f64 {
    let volume_bonus = (completed_swaps as f64 * 2.0).min(VOLUME_BONUS_CAP);
    (avg_overall * 20.0 + volume_bonus).min(TRUST_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trust_score_formula() {
        assert_eq!(trust_score(0.0, 0), 0.0);
        assert_eq!(trust_score(4.0, 5), 90.0);
        assert_eq!(trust_score(5.0, 0), 100.0);
        // Volume bonus caps at 20.
        assert_eq!(trust_score(3.0, 50), 80.0);
        // Overall score caps at 100.
        assert_eq!(trust_score(5.0, 50), 100.0);
    }

    #[test]
    fn test_trust_score_unreviewed_user() {
        // No reviews: only the volume bonus counts.
        assert_eq!(trust_score(0.0, 3), 6.0);
        assert_eq!(trust_score(0.0, 100), 20.0);
    }
}
