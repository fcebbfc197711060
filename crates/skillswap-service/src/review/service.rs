//! Review create/update/delete, each followed by a reputation
//! recomputation for the reviewee.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use skillswap_core::error::AppError;
use skillswap_core::types::pagination::{PageRequest, PageResponse};
use skillswap_database::repositories::review::ReviewRepository;
use skillswap_database::repositories::swap::SwapRepository;
use skillswap_entity::notification::NotificationKind;
use skillswap_entity::review::model::{rating_in_range, CreateReview, UpdateReview};
use skillswap_entity::review::Review;
use skillswap_entity::swap::SwapStatus;

use crate::context::RequestContext;
use crate::notification::NotificationService;
use crate::reputation::ReputationService;

/// Ratings for a new review; the reviewee is always the other
/// participant of the swap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    /// Overall rating, 1-5.
    pub overall: i16,
    /// Teaching quality, 1-5.
    pub teaching_quality: i16,
    /// Reliability, 1-5.
    pub reliability: i16,
    /// Communication, 1-5.
    pub communication: i16,
    /// Optional free-text comment.
    pub comment: Option<String>,
}

/// Handles reviews of completed swaps.
#[derive(Debug, Clone)]
pub struct ReviewService {
    review_repo: Arc<ReviewRepository>,
    swap_repo: Arc<SwapRepository>,
    reputation: Arc<ReputationService>,
    notifications: Arc<NotificationService>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(
        review_repo: Arc<ReviewRepository>,
        swap_repo: Arc<SwapRepository>,
        reputation: Arc<ReputationService>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            review_repo,
            swap_repo,
            reputation,
            notifications,
        }
    }

    /// Review the other participant of a completed swap.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        swap_id: Uuid,
        input: NewReview,
    ) -> Result<Review, AppError> {
        validate_ratings(&[
            input.overall,
            input.teaching_quality,
            input.reliability,
            input.communication,
        ])?;

        let swap = self
            .swap_repo
            .find_by_id(swap_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Swap request {swap_id} not found")))?;

        let reviewee = swap.counterpart_of(ctx.user_id).ok_or_else(|| {
            AppError::authorization("Only a participant can review this swap")
        })?;

        if swap.status != SwapStatus::Completed {
            return Err(AppError::validation(
                "Only a completed swap can be reviewed",
            ));
        }

        let review = self
            .review_repo
            .create(&CreateReview {
                swap_request_id: swap_id,
                reviewer_id: ctx.user_id,
                reviewee_id: reviewee,
                overall: input.overall,
                teaching_quality: input.teaching_quality,
                reliability: input.reliability,
                communication: input.communication,
                comment: input.comment,
            })
            .await?;

        info!(review_id = %review.id, swap_id = %swap_id, reviewer = %ctx.user_id, "Review created");

        self.recompute_best_effort(reviewee).await;

        self.notifications
            .notify(
                reviewee,
                NotificationKind::ReviewReceived,
                "New review",
                format!("{} left you a review", ctx.username),
                Some(format!("/users/{reviewee}/reviews")),
            )
            .await;

        Ok(review)
    }

    /// Edit one's own review.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        review_id: Uuid,
        input: UpdateReview,
    ) -> Result<Review, AppError> {
        let ratings: Vec<i16> = [
            input.overall,
            input.teaching_quality,
            input.reliability,
            input.communication,
        ]
        .into_iter()
        .flatten()
        .collect();
        validate_ratings(&ratings)?;

        let existing = self.require(review_id).await?;
        if existing.reviewer_id != ctx.user_id {
            return Err(AppError::authorization(
                "Only the author can edit a review",
            ));
        }

        let review = self.review_repo.update(review_id, &input).await?;
        info!(review_id = %review_id, "Review updated");

        self.recompute_best_effort(review.reviewee_id).await;

        Ok(review)
    }

    /// Delete one's own review.
    pub async fn delete(&self, ctx: &RequestContext, review_id: Uuid) -> Result<(), AppError> {
        let existing = self.require(review_id).await?;
        if existing.reviewer_id != ctx.user_id {
            return Err(AppError::authorization(
                "Only the author can delete a review",
            ));
        }

        self.review_repo.delete(review_id).await?;
        info!(review_id = %review_id, "Review deleted");

        self.recompute_best_effort(existing.reviewee_id).await;

        Ok(())
    }

    /// Reviews received by a user.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> Result<PageResponse<Review>, AppError> {
        self.review_repo.find_by_reviewee(user_id, page).await
    }

    async fn require(&self, id: Uuid) -> Result<Review, AppError> {
        self.review_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Review {id} not found")))
    }

    /// The primary review write already succeeded; a failed recompute is
    /// logged, leaving the stale aggregate to the next recomputation.
    async fn recompute_best_effort(&self, reviewee_id: Uuid) {
        if let Err(e) = self.reputation.recompute(reviewee_id).await {
            warn!(user_id = %reviewee_id, error = %e, "Failed to recompute reputation");
        }
    }
}

fn validate_ratings(ratings: &[i16]) -> Result<(), AppError> {
    if ratings.iter().any(|r| !rating_in_range(*r)) {
        return Err(AppError::validation("Ratings must be between 1 and 5"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ratings() {
        assert!(validate_ratings(&[1, 3, 5]).is_ok());
        assert!(validate_ratings(&[]).is_ok());
        assert!(validate_ratings(&[0]).is_err());
        assert!(validate_ratings(&[6]).is_err());
    }
}
