//! Review repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use skillswap_core::error::{AppError, ErrorKind};
use skillswap_core::result::AppResult;
use skillswap_core::types::pagination::{PageRequest, PageResponse};
use skillswap_entity::review::model::{CreateReview, UpdateReview};
use skillswap_entity::review::Review;

/// Rating aggregates over all reviews received by one user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewAggregates {
    /// Number of reviews.
    pub review_count: i64,
    /// Mean overall rating (0 when unreviewed).
    pub avg_overall: f64,
    /// Mean teaching-quality rating.
    pub avg_teaching_quality: f64,
    /// Mean reliability rating.
    pub avg_reliability: f64,
    /// Mean communication rating.
    pub avg_communication: f64,
}

/// Repository for review CRUD and aggregation.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a review. Fails with a conflict when the reviewer has
    /// already reviewed this swap.
    pub async fn create(&self, data: &CreateReview) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews \
             (swap_request_id, reviewer_id, reviewee_id, overall, teaching_quality, \
              reliability, communication, comment) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(data.swap_request_id)
        .bind(data.reviewer_id)
        .bind(data.reviewee_id)
        .bind(data.overall)
        .bind(data.teaching_quality)
        .bind(data.reliability)
        .bind(data.communication)
        .bind(&data.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("reviews_swap_request_id_reviewer_id_key") =>
            {
                AppError::conflict("You have already reviewed this swap")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create review", e),
        })
    }

    /// Find a review by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Review>> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find review", e))
    }

    /// Update a review's ratings and comment.
    pub async fn update(&self, id: Uuid, data: &UpdateReview) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "UPDATE reviews SET overall = COALESCE($2, overall), \
                                teaching_quality = COALESCE($3, teaching_quality), \
                                reliability = COALESCE($4, reliability), \
                                communication = COALESCE($5, communication), \
                                comment = COALESCE($6, comment), \
                                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.overall)
        .bind(data.teaching_quality)
        .bind(data.reliability)
        .bind(data.communication)
        .bind(&data.comment)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update review", e))?
        .ok_or_else(|| AppError::not_found(format!("Review {id} not found")))
    }

    /// Delete a review.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete review", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// List reviews received by a user, newest first.
    pub async fn find_by_reviewee(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Review>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE reviewee_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count reviews", e))?;

        let reviews = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE reviewee_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reviews", e))?;

        Ok(PageResponse::new(
            reviews,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Compute rating aggregates across all reviews for a user.
    pub async fn aggregates_for(&self, user_id: Uuid) -> AppResult<ReviewAggregates> {
        sqlx::query_as::<_, ReviewAggregates>(
            "SELECT COUNT(*) AS review_count, \
                    COALESCE(AVG(overall), 0)::DOUBLE PRECISION AS avg_overall, \
                    COALESCE(AVG(teaching_quality), 0)::DOUBLE PRECISION AS avg_teaching_quality, \
                    COALESCE(AVG(reliability), 0)::DOUBLE PRECISION AS avg_reliability, \
                    COALESCE(AVG(communication), 0)::DOUBLE PRECISION AS avg_communication \
             FROM reviews WHERE reviewee_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to aggregate reviews", e))
    }
}
