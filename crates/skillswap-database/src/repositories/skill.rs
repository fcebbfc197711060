//! Skill repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use skillswap_core::error::{AppError, ErrorKind};
use skillswap_core::result::AppResult;
use skillswap_entity::skill::model::{CreateSkillOffered, CreateSkillWanted};
use skillswap_entity::skill::{SkillOffered, SkillWanted};

/// Repository for offered and wanted skills.
#[derive(Debug, Clone)]
pub struct SkillRepository {
    pool: PgPool,
}

impl SkillRepository {
    /// Create a new skill repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add an offered skill.
    pub async fn create_offered(&self, data: &CreateSkillOffered) -> AppResult<SkillOffered> {
        sqlx::query_as::<_, SkillOffered>(
            "INSERT INTO skills_offered (user_id, name, category, level, description) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.level)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create offered skill", e)
        })
    }

    /// Add a wanted skill.
    pub async fn create_wanted(&self, data: &CreateSkillWanted) -> AppResult<SkillWanted> {
        sqlx::query_as::<_, SkillWanted>(
            "INSERT INTO skills_wanted (user_id, name, category, priority) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.priority)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create wanted skill", e)
        })
    }

    /// List a user's offered skills.
    pub async fn find_offered_by_user(&self, user_id: Uuid) -> AppResult<Vec<SkillOffered>> {
        sqlx::query_as::<_, SkillOffered>(
            "SELECT * FROM skills_offered WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list offered skills", e))
    }

    /// List a user's wanted skills.
    pub async fn find_wanted_by_user(&self, user_id: Uuid) -> AppResult<Vec<SkillWanted>> {
        sqlx::query_as::<_, SkillWanted>(
            "SELECT * FROM skills_wanted WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list wanted skills", e))
    }

    /// Delete an offered skill owned by the given user.
    pub async fn delete_offered(&self, skill_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM skills_offered WHERE id = $1 AND user_id = $2")
            .bind(skill_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete offered skill", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a wanted skill owned by the given user.
    pub async fn delete_wanted(&self, skill_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM skills_wanted WHERE id = $1 AND user_id = $2")
            .bind(skill_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete wanted skill", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
