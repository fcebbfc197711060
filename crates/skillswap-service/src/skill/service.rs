//! Offered/wanted skill CRUD, owned by the calling user.

use std::sync::Arc;

use uuid::Uuid;

use skillswap_core::error::AppError;
use skillswap_database::repositories::skill::SkillRepository;
use skillswap_entity::skill::model::{CreateSkillOffered, CreateSkillWanted};
use skillswap_entity::skill::{SkillLevel, SkillOffered, SkillPriority, SkillWanted};

use crate::context::RequestContext;

/// Handles a user's offered and wanted skills.
#[derive(Debug, Clone)]
pub struct SkillService {
    skill_repo: Arc<SkillRepository>,
}

impl SkillService {
    /// Creates a new skill service.
    pub fn new(skill_repo: Arc<SkillRepository>) -> Self {
        Self { skill_repo }
    }

    /// Add an offered skill for the current user.
    pub async fn add_offered(
        &self,
        ctx: &RequestContext,
        name: String,
        category: String,
        level: SkillLevel,
        description: Option<String>,
    ) -> Result<SkillOffered, AppError> {
        self.skill_repo
            .create_offered(&CreateSkillOffered {
                user_id: ctx.user_id,
                name,
                category,
                level,
                description,
            })
            .await
    }

    /// Add a wanted skill for the current user.
    pub async fn add_wanted(
        &self,
        ctx: &RequestContext,
        name: String,
        category: String,
        priority: SkillPriority,
    ) -> Result<SkillWanted, AppError> {
        self.skill_repo
            .create_wanted(&CreateSkillWanted {
                user_id: ctx.user_id,
                name,
                category,
                priority,
            })
            .await
    }

    /// List the current user's offered skills.
    pub async fn list_offered(&self, ctx: &RequestContext) -> Result<Vec<SkillOffered>, AppError> {
        self.skill_repo.find_offered_by_user(ctx.user_id).await
    }

    /// List the current user's wanted skills.
    pub async fn list_wanted(&self, ctx: &RequestContext) -> Result<Vec<SkillWanted>, AppError> {
        self.skill_repo.find_wanted_by_user(ctx.user_id).await
    }

    /// Remove one of the current user's offered skills.
    pub async fn remove_offered(&self, ctx: &RequestContext, skill_id: Uuid) -> Result<(), AppError> {
        if !self.skill_repo.delete_offered(skill_id, ctx.user_id).await? {
            return Err(AppError::not_found(format!("Skill {skill_id} not found")));
        }
        Ok(())
    }

    /// Remove one of the current user's wanted skills.
    pub async fn remove_wanted(&self, ctx: &RequestContext, skill_id: Uuid) -> Result<(), AppError> {
        if !self.skill_repo.delete_wanted(skill_id, ctx.user_id).await? {
            return Err(AppError::not_found(format!("Skill {skill_id} not found")));
        }
        Ok(())
    }
}
