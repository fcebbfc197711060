//! User profile aggregation and self-service updates.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use skillswap_core::error::AppError;
use skillswap_database::repositories::reputation::ReputationRepository;
use skillswap_database::repositories::skill::SkillRepository;
use skillswap_database::repositories::user::UserRepository;
use skillswap_entity::reputation::Reputation;
use skillswap_entity::skill::{SkillOffered, SkillWanted};
use skillswap_entity::user::model::UpdateProfile;
use skillswap_entity::user::User;

use crate::context::RequestContext;

/// A user together with their skills and reputation.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    /// The account (password hash never serialized).
    pub user: User,
    /// Skills the user teaches.
    pub skills_offered: Vec<SkillOffered>,
    /// Skills the user wants to learn.
    pub skills_wanted: Vec<SkillWanted>,
    /// Derived rating aggregate.
    pub reputation: Option<Reputation>,
}

/// Handles profile reads and self-service updates.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    skill_repo: Arc<SkillRepository>,
    reputation_repo: Arc<ReputationRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        skill_repo: Arc<SkillRepository>,
        reputation_repo: Arc<ReputationRepository>,
    ) -> Self {
        Self {
            user_repo,
            skill_repo,
            reputation_repo,
        }
    }

    /// Fetch a user's profile.
    ///
    /// Private profiles are visible to their owner only; everyone else
    /// gets a 404 rather than a confirmation that the account exists.
    /// The three related reads are independent and awaited together.
    pub async fn get_profile(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
    ) -> Result<UserProfile, AppError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;

        if !user.is_public && user.id != ctx.user_id {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }

        let (skills_offered, skills_wanted, reputation) = tokio::try_join!(
            self.skill_repo.find_offered_by_user(user_id),
            self.skill_repo.find_wanted_by_user(user_id),
            self.reputation_repo.find_by_user(user_id),
        )?;

        Ok(UserProfile {
            user,
            skills_offered,
            skills_wanted,
            reputation,
        })
    }

    /// Update the current user's profile fields.
    pub async fn update_me(
        &self,
        ctx: &RequestContext,
        update: UpdateProfile,
    ) -> Result<User, AppError> {
        if let Some(ref display_name) = update.display_name {
            if display_name.trim().is_empty() {
                return Err(AppError::validation("Display name cannot be empty"));
            }
        }

        let user = self.user_repo.update_profile(ctx.user_id, &update).await?;
        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }
}
