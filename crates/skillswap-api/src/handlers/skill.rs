//! Skill CRUD handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use skillswap_entity::skill::{SkillLevel, SkillOffered, SkillPriority, SkillWanted};

use crate::dto;
use crate::dto::request::{CreateSkillOfferedRequest, CreateSkillWantedRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/skills/offered
pub async fn add_offered(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSkillOfferedRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SkillOffered>>), ApiError> {
    dto::validate(&req)?;
    let level: SkillLevel = req.level.parse()?;

    let skill = state
        .skill_service
        .add_offered(&auth, req.name, req.category, level, req.description)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(skill))))
}

/// POST /api/skills/wanted
pub async fn add_wanted(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSkillWantedRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SkillWanted>>), ApiError> {
    dto::validate(&req)?;
    let priority = req
        .priority
        .as_deref()
        .map(str::parse)
        .transpose()?
        .unwrap_or(SkillPriority::Medium);

    let skill = state
        .skill_service
        .add_wanted(&auth, req.name, req.category, priority)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(skill))))
}

/// GET /api/skills/offered
pub async fn list_offered(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<SkillOffered>>>, ApiError> {
    let skills = state.skill_service.list_offered(&auth).await?;
    Ok(Json(ApiResponse::ok(skills)))
}

/// GET /api/skills/wanted
pub async fn list_wanted(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<SkillWanted>>>, ApiError> {
    let skills = state.skill_service.list_wanted(&auth).await?;
    Ok(Json(ApiResponse::ok(skills)))
}

/// DELETE /api/skills/offered/{id}
pub async fn remove_offered(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.skill_service.remove_offered(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Skill removed"))))
}

/// DELETE /api/skills/wanted/{id}
pub async fn remove_wanted(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.skill_service.remove_wanted(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Skill removed"))))
}
