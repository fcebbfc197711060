//! User profile and leaderboard handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use skillswap_database::repositories::reputation::LeaderboardEntry;
use skillswap_entity::user::model::UpdateProfile;
use skillswap_service::user::UserProfile;

use crate::dto::response::{ApiResponse, UserResponse};
use crate::dto::request::UpdateProfileRequest;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users/{id}
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let profile = state.user_service.get_profile(&auth, id).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// GET /api/users/me
pub async fn get_own_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let profile = state.user_service.get_profile(&auth, auth.user_id).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /api/users/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_service
        .update_me(
            &auth,
            UpdateProfile {
                display_name: req.display_name,
                bio: req.bio,
                is_public: req.is_public,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// Query parameters for the leaderboard.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardParams {
    /// Number of entries to return (default 10, max 100).
    pub limit: Option<i64>,
}

/// GET /api/leaderboard
pub async fn leaderboard(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<ApiResponse<Vec<LeaderboardEntry>>>, ApiError> {
    let limit = params.limit.unwrap_or(10).clamp(1, 100);
    let entries = state.reputation_service.leaderboard(limit).await?;
    Ok(Json(ApiResponse::ok(entries)))
}
