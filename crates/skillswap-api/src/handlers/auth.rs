//! Auth handlers: register, login, refresh, me.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use skillswap_service::auth::{AuthenticatedUser, Registration};

use crate::dto;
use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

fn auth_response(authed: AuthenticatedUser) -> AuthResponse {
    AuthResponse {
        access_token: authed.tokens.access_token,
        refresh_token: authed.tokens.refresh_token,
        access_expires_at: authed.tokens.access_expires_at,
        refresh_expires_at: authed.tokens.refresh_expires_at,
        user: authed.user.into(),
    }
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), ApiError> {
    dto::validate(&req)?;

    let authed = state
        .auth_service
        .register(Registration {
            username: req.username,
            email: req.email,
            password: req.password,
            display_name: req.display_name,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(auth_response(authed))),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    dto::validate(&req)?;

    let authed = state.auth_service.login(&req.username, &req.password).await?;
    Ok(Json(ApiResponse::ok(auth_response(authed))))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let authed = state.auth_service.refresh(&req.refresh_token).await?;
    Ok(Json(ApiResponse::ok(auth_response(authed))))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.auth_service.me(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
