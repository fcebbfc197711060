//! `AuthUser` extractor — pulls the JWT from the Authorization header,
//! validates it, loads the principal, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use skillswap_core::error::AppError;
use skillswap_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Suspended and banned accounts are rejected here, before any handler
/// runs; services trust the principal completely.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode_access_token(token)?;

        let user = state
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

        if !user.status.can_act() {
            return Err(AppError::authentication("Account is suspended or banned").into());
        }

        Ok(AuthUser(RequestContext::new(user.id, user.username)))
    }
}
