//! Registration and credential flows.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use skillswap_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use skillswap_auth::password::{PasswordHasher, PasswordValidator};
use skillswap_core::config::credits::CreditsConfig;
use skillswap_core::error::AppError;
use skillswap_database::repositories::user::UserRepository;
use skillswap_entity::user::model::CreateUser;
use skillswap_entity::user::User;

use crate::context::RequestContext;

/// Input for the registration flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password (hashed before storage).
    pub password: String,
    /// Display name (optional).
    pub display_name: Option<String>,
}

/// A user together with a fresh token pair.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    /// The account.
    pub user: User,
    /// Fresh access + refresh tokens.
    pub tokens: TokenPair,
}

/// Handles registration, login, and token refresh.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    password_validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
    credits_config: CreditsConfig,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        password_validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        credits_config: CreditsConfig,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            password_validator,
            encoder,
            decoder,
            credits_config,
        }
    }

    /// Register a new account.
    ///
    /// The user row, its seeded credit balance, and its empty reputation
    /// row are created in one database transaction.
    pub async fn register(&self, input: Registration) -> Result<AuthenticatedUser, AppError> {
        self.password_validator.validate(&input.password)?;

        let password_hash = self.hasher.hash_password(&input.password)?;

        let user = self
            .user_repo
            .create_with_related(
                &CreateUser {
                    username: input.username,
                    email: input.email,
                    password_hash,
                    display_name: input.display_name,
                },
                self.credits_config.signup_bonus,
            )
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        let tokens = self.encoder.generate_token_pair(user.id, &user.username)?;
        Ok(AuthenticatedUser { user, tokens })
    }

    /// Verify credentials and issue a token pair.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthenticatedUser, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::authentication("Invalid username or password"));
        }

        if !user.status.can_act() {
            return Err(AppError::authentication("Account is suspended or banned"));
        }

        info!(user_id = %user.id, "User logged in");

        let tokens = self.encoder.generate_token_pair(user.id, &user.username)?;
        Ok(AuthenticatedUser { user, tokens })
    }

    /// Exchange a refresh token for a new pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthenticatedUser, AppError> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

        if !user.status.can_act() {
            return Err(AppError::authentication("Account is suspended or banned"));
        }

        let tokens = self.encoder.generate_token_pair(user.id, &user.username)?;
        Ok(AuthenticatedUser { user, tokens })
    }

    /// The current principal's account row.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
