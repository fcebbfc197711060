//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use skillswap_auth::jwt::JwtDecoder;
use skillswap_core::config::AppConfig;
use skillswap_database::repositories::user::UserRepository;
use skillswap_database::DatabasePool;

use skillswap_service::auth::AuthService;
use skillswap_service::credit::CreditService;
use skillswap_service::notification::NotificationService;
use skillswap_service::reputation::ReputationService;
use skillswap_service::review::ReviewService;
use skillswap_service::skill::SkillService;
use skillswap_service::swap::SwapService;
use skillswap_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool wrapper (health checks).
    pub db: DatabasePool,
    /// JWT decoder used by the auth extractor.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// User repository used by the auth extractor to load the principal.
    pub user_repo: Arc<UserRepository>,

    /// Registration/login/refresh flows.
    pub auth_service: Arc<AuthService>,
    /// Profile reads and updates.
    pub user_service: Arc<UserService>,
    /// Offered/wanted skill CRUD.
    pub skill_service: Arc<SkillService>,
    /// Swap-request lifecycle (the core).
    pub swap_service: Arc<SwapService>,
    /// Reviews of completed swaps.
    pub review_service: Arc<ReviewService>,
    /// Derived reputation reads and the leaderboard.
    pub reputation_service: Arc<ReputationService>,
    /// Credit ledger operations.
    pub credit_service: Arc<CreditService>,
    /// Notification listing and read-state updates.
    pub notification_service: Arc<NotificationService>,
}
