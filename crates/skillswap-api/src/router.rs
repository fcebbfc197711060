//! Route definitions for the Skill Swap HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(skill_routes())
        .merge(swap_routes())
        .merge(review_routes())
        .merge(credit_routes())
        .merge(notification_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// Profile and leaderboard endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::user::get_own_profile))
        .route("/users/me", put(handlers::user::update_profile))
        .route("/users/{id}", get(handlers::user::get_profile))
        .route("/users/{id}/reviews", get(handlers::review::list_for_user))
        .route("/leaderboard", get(handlers::user::leaderboard))
}

/// Offered/wanted skill CRUD
fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/skills/offered", get(handlers::skill::list_offered))
        .route("/skills/offered", post(handlers::skill::add_offered))
        .route(
            "/skills/offered/{id}",
            delete(handlers::skill::remove_offered),
        )
        .route("/skills/wanted", get(handlers::skill::list_wanted))
        .route("/skills/wanted", post(handlers::skill::add_wanted))
        .route(
            "/skills/wanted/{id}",
            delete(handlers::skill::remove_wanted),
        )
}

/// Swap-request lifecycle
fn swap_routes() -> Router<AppState> {
    Router::new()
        .route("/swap-requests", post(handlers::swap::create))
        .route("/swap-requests", get(handlers::swap::list))
        .route("/swap-requests/{id}", get(handlers::swap::get))
        .route("/swap-requests/{id}", delete(handlers::swap::cancel))
        .route("/swap-requests/{id}/accept", post(handlers::swap::accept))
        .route("/swap-requests/{id}/decline", post(handlers::swap::decline))
        .route(
            "/swap-requests/{id}/status",
            put(handlers::swap::update_status),
        )
        .route(
            "/swap-requests/{id}/schedule",
            post(handlers::swap::schedule),
        )
        .route(
            "/swap-requests/{id}/schedule",
            delete(handlers::swap::cancel_schedule),
        )
        .route(
            "/swap-requests/{id}/reviews",
            post(handlers::review::create),
        )
}

/// Review edit/delete
fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews/{id}", put(handlers::review::update))
        .route("/reviews/{id}", delete(handlers::review::delete))
}

/// Credit ledger endpoints
fn credit_routes() -> Router<AppState> {
    Router::new()
        .route("/credits", get(handlers::credit::summary))
        .route(
            "/credits/transactions",
            get(handlers::credit::transactions),
        )
        .route("/credits/transfer", post(handlers::credit::transfer))
}

/// Notification endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list))
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::notification::dismiss),
        )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}
