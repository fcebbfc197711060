//! Skill Swap server — skill-exchange platform backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use skillswap_core::config::AppConfig;
use skillswap_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("SKILLSWAP_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Skill Swap v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = skillswap_database::DatabasePool::connect(&config.database).await?;
    skillswap_database::migration::run_migrations(db.pool()).await?;

    let db_pool = db.pool().clone();

    // ── Step 2: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(skillswap_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let skill_repo = Arc::new(
        skillswap_database::repositories::skill::SkillRepository::new(db_pool.clone()),
    );
    let swap_repo = Arc::new(skillswap_database::repositories::swap::SwapRepository::new(
        db_pool.clone(),
    ));
    let review_repo = Arc::new(
        skillswap_database::repositories::review::ReviewRepository::new(db_pool.clone()),
    );
    let reputation_repo = Arc::new(
        skillswap_database::repositories::reputation::ReputationRepository::new(db_pool.clone()),
    );
    let credit_repo = Arc::new(
        skillswap_database::repositories::credit::CreditRepository::new(db_pool.clone()),
    );
    let notification_repo = Arc::new(
        skillswap_database::repositories::notification::NotificationRepository::new(
            db_pool.clone(),
        ),
    );

    // ── Step 3: Initialize auth primitives ───────────────────────
    let password_hasher = Arc::new(skillswap_auth::password::PasswordHasher::new());
    let password_validator = Arc::new(skillswap_auth::password::PasswordValidator::new(
        &config.auth,
    ));
    let jwt_encoder = Arc::new(skillswap_auth::jwt::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(skillswap_auth::jwt::JwtDecoder::new(&config.auth));

    // ── Step 4: Meeting-invite collaborator ──────────────────────
    let inviter: Arc<dyn skillswap_service::meeting::MeetingInviter> = if config.meeting.enabled {
        tracing::info!(gateway = %config.meeting.gateway_url, "Meeting invites enabled");
        Arc::new(skillswap_service::meeting::HttpMeetingInviter::new(
            &config.meeting,
        )?)
    } else {
        tracing::info!("Meeting invites disabled");
        Arc::new(skillswap_service::meeting::DisabledMeetingInviter)
    };

    // ── Step 5: Initialize services ──────────────────────────────
    let notification_service = Arc::new(
        skillswap_service::notification::NotificationService::new(Arc::clone(&notification_repo)),
    );
    let reputation_service = Arc::new(skillswap_service::reputation::ReputationService::new(
        Arc::clone(&reputation_repo),
        Arc::clone(&review_repo),
        Arc::clone(&swap_repo),
    ));
    let credit_service = Arc::new(skillswap_service::credit::CreditService::new(
        Arc::clone(&credit_repo),
        Arc::clone(&user_repo),
        Arc::clone(&notification_service),
    ));
    let swap_service = Arc::new(skillswap_service::swap::SwapService::new(
        Arc::clone(&swap_repo),
        Arc::clone(&user_repo),
        Arc::clone(&notification_service),
        Arc::clone(&credit_service),
        Arc::clone(&reputation_service),
        Arc::clone(&inviter),
        config.swap.clone(),
    ));
    let review_service = Arc::new(skillswap_service::review::ReviewService::new(
        Arc::clone(&review_repo),
        Arc::clone(&swap_repo),
        Arc::clone(&reputation_service),
        Arc::clone(&notification_service),
    ));
    let auth_service = Arc::new(skillswap_service::auth::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        config.credits.clone(),
    ));
    let user_service = Arc::new(skillswap_service::user::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&skill_repo),
        Arc::clone(&reputation_repo),
    ));
    let skill_service = Arc::new(skillswap_service::skill::SkillService::new(Arc::clone(
        &skill_repo,
    )));

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app_state = skillswap_api::state::AppState {
        config: Arc::new(config.clone()),
        db: db.clone(),
        jwt_decoder,
        user_repo,
        auth_service,
        user_service,
        skill_service,
        swap_service,
        review_service,
        reputation_service,
        credit_service,
        notification_service,
    };

    let app = skillswap_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Skill Swap server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("Skill Swap server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
