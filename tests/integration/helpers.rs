//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use skillswap_core::config::auth::AuthConfig;
use skillswap_core::config::credits::CreditsConfig;
use skillswap_core::config::database::DatabaseConfig;
use skillswap_core::config::logging::LoggingConfig;
use skillswap_core::config::meeting::MeetingConfig;
use skillswap_core::config::server::{CorsConfig, ServerConfig};
use skillswap_core::config::swap::SwapConfig;
use skillswap_core::config::AppConfig;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct queries.
    pub db_pool: PgPool,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed JSON body (Null when empty).
    pub body: Value,
}

impl TestResponse {
    /// The `data` field of the standard envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }
}

fn test_config(database_url: String) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            shutdown_grace_seconds: 1,
            cors: CorsConfig::default(),
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        },
        auth: AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            jwt_access_ttl_minutes: 15,
            jwt_refresh_ttl_hours: 24,
            min_password_length: 8,
        },
        swap: SwapConfig {
            default_expiry_days: 7,
            completion_award: 10,
        },
        credits: CreditsConfig { signup_bonus: 25 },
        meeting: MeetingConfig::default(),
        logging: LoggingConfig::default(),
    }
}

impl TestApp {
    /// Connect to the test database and build the full router.
    ///
    /// Returns `None` (test skipped) when `SKILLSWAP_TEST_DATABASE_URL`
    /// is not set.
    pub async fn spawn() -> Option<Self> {
        let Ok(url) = std::env::var("SKILLSWAP_TEST_DATABASE_URL") else {
            eprintln!("SKILLSWAP_TEST_DATABASE_URL not set; skipping integration test");
            return None;
        };

        let config = test_config(url);

        let db = skillswap_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        skillswap_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let db_pool = db.pool().clone();

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
            skillswap_database::repositories::reputation::ReputationRepository::new(
                db_pool.clone(),
            ),
        );
        let credit_repo = Arc::new(
            skillswap_database::repositories::credit::CreditRepository::new(db_pool.clone()),
        );
        let notification_repo = Arc::new(
            skillswap_database::repositories::notification::NotificationRepository::new(
                db_pool.clone(),
            ),
        );

        let password_hasher = Arc::new(skillswap_auth::password::PasswordHasher::new());
        let password_validator = Arc::new(skillswap_auth::password::PasswordValidator::new(
            &config.auth,
        ));
        let jwt_encoder = Arc::new(skillswap_auth::jwt::JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(skillswap_auth::jwt::JwtDecoder::new(&config.auth));

        let inviter: Arc<dyn skillswap_service::meeting::MeetingInviter> =
            Arc::new(skillswap_service::meeting::DisabledMeetingInviter);

        let notification_service =
            Arc::new(skillswap_service::notification::NotificationService::new(
                Arc::clone(&notification_repo),
            ));
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

        let state = skillswap_api::state::AppState {
            config: Arc::new(config),
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

        Some(Self {
            router: skillswap_api::router::build_router(state),
            db_pool,
        })
    }

    /// Issue a request against the in-process router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Register a fresh user through the API; returns (token, user_id).
    pub async fn register_user(&self, prefix: &str) -> (String, Uuid) {
        let suffix = &Uuid::new_v4().simple().to_string()[..8];
        let username = format!("{prefix}_{suffix}");

        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "username": username,
                    "email": format!("{username}@example.com"),
                    "password": "violet-Tractor-91-moon",
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        let token = response.data()["access_token"]
            .as_str()
            .expect("No access token")
            .to_string();
        let user_id = response.data()["user"]["id"]
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("No user id");
        (token, user_id)
    }

    /// Create a pending swap request from the token holder to `receiver`.
    pub async fn create_swap(&self, token: &str, receiver: Uuid) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/swap-requests",
                Some(serde_json::json!({
                    "receiver_id": receiver,
                    "skill_offered": "Guitar",
                    "skill_requested": "Spanish",
                })),
                Some(token),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.data()["id"]
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("No swap id")
    }

    /// Drive a swap through create → accept → complete.
    pub async fn complete_swap(
        &self,
        requester_token: &str,
        receiver_token: &str,
        receiver_id: Uuid,
    ) -> Uuid {
        let swap_id = self.create_swap(requester_token, receiver_id).await;

        let accepted = self
            .request(
                "POST",
                &format!("/api/swap-requests/{swap_id}/accept"),
                None,
                Some(receiver_token),
            )
            .await;
        assert_eq!(accepted.status, StatusCode::OK, "{:?}", accepted.body);

        let completed = self
            .request(
                "PUT",
                &format!("/api/swap-requests/{swap_id}/status"),
                Some(serde_json::json!({ "status": "completed" })),
                Some(requester_token),
            )
            .await;
        assert_eq!(completed.status, StatusCode::OK, "{:?}", completed.body);

        swap_id
    }

    /// Current credit balance, read through the API.
    pub async fn balance_of(&self, token: &str) -> i64 {
        let response = self.request("GET", "/api/credits", None, Some(token)).await;
        assert_eq!(response.status, StatusCode::OK);
        response.data()["balance"].as_i64().expect("No balance")
    }
}
