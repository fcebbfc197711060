//! Integration tests for registration and login.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_issues_tokens_and_seeds_balance() {
    let Some(app) = TestApp::spawn().await else { return };

    let (token, _) = app.register_user("reg").await;

    // The signup bonus is seeded inside the registration transaction.
    assert_eq!(app.balance_of(&token).await, 25);

    let history = app
        .request("GET", "/api/credits/transactions", None, Some(&token))
        .await;
    assert_eq!(history.status, StatusCode::OK);
    let items = history.data()["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["reason"], "signup_bonus");
    assert_eq!(items[0]["amount"], 25);
}

#[tokio::test]
async fn test_register_duplicate_username_rejected() {
    let Some(app) = TestApp::spawn().await else { return };

    let username = format!("dup_{}", uuid_suffix());

    let register = |email: String| {
        serde_json::json!({
            "username": username,
            "email": email,
            "password": "violet-Tractor-91-moon",
        })
    };

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(register(format!("{}@example.com", uuid_suffix()))),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(register(format!("{}@example.com", uuid_suffix()))),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_register_weak_password_rejected() {
    let Some(app) = TestApp::spawn().await else { return };

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": format!("weak_{}", uuid_suffix()),
                "email": format!("{}@example.com", uuid_suffix()),
                "password": "password1",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let Some(app) = TestApp::spawn().await else { return };

    let (_, _) = app.register_user("login").await;
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "definitely-not-a-user",
                "password": "wrong-password-123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_requires_auth() {
    let Some(app) = TestApp::spawn().await else { return };

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let (token, _) = app.register_user("me").await;
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data()["username"].as_str().unwrap().starts_with("me_"));
}

fn uuid_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}
