//! Integration tests for the credit ledger.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_transfer_moves_balances_and_records_two_rows() {
    let Some(app) = TestApp::spawn().await else { return };

    let (sender, sender_id) = app.register_user("tx_snd").await;
    let (receiver, receiver_id) = app.register_user("tx_rcv").await;

    let sender_before = app.balance_of(&sender).await;
    let receiver_before = app.balance_of(&receiver).await;

    let response = app
        .request(
            "POST",
            "/api/credits/transfer",
            Some(serde_json::json!({
                "receiver_id": receiver_id,
                "amount": 10,
                "note": "thanks for the lesson",
            })),
            Some(&sender),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["balance"], sender_before - 10);

    assert_eq!(app.balance_of(&sender).await, sender_before - 10);
    assert_eq!(app.balance_of(&receiver).await, receiver_before + 10);

    // Exactly two ledger rows for this transfer, one per side.
    let rows: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM credit_transactions \
         WHERE (user_id = $1 AND counterpart_id = $2) \
            OR (user_id = $2 AND counterpart_id = $1)",
    )
    .bind(sender_id)
    .bind(receiver_id)
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(rows.0, 2);
}

#[tokio::test]
async fn test_transfer_exceeding_balance_changes_nothing() {
    let Some(app) = TestApp::spawn().await else { return };

    let (sender, _) = app.register_user("tx_poor").await;
    let (receiver, receiver_id) = app.register_user("tx_rich").await;

    let sender_before = app.balance_of(&sender).await;
    let receiver_before = app.balance_of(&receiver).await;

    let response = app
        .request(
            "POST",
            "/api/credits/transfer",
            Some(serde_json::json!({
                "receiver_id": receiver_id,
                "amount": sender_before + 1,
            })),
            Some(&sender),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INSUFFICIENT_FUNDS");

    assert_eq!(app.balance_of(&sender).await, sender_before);
    assert_eq!(app.balance_of(&receiver).await, receiver_before);
}

#[tokio::test]
async fn test_transfer_to_self_rejected() {
    let Some(app) = TestApp::spawn().await else { return };

    let (sender, sender_id) = app.register_user("tx_self").await;

    let response = app
        .request(
            "POST",
            "/api/credits/transfer",
            Some(serde_json::json!({
                "receiver_id": sender_id,
                "amount": 5,
            })),
            Some(&sender),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transfer_to_missing_user_is_404() {
    let Some(app) = TestApp::spawn().await else { return };

    let (sender, _) = app.register_user("tx_ghost").await;

    let response = app
        .request(
            "POST",
            "/api/credits/transfer",
            Some(serde_json::json!({
                "receiver_id": uuid::Uuid::new_v4(),
                "amount": 5,
            })),
            Some(&sender),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
