//! Integration tests for the swap-request lifecycle.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_accept_flow() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("flow_req").await;
    let (receiver, receiver_id) = app.register_user("flow_rcv").await;

    let swap_id = app.create_swap(&requester, receiver_id).await;

    let detail = app
        .request(
            "GET",
            &format!("/api/swap-requests/{swap_id}"),
            None,
            Some(&requester),
        )
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.data()["request"]["status"], "pending");

    let accepted = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/accept"),
            None,
            Some(&receiver),
        )
        .await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert_eq!(accepted.data()["status"], "accepted");
}

#[tokio::test]
async fn test_duplicate_pending_request_rejected_both_directions() {
    let Some(app) = TestApp::spawn().await else { return };

    let (alice, alice_id) = app.register_user("dup_a").await;
    let (bob, bob_id) = app.register_user("dup_b").await;

    app.create_swap(&alice, bob_id).await;

    // Same direction.
    let response = app
        .request(
            "POST",
            "/api/swap-requests",
            Some(serde_json::json!({
                "receiver_id": bob_id,
                "skill_offered": "Piano",
                "skill_requested": "French",
            })),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["message"]
        .as_str()
        .unwrap()
        .contains("pending request already exists"));

    // Reverse direction is blocked too.
    let response = app
        .request(
            "POST",
            "/api/swap-requests",
            Some(serde_json::json!({
                "receiver_id": alice_id,
                "skill_offered": "French",
                "skill_requested": "Piano",
            })),
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_only_receiver_may_accept_or_decline() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("perm_req").await;
    let (_, receiver_id) = app.register_user("perm_rcv").await;
    let (outsider, _) = app.register_user("perm_out").await;

    let swap_id = app.create_swap(&requester, receiver_id).await;

    for token in [&requester, &outsider] {
        let response = app
            .request(
                "POST",
                &format!("/api/swap-requests/{swap_id}/accept"),
                None,
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
    }

    // Status unchanged after the failed attempts.
    let detail = app
        .request(
            "GET",
            &format!("/api/swap-requests/{swap_id}"),
            None,
            Some(&requester),
        )
        .await;
    assert_eq!(detail.data()["request"]["status"], "pending");
}

#[tokio::test]
async fn test_accept_requires_pending_status() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("state_req").await;
    let (receiver, receiver_id) = app.register_user("state_rcv").await;

    let swap_id = app.create_swap(&requester, receiver_id).await;

    let first = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/accept"),
            None,
            Some(&receiver),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    // Accepting an already-accepted request fails.
    let second = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/accept"),
            None,
            Some(&receiver),
        )
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);

    let decline = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/decline"),
            None,
            Some(&receiver),
        )
        .await;
    assert_eq!(decline.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_self_request_rejected() {
    let Some(app) = TestApp::spawn().await else { return };

    let (token, user_id) = app.register_user("selfreq").await;

    let response = app
        .request(
            "POST",
            "/api/swap-requests",
            Some(serde_json::json!({
                "receiver_id": user_id,
                "skill_offered": "Guitar",
                "skill_requested": "Spanish",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cancel_is_requester_only_and_deletes() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("cancel_req").await;
    let (receiver, receiver_id) = app.register_user("cancel_rcv").await;

    let swap_id = app.create_swap(&requester, receiver_id).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/swap-requests/{swap_id}"),
            None,
            Some(&receiver),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/api/swap-requests/{swap_id}"),
            None,
            Some(&requester),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Cancelled requests are hard-deleted.
    let response = app
        .request(
            "GET",
            &format!("/api/swap-requests/{swap_id}"),
            None,
            Some(&requester),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_completion_awards_credits_to_both() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("award_req").await;
    let (receiver, receiver_id) = app.register_user("award_rcv").await;

    let before_requester = app.balance_of(&requester).await;
    let before_receiver = app.balance_of(&receiver).await;

    app.complete_swap(&requester, &receiver, receiver_id).await;

    assert_eq!(app.balance_of(&requester).await, before_requester + 10);
    assert_eq!(app.balance_of(&receiver).await, before_receiver + 10);
}

#[tokio::test]
async fn test_schedule_and_cancel_session() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("sched_req").await;
    let (receiver, receiver_id) = app.register_user("sched_rcv").await;

    let swap_id = app.create_swap(&requester, receiver_id).await;
    app.request(
        "POST",
        &format!("/api/swap-requests/{swap_id}/accept"),
        None,
        Some(&receiver),
    )
    .await;

    let scheduled = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/schedule"),
            Some(serde_json::json!({
                "scheduled_at": "2030-06-01T18:00:00Z",
                "meeting_link": "https://meet.example.com/abc",
            })),
            Some(&requester),
        )
        .await;
    assert_eq!(scheduled.status, StatusCode::OK);
    assert_eq!(scheduled.data()["request"]["status"], "scheduled");
    assert!(scheduled.data()["session"]["meeting_link"]
        .as_str()
        .unwrap()
        .contains("meet.example.com"));

    // Cancelling the session reverts the swap to accepted.
    let reverted = app
        .request(
            "DELETE",
            &format!("/api/swap-requests/{swap_id}/schedule"),
            None,
            Some(&receiver),
        )
        .await;
    assert_eq!(reverted.status, StatusCode::OK);
    assert_eq!(reverted.data()["status"], "accepted");
}

#[tokio::test]
async fn test_status_update_appends_message() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("msg_req").await;
    let (receiver, receiver_id) = app.register_user("msg_rcv").await;

    let swap_id = app.create_swap(&requester, receiver_id).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/swap-requests/{swap_id}/status"),
            Some(serde_json::json!({
                "status": "accepted",
                "message": "Looking forward to it!",
            })),
            Some(&receiver),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "accepted");

    let detail = app
        .request(
            "GET",
            &format!("/api/swap-requests/{swap_id}"),
            None,
            Some(&requester),
        )
        .await;
    let messages = detail.data()["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["body"], "Looking forward to it!");
}
