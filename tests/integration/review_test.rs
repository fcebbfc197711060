//! Integration tests for reviews and reputation recomputation.

use http::StatusCode;

use crate::helpers::TestApp;

fn review_body(overall: i64) -> serde_json::Value {
    serde_json::json!({
        "overall": overall,
        "teaching_quality": overall,
        "reliability": overall,
        "communication": overall,
        "comment": "Great session",
    })
}

#[tokio::test]
async fn test_review_requires_completed_swap() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("rv_pend_req").await;
    let (_, receiver_id) = app.register_user("rv_pend_rcv").await;

    let swap_id = app.create_swap(&requester, receiver_id).await;

    let response = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/reviews"),
            Some(review_body(5)),
            Some(&requester),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_review_rejected() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("rv_dup_req").await;
    let (receiver, receiver_id) = app.register_user("rv_dup_rcv").await;

    let swap_id = app.complete_swap(&requester, &receiver, receiver_id).await;

    let first = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/reviews"),
            Some(review_body(4)),
            Some(&requester),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/reviews"),
            Some(review_body(3)),
            Some(&requester),
        )
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);

    // The other participant can still leave their own review.
    let counterpart = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/reviews"),
            Some(review_body(5)),
            Some(&receiver),
        )
        .await;
    assert_eq!(counterpart.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_outsider_cannot_review() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("rv_out_req").await;
    let (receiver, receiver_id) = app.register_user("rv_out_rcv").await;
    let (outsider, _) = app.register_user("rv_out_x").await;

    let swap_id = app.complete_swap(&requester, &receiver, receiver_id).await;

    let response = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/reviews"),
            Some(review_body(1)),
            Some(&outsider),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_reputation_recomputed_from_reviews() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, requester_id) = app.register_user("rv_rep_req").await;
    let (receiver, receiver_id) = app.register_user("rv_rep_rcv").await;

    let swap_id = app.complete_swap(&requester, &receiver, receiver_id).await;

    let created = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/reviews"),
            Some(review_body(4)),
            Some(&requester),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    // avg 4.0, one completed swap: trust = 4*20 + min(1*2, 20) = 82.
    let profile = app
        .request(
            "GET",
            &format!("/api/users/{receiver_id}"),
            None,
            Some(&requester),
        )
        .await;
    assert_eq!(profile.status, StatusCode::OK);
    let reputation = &profile.data()["reputation"];
    assert_eq!(reputation["review_count"], 1);
    assert_eq!(reputation["completed_swaps"], 1);
    assert_eq!(reputation["avg_overall"], 4.0);
    assert_eq!(reputation["trust_score"], 82.0);

    // Deleting the review recomputes back down to the volume bonus.
    let review_id = created.data()["id"].as_str().unwrap().to_string();
    let deleted = app
        .request(
            "DELETE",
            &format!("/api/reviews/{review_id}"),
            None,
            Some(&requester),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let profile = app
        .request(
            "GET",
            &format!("/api/users/{receiver_id}"),
            None,
            Some(&requester),
        )
        .await;
    let reputation = &profile.data()["reputation"];
    assert_eq!(reputation["review_count"], 0);
    assert_eq!(reputation["avg_overall"], 0.0);
    assert_eq!(reputation["trust_score"], 2.0);

    // The requester's own reputation tracked the completion too.
    let profile = app
        .request(
            "GET",
            &format!("/api/users/{requester_id}"),
            None,
            Some(&receiver),
        )
        .await;
    assert_eq!(profile.data()["reputation"]["completed_swaps"], 1);
}

#[tokio::test]
async fn test_only_author_edits_review() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("rv_edit_req").await;
    let (receiver, receiver_id) = app.register_user("rv_edit_rcv").await;

    let swap_id = app.complete_swap(&requester, &receiver, receiver_id).await;

    let created = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/reviews"),
            Some(review_body(2)),
            Some(&requester),
        )
        .await;
    let review_id = created.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/reviews/{review_id}"),
            Some(serde_json::json!({ "overall": 5 })),
            Some(&receiver),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PUT",
            &format!("/api/reviews/{review_id}"),
            Some(serde_json::json!({ "overall": 5 })),
            Some(&requester),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["overall"], 5);
}
