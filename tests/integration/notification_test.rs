//! Integration tests for notification fan-out and read state.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_swap_create_notifies_receiver() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("nt_req").await;
    let (receiver, receiver_id) = app.register_user("nt_rcv").await;

    app.create_swap(&requester, receiver_id).await;

    let count = app
        .request("GET", "/api/notifications/unread-count", None, Some(&receiver))
        .await;
    assert_eq!(count.status, StatusCode::OK);
    assert_eq!(count.data()["count"], 1);

    let list = app
        .request("GET", "/api/notifications", None, Some(&receiver))
        .await;
    let items = list.data()["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "swap_request");
    assert!(items[0]["body"].as_str().unwrap().contains("Guitar"));
}

#[tokio::test]
async fn test_mark_read_and_dismiss() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("nt_rd_req").await;
    let (receiver, receiver_id) = app.register_user("nt_rd_rcv").await;

    app.create_swap(&requester, receiver_id).await;

    let list = app
        .request("GET", "/api/notifications", None, Some(&receiver))
        .await;
    let id = list.data()["items"][0]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{id}/read"),
            None,
            Some(&receiver),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let count = app
        .request("GET", "/api/notifications/unread-count", None, Some(&receiver))
        .await;
    assert_eq!(count.data()["count"], 0);

    let response = app
        .request(
            "DELETE",
            &format!("/api/notifications/{id}"),
            None,
            Some(&receiver),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let list = app
        .request("GET", "/api/notifications", None, Some(&receiver))
        .await;
    assert!(list.data()["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_decline_notifies_requester() {
    let Some(app) = TestApp::spawn().await else { return };

    let (requester, _) = app.register_user("nt_dec_req").await;
    let (receiver, receiver_id) = app.register_user("nt_dec_rcv").await;

    let swap_id = app.create_swap(&requester, receiver_id).await;
    let response = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/decline"),
            None,
            Some(&receiver),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let list = app
        .request("GET", "/api/notifications", None, Some(&requester))
        .await;
    let items = list.data()["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "swap_declined");
}
