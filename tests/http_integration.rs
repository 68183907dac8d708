use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use futures::StreamExt;
use serde_json::Value;
use tower::ServiceExt;

use orgchat::AppState;
use orgchat::config::AppConfig;
use orgchat::server::router;
use orgchat::session::canned_reply;

fn state() -> AppState {
    AppState::new(Arc::new(AppConfig::default()))
}

fn server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

async fn new_session(server: &TestServer) -> String {
    let response = server.post("/api/sessions").await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["messageCount"], 0);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_index_renders_page() {
    let state = state();
    let server = server(state.clone());

    let response = server.get("/").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("OrgChat"));
    assert!(html.contains("Welcome to OrgChat"));
    assert!(html.contains("sse-connect=\"/api/sessions/"));
    assert_eq!(state.sessions.len(), 1);
}

#[tokio::test]
async fn test_organizations_json_and_filter() {
    let server = server(state());

    let all: Vec<Value> = server.get("/api/organizations").await.json();
    assert_eq!(all.len(), 8);

    let banks: Vec<Value> = server
        .get("/api/organizations")
        .add_query_param("q", "BANK")
        .await
        .json();
    assert_eq!(banks.len(), 1);
    assert_eq!(banks[0]["name"], "Metropolitan Bank");
    assert_eq!(banks[0]["verified"], true);

    let org: Value = server.get("/api/organizations/3").await.json();
    assert_eq!(org["category"], "hotel");
}

#[tokio::test]
async fn test_chats_json() {
    let server = server(state());

    let chats: Vec<Value> = server.get("/api/organizations/1/chats").await.json();
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0]["id"], "chat-1");
    assert_eq!(chats[0]["organizationName"], "City Medical Center");

    let none: Vec<Value> = server.get("/api/organizations/8/chats").await.json();
    assert!(none.is_empty());

    let chat: Value = server.get("/api/chats/chat-2").await.json();
    assert_eq!(chat["unreadCount"], 1);
    assert_eq!(chat["messages"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_unknown_ids_are_404() {
    let server = server(state());

    server
        .get("/api/organizations/99")
        .await
        .assert_status_not_found();
    server
        .get("/api/organizations/99/chats")
        .await
        .assert_status_not_found();
    server.get("/api/chats/nope").await.assert_status_not_found();
    server.get("/api/sessions/nope").await.assert_status_not_found();

    let id = new_session(&server).await;
    server
        .post(&format!("/api/sessions/{id}/organizations/99"))
        .await
        .assert_status_not_found();
}

#[tokio::test(start_paused = true)]
async fn test_send_message_lifecycle() {
    let server = server(state());
    let id = new_session(&server).await;

    let response = server
        .post(&format!("/api/sessions/{id}/organizations/1"))
        .form(&[("tab", "organizations"), ("q", "")])
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("id=\"chat-window\""));
    assert!(html.contains("City Medical Center"));
    assert!(html.contains("hx-swap-oob=\"true\""));

    let response = server
        .post(&format!("/api/sessions/{id}/messages"))
        .form(&[("content", "  Do you take walk-ins?  ")])
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.starts_with("<div id=\"message-list\""));
    assert!(html.contains("data-status=\"sending\""));
    assert!(html.contains("Do you take walk-ins?"));
    assert!(html.contains("typing-indicator"));

    tokio::time::sleep(Duration::from_secs(5)).await;

    let messages: Vec<Value> = server
        .get(&format!("/api/sessions/{id}/messages"))
        .await
        .json();
    assert_eq!(messages.len(), 8);
    assert_eq!(messages[6]["content"], "Do you take walk-ins?");
    assert_eq!(messages[6]["status"], "read");
    assert_eq!(messages[7]["sender"], "agent");
    assert_eq!(messages[7]["content"], canned_reply("City Medical Center"));

    let session: Value = server.get(&format!("/api/sessions/{id}")).await.json();
    assert_eq!(session["typing"], false);
    assert_eq!(session["organization"]["id"], "1");
}

#[tokio::test]
async fn test_blank_send_is_noop() {
    let server = server(state());
    let id = new_session(&server).await;

    server
        .post(&format!("/api/sessions/{id}/organizations/5"))
        .await
        .assert_status_ok();

    let response = server
        .post(&format!("/api/sessions/{id}/messages"))
        .form(&[("content", "   ")])
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("Start a conversation with"));

    let messages: Vec<Value> = server
        .get(&format!("/api/sessions/{id}/messages"))
        .await
        .json();
    assert!(messages.is_empty());
}

#[tokio::test]
async fn test_send_without_organization() {
    let server = server(state());
    let id = new_session(&server).await;

    server
        .post(&format!("/api/sessions/{id}/messages"))
        .form(&[("content", "hello")])
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_select_chat_and_new_chat() {
    let server = server(state());
    let id = new_session(&server).await;

    let html = server
        .post(&format!("/api/sessions/{id}/chats/chat-3"))
        .form(&[("tab", "chats"), ("q", "")])
        .await
        .text();
    assert!(html.contains("Grand Plaza Hotel"));
    assert!(html.contains("data-chat-id=\"chat-3\""));

    let html = server
        .post(&format!("/api/sessions/{id}/new-chat"))
        .form(&[("tab", "chats"), ("q", "")])
        .await
        .text();
    assert!(html.contains("Welcome to OrgChat"));

    let session: Value = server.get(&format!("/api/sessions/{id}")).await.json();
    assert!(session["organization"].is_null());
    assert!(session["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_sidebar_fragments() {
    let server = server(state());
    let id = new_session(&server).await;

    let html = server
        .get(&format!("/api/sessions/{id}/sidebar"))
        .add_query_param("tab", "chats")
        .await
        .text();
    assert!(html.starts_with("<aside id=\"sidebar\""));
    assert!(html.contains("Start New Conversation"));

    let html = server
        .get(&format!("/api/sessions/{id}/sidebar/results"))
        .add_query_param("tab", "organizations")
        .add_query_param("q", "consulting")
        .await
        .text();
    assert!(html.contains("GreenLeaf Consulting"));
    assert!(html.contains("<span id=\"sidebar-count\">1</span>"));
}

#[tokio::test]
async fn test_delete_session() {
    let server = server(state());
    let id = new_session(&server).await;

    server
        .delete(&format!("/api/sessions/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete(&format!("/api/sessions/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_chat_list_via_oneshot() {
    let app = router(state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/chats?q=savings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_event_stream_frames() {
    let state = state();
    let session = state.sessions.create();
    let app = router(state.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/sessions/{}/events", session.id()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/event-stream"
    );

    session.select_organization("2").await.unwrap();

    let mut body = response.into_body().into_data_stream();
    let chunk = body.next().await.unwrap().unwrap();
    let frame = String::from_utf8(chunk.to_vec()).unwrap();
    assert!(frame.starts_with("event: conversation.replaced\n"));
    assert!(frame.contains("\"organizationId\":\"2\""));
    assert!(frame.contains("event: messages\n"));
    assert!(frame.contains("id=\"message-list\""));

    // Closing the session ends the stream.
    state.sessions.remove(session.id());
    assert!(body.next().await.is_none());
}

#[tokio::test]
async fn test_lagged_stream_resyncs_with_fragment() {
    let state = state();
    let session = state.sessions.create();

    let response = router(state.clone())
        .oneshot(
            Request::builder()
                .uri(format!("/api/sessions/{}/events", session.id()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Overrun the change channel before the body is polled.
    for _ in 0..40 {
        session.select_organization("2").await.unwrap();
        session.select_organization("4").await.unwrap();
    }

    let mut body = response.into_body().into_data_stream();
    let chunk = body.next().await.unwrap().unwrap();
    let frame = String::from_utf8(chunk.to_vec()).unwrap();
    assert!(frame.starts_with("event: messages\n"));
    assert!(!frame.contains("conversation.replaced"));
    assert!(frame.contains("id=\"message-list\""));
    assert!(frame.contains("SafeGuard Insurance"));
}

#[tokio::test]
async fn test_sweep_spares_active_sessions() {
    let state = state();
    let server = server(state.clone());
    let streaming = new_session(&server).await;
    let polled = new_session(&server).await;
    let idle = new_session(&server).await;

    let events = router(state.clone())
        .oneshot(
            Request::builder()
                .uri(format!("/api/sessions/{streaming}/events"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(events.status(), StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(60)).await;
    server
        .get(&format!("/api/sessions/{polled}/sidebar/results"))
        .await
        .assert_status_ok();

    assert_eq!(
        state
            .sessions
            .cleanup_expired_with_timeout(Duration::from_millis(40)),
        1
    );

    server
        .post(&format!("/api/sessions/{streaming}/organizations/2"))
        .await
        .assert_status_ok();
    server
        .post(&format!("/api/sessions/{polled}/organizations/2"))
        .await
        .assert_status_ok();
    server
        .get(&format!("/api/sessions/{idle}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    drop(events);
}
