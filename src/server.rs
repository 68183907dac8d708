use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Json, Router,
    body::Body,
    extract::{Path, Query, Request, State, rejection::FormRejection},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::{BroadcastStream, errors::BroadcastStreamRecvError};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::directory::{ChatHistory, Message, Organization};
use crate::error::ChatError;
use crate::events::{MESSAGES_FRAGMENT_EVENT, dual_sse_event, sse_fragment};
use crate::filter::{filter_chats, filter_organizations};
use crate::session::{ChatSession, ConversationSnapshot};
use crate::ui::app::{render_chat_area, render_page};
use crate::ui::chat::render_message_list;
use crate::ui::sidebar::{SidebarTab, SidebarView, render_results, render_sidebar};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let timeout_duration = Duration::from_secs(state.config.server.request_timeout_secs);
    let static_dir = ServeDir::new(&state.config.ui.static_dir);

    Router::new()
        // HTML pages
        .route("/", get(index_handler))
        // Session API and fragments
        .route("/api/sessions", get(api_list_sessions).post(api_create_session))
        .route(
            "/api/sessions/{id}",
            get(api_get_session).delete(api_delete_session),
        )
        .route("/api/sessions/{id}/sidebar", get(sidebar_fragment))
        .route("/api/sessions/{id}/sidebar/results", get(sidebar_results_fragment))
        .route(
            "/api/sessions/{id}/organizations/{org_id}",
            post(select_organization),
        )
        .route("/api/sessions/{id}/chats/{chat_id}", post(select_chat))
        .route("/api/sessions/{id}/new-chat", post(new_chat))
        .route(
            "/api/sessions/{id}/messages",
            get(api_get_messages).post(send_message),
        )
        .route("/api/sessions/{id}/events", get(session_events))
        // Directory API
        .route("/api/organizations", get(api_list_organizations))
        .route("/api/organizations/{id}", get(api_get_organization))
        .route("/api/organizations/{id}/chats", get(api_organization_chats))
        .route("/api/chats", get(api_list_chats))
        .route("/api/chats/{id}", get(api_get_chat))
        // Static assets
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                match tokio::time::timeout(timeout_duration, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            },
        ))
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::new(Arc::clone(&config));

    let sweeper = state
        .sessions
        .spawn_sweeper(config.sessions.sweep_interval(), config.sessions.idle_timeout());

    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        static_dir = %config.ui.static_dir,
        "Server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

fn lookup_session(state: &AppState, id: &str) -> Result<ChatSession, ChatError> {
    state
        .sessions
        .get(id)
        .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - New page session with the full UI.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let session = state.sessions.create();
    let snapshot = session.snapshot().await;
    Html(render_page(session.id(), session.directory(), &snapshot))
}

/// Sidebar tab and search text, sent by the sidebar's `hx-include`.
#[derive(Debug, Default, Deserialize)]
struct SidebarQuery {
    #[serde(default)]
    tab: SidebarTab,
    #[serde(default)]
    q: String,
}

fn sidebar_view<'a>(
    session: &'a ChatSession,
    query: &'a SidebarQuery,
    snapshot: &'a ConversationSnapshot,
) -> SidebarView<'a> {
    SidebarView {
        session_id: session.id(),
        directory: session.directory(),
        tab: query.tab,
        query: query.q.trim(),
        selected_organization: snapshot.organization.as_ref().map(|org| org.id.as_str()),
        selected_chat: snapshot.chat_id.as_deref(),
        now: chrono::Utc::now(),
    }
}

/// GET /api/sessions/:id/sidebar - Whole sidebar, used when switching tabs.
async fn sidebar_fragment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<SidebarQuery>,
) -> Result<Html<String>, ChatError> {
    let session = lookup_session(&state, &id)?;
    let snapshot = session.snapshot().await;
    Ok(Html(render_sidebar(&sidebar_view(&session, &query, &snapshot))))
}

/// GET /api/sessions/:id/sidebar/results - Result list for the search box.
async fn sidebar_results_fragment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<SidebarQuery>,
) -> Result<Html<String>, ChatError> {
    let session = lookup_session(&state, &id)?;
    let snapshot = session.snapshot().await;
    Ok(Html(render_results(
        &sidebar_view(&session, &query, &snapshot),
        false,
    )))
}

/// Chat area plus an out-of-band refresh of the sidebar results so the
/// selection highlight follows.
fn chat_area_response(
    session: &ChatSession,
    query: &SidebarQuery,
    snapshot: &ConversationSnapshot,
) -> Html<String> {
    let mut html = render_chat_area(session.id(), snapshot);
    html.push_str(&render_results(&sidebar_view(session, query, snapshot), true));
    Html(html)
}

fn sidebar_form(form: Result<Form<SidebarQuery>, FormRejection>) -> SidebarQuery {
    form.map(|Form(query)| query).unwrap_or_default()
}

/// POST /api/sessions/:id/organizations/:org_id - Select an organization.
async fn select_organization(
    State(state): State<AppState>,
    Path((id, org_id)): Path<(String, String)>,
    form: Result<Form<SidebarQuery>, FormRejection>,
) -> Result<Html<String>, ChatError> {
    let session = lookup_session(&state, &id)?;
    let snapshot = session.select_organization(&org_id).await?;
    Ok(chat_area_response(&session, &sidebar_form(form), &snapshot))
}

/// POST /api/sessions/:id/chats/:chat_id - Open a chat history.
async fn select_chat(
    State(state): State<AppState>,
    Path((id, chat_id)): Path<(String, String)>,
    form: Result<Form<SidebarQuery>, FormRejection>,
) -> Result<Html<String>, ChatError> {
    let session = lookup_session(&state, &id)?;
    let snapshot = session.select_chat(&chat_id).await?;
    Ok(chat_area_response(&session, &sidebar_form(form), &snapshot))
}

/// POST /api/sessions/:id/new-chat - Clear the selection.
async fn new_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<SidebarQuery>, FormRejection>,
) -> Result<Html<String>, ChatError> {
    let session = lookup_session(&state, &id)?;
    let snapshot = session.start_new_chat().await;
    Ok(chat_area_response(&session, &sidebar_form(form), &snapshot))
}

#[derive(Debug, Deserialize)]
struct SendForm {
    #[serde(default)]
    content: String,
}

/// POST /api/sessions/:id/messages - Send a message.
///
/// Answers with the refreshed message list, or `204` when no organization
/// is selected.
async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<SendForm>,
) -> Result<Response, ChatError> {
    let session = lookup_session(&state, &id)?;
    session.send_message(&form.content).await;

    let snapshot = session.snapshot().await;
    Ok(match &snapshot.organization {
        Some(org) => Html(render_message_list(org, &snapshot.messages, snapshot.typing))
            .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Session info for listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionInfo {
    id: String,
    message_count: usize,
}

/// Session with its current conversation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionDetail {
    id: String,
    #[serde(flatten)]
    snapshot: ConversationSnapshot,
}

/// GET /api/sessions - List all sessions.
async fn api_list_sessions(State(state): State<AppState>) -> Json<Vec<SessionInfo>> {
    let mut sessions = Vec::new();
    for session in state.sessions.list() {
        sessions.push(SessionInfo {
            id: session.id().to_string(),
            message_count: session.snapshot().await.messages.len(),
        });
    }
    Json(sessions)
}

/// POST /api/sessions - Create a new session.
async fn api_create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionInfo>) {
    let session = state.sessions.create();
    (
        StatusCode::CREATED,
        Json(SessionInfo {
            id: session.id().to_string(),
            message_count: 0,
        }),
    )
}

/// GET /api/sessions/:id - Get session details.
async fn api_get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionDetail>, ChatError> {
    let session = lookup_session(&state, &id)?;
    Ok(Json(SessionDetail {
        snapshot: session.snapshot().await,
        id,
    }))
}

/// DELETE /api/sessions/:id - Delete a session.
async fn api_delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ChatError> {
    state
        .sessions
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(ChatError::SessionNotFound(id))
}

/// GET /api/sessions/:id/messages - Current message list.
async fn api_get_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Message>>, ChatError> {
    let session = lookup_session(&state, &id)?;
    Ok(Json(session.snapshot().await.messages))
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// GET /api/organizations - Organizations matching `q`.
async fn api_list_organizations(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Organization>> {
    Json(
        filter_organizations(state.directory.organizations(), &query.q)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// GET /api/organizations/:id
async fn api_get_organization(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Organization>, ChatError> {
    state
        .directory
        .organization(&id)
        .cloned()
        .map(Json)
        .ok_or(ChatError::OrganizationNotFound(id))
}

/// GET /api/organizations/:id/chats
async fn api_organization_chats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ChatHistory>>, ChatError> {
    if state.directory.organization(&id).is_none() {
        return Err(ChatError::OrganizationNotFound(id));
    }
    Ok(Json(
        state
            .directory
            .chats_for_organization(&id)
            .into_iter()
            .cloned()
            .collect(),
    ))
}

/// GET /api/chats - Chat histories matching `q`.
async fn api_list_chats(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<ChatHistory>> {
    Json(
        filter_chats(state.directory.chat_histories(), &query.q)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// GET /api/chats/:id
async fn api_get_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ChatHistory>, ChatError> {
    state
        .directory
        .chat_history(&id)
        .cloned()
        .map(Json)
        .ok_or(ChatError::ChatNotFound(id))
}

// ─────────────────────────────────────────────────────────────────────────────
// SSE
// ─────────────────────────────────────────────────────────────────────────────

fn messages_html(snapshot: &ConversationSnapshot) -> String {
    snapshot
        .organization
        .as_ref()
        .map(|org| render_message_list(org, &snapshot.messages, snapshot.typing))
        .unwrap_or_default()
}

/// GET /api/sessions/:id/events - Live conversation updates.
///
/// Ends when the session is closed.
async fn session_events(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ChatError> {
    let session = lookup_session(&state, &id)?;
    let receiver = session.subscribe();
    let closing = session.clone();

    let stream = BroadcastStream::new(receiver)
        .filter_map(move |item| {
            let session = session.clone();
            async move {
                let snapshot = session.snapshot().await;
                let html = messages_html(&snapshot);
                let frame = match item {
                    Ok(evt) => dual_sse_event(&evt, &html),
                    Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            session_id = %session.id(),
                            skipped,
                            "SSE subscriber lagged"
                        );
                        sse_fragment(MESSAGES_FRAGMENT_EVENT, &html)
                    }
                };
                Some(Ok::<String, Infallible>(frame))
            }
        })
        .take_until(async move { closing.closed().await });

    tracing::debug!(session_id = %id, "SSE subscriber connected");
    Ok(build_sse_response(Body::from_stream(stream)))
}

fn build_sse_response(body: Body) -> Response {
    let mut resp = Response::new(body);
    let h = resp.headers_mut();
    h.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/event-stream"));
    h.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    h.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    h.insert("X-Accel-Buffering", HeaderValue::from_static("no"));
    resp
}
