//! Per-page chat controller.

use std::sync::{Arc, Mutex as StdMutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, broadcast};
use tokio_util::sync::CancellationToken;

use super::lifecycle::{self, LifecycleTiming};
use crate::directory::{Directory, Message, MessageStatus, Organization};
use crate::error::ChatError;
use crate::events::ChatEvent;

/// Capacity of the per-session change channel.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// State behind one chat page: selection, message list and typing flag.
///
/// Cloning is cheap; clones share the same state. Delivery sequences hold a
/// clone until they finish or are cancelled.
#[derive(Debug, Clone)]
pub struct ChatSession {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    id: String,
    directory: Arc<Directory>,
    timing: LifecycleTiming,
    state: Mutex<ConversationState>,
    events: broadcast::Sender<ChatEvent>,
    /// Parent of every conversation token; cancelled when the session closes.
    closed: CancellationToken,
    created_at: DateTime<Utc>,
    last_activity: StdMutex<DateTime<Utc>>,
}

#[derive(Debug)]
struct ConversationState {
    organization: Option<Organization>,
    chat_id: Option<String>,
    messages: Vec<Message>,
    typing: bool,
    /// Cancels pending delivery sequences when the conversation is replaced.
    cancel: CancellationToken,
}

impl ConversationState {
    fn snapshot(&self) -> ConversationSnapshot {
        ConversationSnapshot {
            organization: self.organization.clone(),
            chat_id: self.chat_id.clone(),
            messages: self.messages.clone(),
            typing: self.typing,
        }
    }
}

/// A consistent copy of a session's conversation, for rendering.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSnapshot {
    pub organization: Option<Organization>,
    pub chat_id: Option<String>,
    pub messages: Vec<Message>,
    pub typing: bool,
}

impl ChatSession {
    pub(super) fn new(id: String, directory: Arc<Directory>, timing: LifecycleTiming) -> Self {
        let now = Utc::now();
        let closed = CancellationToken::new();
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(SessionInner {
                id,
                directory,
                timing,
                state: Mutex::new(ConversationState {
                    organization: None,
                    chat_id: None,
                    messages: Vec::new(),
                    typing: false,
                    cancel: closed.child_token(),
                }),
                events,
                closed,
                created_at: now,
                last_activity: StdMutex::new(now),
            }),
        }
    }

    /// Get the session ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    #[must_use]
    pub fn directory(&self) -> &Directory {
        &self.inner.directory
    }

    #[must_use]
    pub fn timing(&self) -> LifecycleTiming {
        self.inner.timing
    }

    /// Subscribe to state changes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.inner.events.subscribe()
    }

    /// Current selection, messages and typing flag.
    pub async fn snapshot(&self) -> ConversationSnapshot {
        self.inner.state.lock().await.snapshot()
    }

    /// Select an organization and load its first chat history, if any.
    pub async fn select_organization(
        &self,
        organization_id: &str,
    ) -> Result<ConversationSnapshot, ChatError> {
        let directory = &self.inner.directory;
        let organization = directory
            .organization(organization_id)
            .cloned()
            .ok_or_else(|| ChatError::OrganizationNotFound(organization_id.to_string()))?;

        let messages = directory
            .chats_for_organization(organization_id)
            .first()
            .map(|chat| chat.messages.clone())
            .unwrap_or_default();

        tracing::info!(
            name: "session.organization.selected",
            session_id = %self.id(),
            organization_id = %organization_id,
            message_count = messages.len(),
            "Organization selected"
        );

        Ok(self.replace(Some(organization), None, messages).await)
    }

    /// Select a chat history and its organization.
    pub async fn select_chat(&self, chat_id: &str) -> Result<ConversationSnapshot, ChatError> {
        let directory = &self.inner.directory;
        let chat = directory
            .chat_history(chat_id)
            .ok_or_else(|| ChatError::ChatNotFound(chat_id.to_string()))?;
        let organization = directory
            .organization(&chat.organization_id)
            .cloned()
            .ok_or_else(|| ChatError::OrganizationNotFound(chat.organization_id.clone()))?;

        tracing::info!(
            name: "session.chat.selected",
            session_id = %self.id(),
            chat_id = %chat_id,
            organization_id = %organization.id,
            "Chat selected"
        );

        Ok(self
            .replace(Some(organization), Some(chat.id.clone()), chat.messages.clone())
            .await)
    }

    /// Clear selection and messages.
    pub async fn start_new_chat(&self) -> ConversationSnapshot {
        tracing::info!(name: "session.reset", session_id = %self.id(), "New chat started");
        self.replace(None, None, Vec::new()).await
    }

    /// Send a user message.
    ///
    /// Returns the new message id, or `None` when the trimmed content is empty
    /// or no organization is selected.
    pub async fn send_message(&self, content: &str) -> Option<String> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        let mut state = self.inner.state.lock().await;
        let organization_name = state.organization.as_ref()?.name.clone();

        let message = Message::outgoing(content);
        let message_id = message.id.clone();
        state.messages.push(message.clone());
        state.typing = true;
        let token = state.cancel.clone();
        drop(state);

        self.touch();
        self.emit(ChatEvent::MessageAppended { message });
        self.emit(ChatEvent::Typing { active: true });

        tracing::info!(
            name: "message.sent",
            session_id = %self.id(),
            message_id = %message_id,
            content_length = content.len(),
            "User message sent"
        );

        tokio::spawn(lifecycle::run(
            self.clone(),
            message_id.clone(),
            organization_name,
            token,
        ));

        Some(message_id)
    }

    /// Replace the conversation wholesale, cancelling pending sequences.
    async fn replace(
        &self,
        organization: Option<Organization>,
        chat_id: Option<String>,
        messages: Vec<Message>,
    ) -> ConversationSnapshot {
        let mut state = self.inner.state.lock().await;
        state.cancel.cancel();
        *state = ConversationState {
            organization,
            chat_id,
            messages,
            typing: false,
            cancel: self.inner.closed.child_token(),
        };
        let snapshot = state.snapshot();
        drop(state);

        self.touch();
        self.emit(ChatEvent::ConversationReplaced {
            organization_id: snapshot.organization.as_ref().map(|org| org.id.clone()),
            message_count: snapshot.messages.len(),
        });
        snapshot
    }

    /// Move a message forward to `status`.
    ///
    /// No-op when the conversation was replaced, the message is gone, or the
    /// message is already at or past `status`.
    pub(super) async fn set_status(
        &self,
        token: &CancellationToken,
        message_id: &str,
        status: MessageStatus,
    ) -> bool {
        let mut state = self.inner.state.lock().await;
        if token.is_cancelled() {
            return false;
        }
        let Some(message) = state.messages.iter_mut().find(|m| m.id == message_id) else {
            return false;
        };
        if message.status.is_some_and(|current| current >= status) {
            return false;
        }
        message.status = Some(status);
        drop(state);

        tracing::debug!(
            session_id = %self.id(),
            message_id = %message_id,
            status = status.as_str(),
            "Message status changed"
        );
        self.emit(ChatEvent::StatusChanged {
            message_id: message_id.to_string(),
            status,
        });
        true
    }

    /// Hide the typing indicator and append the agent reply.
    pub(super) async fn deliver_reply(&self, token: &CancellationToken, content: String) -> bool {
        let mut state = self.inner.state.lock().await;
        if token.is_cancelled() {
            return false;
        }
        let reply = Message::reply(content);
        state.typing = false;
        state.messages.push(reply.clone());
        drop(state);

        tracing::debug!(session_id = %self.id(), message_id = %reply.id, "Agent reply appended");
        self.emit(ChatEvent::Typing { active: false });
        self.emit(ChatEvent::MessageAppended { message: reply });
        true
    }

    /// Cancel any pending delivery sequence. The session stays readable.
    pub fn close(&self) {
        self.inner.closed.cancel();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.closed.is_cancelled()
    }

    /// Resolves once the session is closed.
    pub async fn closed(&self) {
        self.inner.closed.cancelled().await;
    }

    fn emit(&self, event: ChatEvent) {
        // No subscribers is fine; the page may not have connected yet.
        let _ = self.inner.events.send(event);
    }

    /// Record activity now; reads through the store count as activity.
    pub(super) fn touch(&self) {
        let mut guard = self
            .inner
            .last_activity
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Utc::now();
    }

    /// Check if the session has been idle longer than `timeout`.
    ///
    /// A session with an attached event stream is never idle.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        if self.inner.events.receiver_count() > 0 {
            return false;
        }
        let last = *self
            .inner
            .last_activity
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // Negative duration means clock skew; treat as active.
        (Utc::now() - last)
            .to_std()
            .is_ok_and(|idle| idle > timeout)
    }

    /// Get the session age.
    #[must_use]
    pub fn age(&self) -> Duration {
        (Utc::now() - self.inner.created_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}
