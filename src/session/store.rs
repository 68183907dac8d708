//! Session storage.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use uuid::Uuid;

use super::controller::ChatSession;
use super::lifecycle::LifecycleTiming;
use crate::directory::Directory;

/// Thread-safe store for chat sessions.
///
/// Every session shares the same read-only [`Directory`] and delivery timing.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

#[derive(Debug)]
struct SessionStoreInner {
    directory: Arc<Directory>,
    timing: LifecycleTiming,
    sessions: RwLock<HashMap<String, ChatSession>>,
}

impl SessionStore {
    /// Create a new session store.
    #[must_use]
    pub fn new(directory: Arc<Directory>, timing: LifecycleTiming) -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                directory,
                timing,
                sessions: RwLock::new(HashMap::new()),
            }),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Arc<Directory> {
        &self.inner.directory
    }

    /// Create a new session and return it.
    #[must_use]
    pub fn create(&self) -> ChatSession {
        let id = Uuid::new_v4().to_string();
        let session = ChatSession::new(
            id.clone(),
            Arc::clone(&self.inner.directory),
            self.inner.timing,
        );
        self.write().insert(id, session.clone());

        tracing::info!(name: "session.created", session_id = %session.id(), "Session created");
        session
    }

    /// Get a session by ID and mark it active.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<ChatSession> {
        let session = self.read().get(id).cloned();
        if let Some(session) = &session {
            session.touch();
        }
        session
    }

    /// All sessions, without marking any of them active.
    #[must_use]
    pub fn list(&self) -> Vec<ChatSession> {
        self.read().values().cloned().collect()
    }

    /// Remove a session by ID, cancelling its pending sequences.
    pub fn remove(&self, id: &str) -> Option<ChatSession> {
        let removed = self.write().remove(id);
        if let Some(session) = &removed {
            session.close();
            tracing::info!(name: "session.removed", session_id = %id, "Session removed");
        }
        removed
    }

    /// Get the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if there are no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove sessions that have been inactive longer than the timeout.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.write();
        let before = guard.len();
        guard.retain(|_, session| {
            let expired = session.is_expired_with_timeout(timeout);
            if expired {
                session.close();
            }
            !expired
        });
        before - guard.len()
    }

    /// Periodically sweep idle sessions until the returned task is aborted.
    pub fn spawn_sweeper(
        &self,
        interval: Duration,
        idle_timeout: Duration,
    ) -> tokio::task::JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = store.cleanup_expired_with_timeout(idle_timeout);
                if removed > 0 {
                    tracing::info!(
                        name: "session.sweep",
                        removed,
                        remaining = store.len(),
                        "Idle sessions removed"
                    );
                }
            }
        })
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, ChatSession>> {
        self.inner
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, ChatSession>> {
        self.inner
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
