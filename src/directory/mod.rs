//! In-memory organization directory and chat history store.
//!
//! This module stands in for a real backend: a fixed set of organizations and
//! seeded chat histories, with lookup helpers. It is a leaf dependency; the
//! page controller, the filters and the renderers all read from it.
//!
//! # Example
//!
//! ```rust
//! use orgchat::directory::Directory;
//!
//! let directory = Directory::seeded();
//! let bank = directory.organization("2").unwrap();
//! assert_eq!(bank.name, "Metropolitan Bank");
//!
//! let chats = directory.chats_for_organization("2");
//! assert_eq!(chats.len(), 1);
//! ```

mod model;
mod seed;

use chrono::{DateTime, Utc};

pub use model::{ChatHistory, Message, MessageStatus, Organization, Sender};

/// Read-only store of organizations and chat histories.
///
/// Seed data is never mutated after construction; runtime sends live in the
/// page controller's own message list.
#[derive(Debug, Clone)]
pub struct Directory {
    organizations: Vec<Organization>,
    chat_histories: Vec<ChatHistory>,
}

impl Default for Directory {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Directory {
    /// Build the built-in directory, with history timestamps relative to now.
    #[must_use]
    pub fn seeded() -> Self {
        Self::seeded_at(Utc::now())
    }

    /// Build the built-in directory, with history timestamps relative to `now`.
    #[must_use]
    pub fn seeded_at(now: DateTime<Utc>) -> Self {
        let organizations = seed::organizations();
        let chat_histories = seed::chat_histories(&organizations, now);
        Self {
            organizations,
            chat_histories,
        }
    }

    /// Build a directory from explicit data.
    #[must_use]
    pub fn new(organizations: Vec<Organization>, chat_histories: Vec<ChatHistory>) -> Self {
        Self {
            organizations,
            chat_histories,
        }
    }

    #[must_use]
    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    #[must_use]
    pub fn chat_histories(&self) -> &[ChatHistory] {
        &self.chat_histories
    }

    /// Look up an organization by id.
    #[must_use]
    pub fn organization(&self, id: &str) -> Option<&Organization> {
        self.organizations.iter().find(|org| org.id == id)
    }

    /// Look up a chat history by id.
    #[must_use]
    pub fn chat_history(&self, id: &str) -> Option<&ChatHistory> {
        self.chat_histories.iter().find(|chat| chat.id == id)
    }

    /// All chat histories with the given organization, in seed order.
    #[must_use]
    pub fn chats_for_organization(&self, organization_id: &str) -> Vec<&ChatHistory> {
        self.chat_histories
            .iter()
            .filter(|chat| chat.organization_id == organization_id)
            .collect()
    }

    /// Sum of unread counts across all chat histories.
    #[must_use]
    pub fn total_unread(&self) -> u32 {
        self.chat_histories.iter().map(ChatHistory::unread).sum()
    }
}
