//! Organization, message and chat history types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entity the user can converse with (hospital, bank, hotel, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub verified: bool,
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Agent,
}

/// Delivery status of a user message.
///
/// Variants are ordered: a message only ever moves forward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sending,
    Sent,
    Delivered,
    Read,
}

impl MessageStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sending => "sending",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
            Self::Read => "read",
        }
    }
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
}

impl Message {
    /// A freshly sent user message, status `sending`.
    #[must_use]
    pub fn outgoing(content: impl Into<String>) -> Self {
        Self {
            id: format!("msg-{}", Uuid::new_v4()),
            content: content.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            status: Some(MessageStatus::Sending),
        }
    }

    /// An agent reply. Agent messages carry no status.
    #[must_use]
    pub fn reply(content: impl Into<String>) -> Self {
        Self {
            id: format!("msg-{}-agent", Uuid::new_v4()),
            content: content.into(),
            sender: Sender::Agent,
            timestamp: Utc::now(),
            status: None,
        }
    }

    #[must_use]
    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// A (mock) record of past messages with one organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistory {
    pub id: String,
    pub organization_id: String,
    pub organization_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_logo: Option<String>,
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unread_count: Option<u32>,
    pub messages: Vec<Message>,
}

impl ChatHistory {
    /// Unread count, treating an absent count as zero.
    #[must_use]
    pub fn unread(&self) -> u32 {
        self.unread_count.unwrap_or(0)
    }
}
