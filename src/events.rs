//! Conversation change events and their SSE encoding.
//!
//! A page controller broadcasts a [`ChatEvent`] for every state change. The
//! SSE endpoint forwards each event twice: once as a typed JSON event for
//! script listeners, and once as an HTML fragment that HTMX's SSE extension
//! swaps into the message list.
//!
//! # Example
//!
//! ```rust
//! use orgchat::events::{ChatEvent, sse_event};
//!
//! let event = ChatEvent::Typing { active: true };
//! let sse = sse_event(&event);
//! assert!(sse.starts_with("event: typing\n"));
//! ```

use serde::{Deserialize, Serialize};

use crate::directory::{Message, MessageStatus};

/// SSE event name carrying the re-rendered message list.
pub const MESSAGES_FRAGMENT_EVENT: &str = "messages";

/// State changes emitted by a page controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum ChatEvent {
    /// Selection changed and the message list was replaced wholesale.
    #[serde(rename = "conversation.replaced", rename_all = "camelCase")]
    ConversationReplaced {
        /// Newly selected organization, if any.
        organization_id: Option<String>,
        /// Number of messages in the new list.
        message_count: usize,
    },

    /// A message was appended to the current list.
    #[serde(rename = "message.appended")]
    MessageAppended {
        message: Message,
    },

    /// A user message moved to a new status.
    #[serde(rename = "message.status", rename_all = "camelCase")]
    StatusChanged {
        message_id: String,
        status: MessageStatus,
    },

    /// The agent typing indicator was shown or hidden.
    #[serde(rename = "typing")]
    Typing {
        active: bool,
    },
}

/// Get the SSE event name for a [`ChatEvent`].
pub fn event_name(evt: &ChatEvent) -> &'static str {
    match evt {
        ChatEvent::ConversationReplaced { .. } => "conversation.replaced",
        ChatEvent::MessageAppended { .. } => "message.appended",
        ChatEvent::StatusChanged { .. } => "message.status",
        ChatEvent::Typing { .. } => "typing",
    }
}

/// Convert a [`ChatEvent`] to an SSE-formatted string.
///
/// The output has an `event:` line (for `EventSource` listeners) and a `data:`
/// line containing the JSON payload.
pub fn sse_event(evt: &ChatEvent) -> String {
    let json = serde_json::to_string(evt).unwrap_or_else(|e| {
        serde_json::json!({ "type": "error", "data": { "message": e.to_string() } }).to_string()
    });

    let event_name = event_name(evt);

    format!("event: {event_name}\ndata: {json}\n\n")
}

/// Encode an HTML fragment as a named SSE event.
///
/// Each line of the fragment becomes its own `data:` line; the client joins
/// them back with newlines. A lone `\r` also ends an SSE line, so it splits
/// too.
pub fn sse_fragment(event_name: &str, html: &str) -> String {
    let mut out = format!("event: {event_name}\n");
    for line in html.lines().flat_map(|line| line.split('\r')) {
        out.push_str("data: ");
        out.push_str(line);
        out.push('\n');
    }
    if html.is_empty() {
        out.push_str("data: \n");
    }
    out.push('\n');
    out
}

/// Emit the JSON event followed by the message list fragment.
pub fn dual_sse_event(evt: &ChatEvent, messages_html: &str) -> String {
    let typed = sse_event(evt);
    let fragment = sse_fragment(MESSAGES_FRAGMENT_EVENT, messages_html);
    format!("{typed}{fragment}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_changed_serialization() {
        let event = ChatEvent::StatusChanged {
            message_id: "msg-1".to_string(),
            status: MessageStatus::Sent,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("message.status"));
        assert!(json.contains("\"messageId\":\"msg-1\""));
        assert!(json.contains("\"status\":\"sent\""));
    }

    #[test]
    fn test_sse_event_format() {
        let event = ChatEvent::ConversationReplaced {
            organization_id: None,
            message_count: 0,
        };
        let sse = sse_event(&event);
        assert!(sse.starts_with("event: conversation.replaced\n"));
        assert!(sse.contains("data: "));
        assert!(sse.ends_with("\n\n"));
    }

    #[test]
    fn test_fragment_splits_lines() {
        let sse = sse_fragment("messages", "<div>\n<p>hi</p>\n</div>");
        assert_eq!(
            sse,
            "event: messages\ndata: <div>\ndata: <p>hi</p>\ndata: </div>\n\n"
        );
    }

    #[test]
    fn test_fragment_splits_bare_carriage_return() {
        let sse = sse_fragment("messages", "<p>a\rb</p>\r\n<p>c</p>");
        assert_eq!(
            sse,
            "event: messages\ndata: <p>a\ndata: b</p>\ndata: <p>c</p>\n\n"
        );
        assert!(!sse.contains('\r'));
    }

    #[test]
    fn test_empty_fragment_still_has_data() {
        assert_eq!(sse_fragment("messages", ""), "event: messages\ndata: \n\n");
    }

    #[test]
    fn test_dual_event_contains_both() {
        let sse = dual_sse_event(&ChatEvent::Typing { active: false }, "<p>x</p>");
        assert!(sse.contains("event: typing\n"));
        assert!(sse.contains("event: messages\ndata: <p>x</p>\n\n"));
    }
}
