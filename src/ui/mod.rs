//! Server-rendered UI.
//!
//! Pages and fragments are built from small render functions returning HTML
//! strings, following ShadCN-UI styling. HTMX attributes on the markup wire
//! clicks, searches and sends back to the fragment endpoints in
//! [`crate::server`]; the HTMX SSE extension keeps the message list live.
//!
//! # Structure
//!
//! - [`app`]: Full page shell and welcome panel
//! - [`sidebar`]: Organization / chat lists with search and tabs
//! - [`chat`]: Chat window (header, message list, bubbles, input)
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`format`]: Time and badge label formatting

pub mod app;
pub mod chat;
pub mod components;
pub mod format;
pub mod sidebar;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// URL prefix for a session's endpoints.
pub(crate) fn session_base(session_id: &str) -> String {
    format!("/api/sessions/{session_id}")
}
