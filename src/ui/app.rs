//! Page shell, chat area and welcome panel.

use chrono::Utc;

use super::chat::render_chat_window;
use super::components::{ButtonProps, ButtonSize, message_square_icon, button, plus_icon};
use super::session_base;
use super::sidebar::{SidebarTab, SidebarView, render_sidebar};
use crate::directory::Directory;
use crate::session::ConversationSnapshot;

/// Generate the HTML shell for the application.
pub fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Chat with organization AI assistants">
    <title>{title} - OrgChat</title>

    <!-- HTMX and Extensions (local) -->
    <script src="/static/vendor/htmx-2.0.8.min.js"></script>
    <script src="/static/vendor/htmx-sse.js"></script>
    <script defer src="/static/vendor/alpine.min.js"></script>

    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="h-screen bg-gradient-to-br from-gray-50 via-white to-orange-50/30 text-gray-900 antialiased overflow-hidden">
{content}
<script>
    // Keep the newest message in view after every swap into the chat area.
    document.body.addEventListener('htmx:afterSwap', function () {{
        const scroller = document.getElementById('message-scroll');
        if (scroller) scroller.scrollTop = scroller.scrollHeight;
    }});
    document.body.addEventListener('htmx:sseMessage', function () {{
        const scroller = document.getElementById('message-scroll');
        if (scroller) scroller.scrollTop = scroller.scrollHeight;
    }});
</script>
</body>
</html>"#
    )
}

/// Welcome panel shown while no organization is selected.
pub fn welcome_panel(session_id: &str) -> String {
    let attrs = format!(
        r##"hx-post="{}/new-chat" hx-target="#chat-area" hx-swap="innerHTML" hx-include="#sidebar-search, #sidebar-tab""##,
        session_base(session_id)
    );
    let start = button(
        &ButtonProps {
            size: ButtonSize::Lg,
            class: "rounded-2xl shadow-lg shadow-orange-500/25",
            attrs: &attrs,
            ..ButtonProps::default()
        },
        &format!("{}Start Your First Conversation", plus_icon("mr-2 h-5 w-5")),
    );

    format!(
        r#"<div id="welcome" class="flex flex-col items-center justify-center h-full text-center px-8">
<div class="w-20 h-20 rounded-3xl bg-gradient-to-br from-orange-500 via-orange-600 to-orange-700 flex items-center justify-center shadow-xl shadow-orange-500/30 mb-6">{icon}</div>
<h2 class="text-3xl font-semibold text-gray-900 tracking-tight mb-3">Welcome to OrgChat</h2>
<p class="text-gray-500 max-w-md mb-8">Connect with AI assistants from hospitals, banks, hotels, insurance providers, government agencies and local businesses. Pick an agent from the sidebar to get started.</p>
{start}
<p class="text-xs text-gray-400 mt-6">Available 24/7 • Secure • Instant responses</p>
</div>"#,
        icon = message_square_icon("w-10 h-10 text-white"),
    )
}

/// Content of `#chat-area`: the chat window when an organization is
/// selected, otherwise the welcome panel.
pub fn render_chat_area(session_id: &str, snapshot: &ConversationSnapshot) -> String {
    match &snapshot.organization {
        Some(org) => render_chat_window(session_id, org, snapshot),
        None => welcome_panel(session_id),
    }
}

/// Full page for a freshly created session.
pub fn render_page(
    session_id: &str,
    directory: &Directory,
    snapshot: &ConversationSnapshot,
) -> String {
    let sidebar = render_sidebar(&SidebarView {
        session_id,
        directory,
        tab: SidebarTab::Organizations,
        query: "",
        selected_organization: snapshot.organization.as_ref().map(|org| org.id.as_str()),
        selected_chat: snapshot.chat_id.as_deref(),
        now: Utc::now(),
    });

    let content = format!(
        r#"<div id="app-shell" class="flex h-screen" data-session-id="{session_id}">
{sidebar}
<main class="flex-1 flex flex-col overflow-hidden" hx-ext="sse" sse-connect="{base}/events">
<div id="chat-area" class="flex-1 overflow-hidden">{chat}</div>
</main>
</div>"#,
        base = session_base(session_id),
        chat = render_chat_area(session_id, snapshot),
    );

    html_shell("Chat", &content)
}
