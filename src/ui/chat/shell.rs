//! Chat window layout.

use super::header::render_header;
use super::input_area::render_input_area;
use super::message_list::render_message_list;
use crate::directory::Organization;
use crate::session::ConversationSnapshot;

/// Complete chat window for an organization:
/// - Header with name and presence
/// - Scrollable message area, live-updated over SSE
/// - Input area for new messages
pub fn render_chat_window(
    session_id: &str,
    org: &Organization,
    snapshot: &ConversationSnapshot,
) -> String {
    format!(
        r#"<div id="chat-window" class="flex flex-col h-full" data-organization-id="{org_id}">
{header}
<div id="message-scroll" class="flex-1 overflow-y-auto bg-gradient-to-b from-gray-50/50 to-white" sse-swap="messages" hx-swap="innerHTML">{messages}</div>
{input}
</div>"#,
        org_id = crate::ui::escape(&org.id),
        header = render_header(org),
        messages = render_message_list(org, &snapshot.messages, snapshot.typing),
        input = render_input_area(session_id, org),
    )
}
