//! Chat message list.

use super::bubble::render_bubble;
use crate::directory::{Message, Organization};
use crate::ui::components::message_square_icon;
use crate::ui::escape;

/// Id of the element replaced on every send and on every SSE `messages` event.
pub const MESSAGE_LIST_ID: &str = "message-list";

fn typing_indicator() -> &'static str {
    r#"<div id="typing-indicator" class="flex justify-start gap-2">
<div class="rounded-2xl rounded-bl-md px-4 py-3 bg-white border border-gray-200/60 shadow-sm flex items-center gap-1">
<span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce"></span>
<span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce [animation-delay:150ms]"></span>
<span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce [animation-delay:300ms]"></span>
</div>
</div>"#
}

/// The list of bubbles for the active conversation, with the typing
/// indicator appended while a reply is pending.
pub fn render_message_list(org: &Organization, messages: &[Message], typing: bool) -> String {
    let body = if messages.is_empty() && !typing {
        format!(
            r#"<div class="flex flex-col items-center justify-center h-full text-center py-16">
<div class="w-14 h-14 rounded-2xl bg-orange-50 flex items-center justify-center mb-4">{icon}</div>
<p class="text-sm font-medium text-gray-700">Start a conversation with {name}</p>
<p class="text-xs text-gray-400 mt-1">Send a message to get help from their AI assistant</p>
</div>"#,
            icon = message_square_icon("w-7 h-7 text-orange-500"),
            name = escape(&org.name),
        )
    } else {
        let mut html: String = messages.iter().map(|m| render_bubble(m, org)).collect();
        if typing {
            html.push_str(typing_indicator());
        }
        html
    };

    format!(
        r#"<div id="{MESSAGE_LIST_ID}" class="space-y-4 p-6" aria-live="polite" aria-label="Chat messages">{body}</div>"#
    )
}
