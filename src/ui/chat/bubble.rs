//! Message bubble with timestamp and delivery status.

use crate::directory::{Message, MessageStatus, Organization};
use crate::ui::components::{check_check_icon, check_icon, organization_avatar, user_icon};
use crate::ui::escape;
use crate::ui::format::bubble_time;

fn status_indicator(status: MessageStatus) -> String {
    match status {
        MessageStatus::Sending => {
            r#"<span class="inline-block w-2 h-2 rounded-full bg-white/70 animate-pulse"></span>"#
                .to_string()
        }
        MessageStatus::Sent => check_icon("h-3 w-3 text-white/70"),
        MessageStatus::Delivered => check_check_icon("h-3 w-3 text-white/70"),
        MessageStatus::Read => check_check_icon("h-3 w-3 text-sky-200"),
    }
}

/// One message, right-aligned for the user and left-aligned for the agent
/// (`org` supplies the agent's avatar).
pub fn render_bubble(message: &Message, org: &Organization) -> String {
    let content = escape(&message.content);
    let time = bubble_time(message.timestamp);
    let id = escape(&message.id);

    if message.is_from_user() {
        let (status_attr, indicator) = match message.status {
            Some(status) => (
                format!(r#" data-status="{}""#, status.as_str()),
                status_indicator(status),
            ),
            None => (String::new(), String::new()),
        };
        format!(
            r#"<div id="{id}" class="flex justify-end gap-2"{status_attr}>
<div class="max-w-[70%] rounded-2xl rounded-br-md px-4 py-2.5 bg-gradient-to-r from-orange-500 to-orange-600 text-white shadow-md shadow-orange-500/20">
<p class="text-sm whitespace-pre-wrap break-words">{content}</p>
<div class="flex items-center justify-end gap-1 mt-1 text-[11px] text-white/70"><span>{time}</span>{indicator}</div>
</div>
<div class="w-8 h-8 rounded-full bg-gray-200 flex items-center justify-center flex-shrink-0">{avatar}</div>
</div>"#,
            avatar = user_icon("text-gray-500"),
        )
    } else {
        format!(
            r#"<div id="{id}" class="flex justify-start gap-2">
<div class="flex-shrink-0">{avatar}</div>
<div class="max-w-[70%] rounded-2xl rounded-bl-md px-4 py-2.5 bg-white border border-gray-200/60 text-gray-900 shadow-sm">
<p class="text-sm whitespace-pre-wrap break-words">{content}</p>
<div class="mt-1 text-[11px] text-gray-400"><span>{time}</span></div>
</div>
</div>"#,
            avatar = organization_avatar(
                org.logo.as_deref(),
                &format!("{} logo", org.name),
                "w-8 h-8 rounded-full",
                "bg-gradient-to-r from-orange-500 to-orange-600",
                "text-white",
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;

    fn org() -> Organization {
        Directory::seeded().organization("1").cloned().unwrap()
    }

    #[test]
    fn test_user_bubble_status() {
        let mut message = Message::outgoing("hi <there>");
        let html = render_bubble(&message, &org());
        assert!(html.contains("justify-end"));
        assert!(html.contains(r#"data-status="sending""#));
        assert!(html.contains("animate-pulse"));
        assert!(html.contains("hi &lt;there&gt;"));

        message.status = Some(MessageStatus::Read);
        let html = render_bubble(&message, &org());
        assert!(html.contains(r#"data-status="read""#));
        assert!(html.contains("text-sky-200"));
    }

    #[test]
    fn test_agent_bubble() {
        let html = render_bubble(&Message::reply("Hello"), &org());
        assert!(html.contains("justify-start"));
        assert!(!html.contains("data-status"));
        assert!(html.contains(">Hello</p>"));
    }
}
