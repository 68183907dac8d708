//! Chat message input area with HTMX form submission.

use crate::directory::Organization;
use crate::ui::components::{
    ButtonProps, ButtonSize, ButtonVariant, button, paperclip_icon, send_icon, smile_icon,
    textarea,
};
use crate::ui::session_base;

/// Message composer. Enter submits, Shift+Enter inserts a newline; the posted
/// form answers with a fresh `#message-list`.
pub fn render_input_area(session_id: &str, org: &Organization) -> String {
    let textarea_attrs = r#"x-model="message" x-on:keydown.enter="if (!$event.shiftKey) { $event.preventDefault(); if (message.trim()) $el.form.requestSubmit() }" x-on:input="$el.style.height = 'auto'; $el.style.height = Math.min($el.scrollHeight, 128) + 'px'""#;
    let field = textarea(
        "content",
        &format!("Message {}...", org.name),
        1,
        "min-h-[48px] max-h-32 pr-12 rounded-2xl border-gray-200/60 bg-gray-50/80 text-sm \
         focus:bg-white focus:border-orange-300 focus:ring-2 focus:ring-orange-200",
        textarea_attrs,
    );

    let attach = button(
        &ButtonProps {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            class: "rounded-2xl flex-shrink-0",
            attrs: r#"aria-label="Attach file""#,
            ..ButtonProps::default()
        },
        &paperclip_icon("h-5 w-5"),
    );
    let emoji = button(
        &ButtonProps {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Sm,
            class: "absolute right-2 bottom-2 h-8 w-8 px-0 rounded-xl",
            attrs: r#"aria-label="Insert emoji""#,
            ..ButtonProps::default()
        },
        &smile_icon("h-4 w-4"),
    );
    let send = button(
        &ButtonProps {
            size: ButtonSize::Icon,
            button_type: "submit",
            class: "h-12 w-12 rounded-2xl flex-shrink-0 shadow-lg shadow-orange-500/25",
            attrs: r#"aria-label="Send message" x-bind:disabled="!message.trim()""#,
            ..ButtonProps::default()
        },
        &send_icon("h-5 w-5"),
    );

    format!(
        r##"<div class="p-4 border-t border-gray-200/60 bg-white/80 backdrop-blur-sm">
<form id="message-form" class="flex items-end gap-3" hx-post="{base}/messages" hx-target="#message-list" hx-swap="outerHTML" x-data="{{ message: '' }}" x-on:htmx:after-request="if ($event.detail.successful) {{ message = ''; $el.reset() }}">
{attach}
<div class="flex-1 relative">{field}{emoji}</div>
{send}
</form>
<p class="text-xs text-gray-400 mt-2 text-center">Press Enter to send, Shift+Enter for new line</p>
</div>"##,
        base = session_base(session_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;

    #[test]
    fn test_composer_wiring() {
        let directory = Directory::seeded();
        let html = render_input_area("abc", directory.organization("2").unwrap());
        assert!(html.contains(r#"hx-post="/api/sessions/abc/messages""#));
        assert!(html.contains(r#"name="content""#));
        assert!(html.contains(r#"placeholder="Message Metropolitan Bank...""#));
        assert!(html.contains(r#"type="submit""#));
    }
}
