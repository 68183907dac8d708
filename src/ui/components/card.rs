//! Card container component.

/// Render a card around already-rendered `children`.
///
/// `attrs` is spliced into the opening tag, for click handlers and ids.
pub fn card(class: &str, attrs: &str, children: &str) -> String {
    format!(
        r#"<div class="rounded-xl border bg-card text-gray-900 shadow-sm {class}" {attrs}>{children}</div>"#
    )
}
