//! Scrollable area component.

/// Scrollable container with thin scrollbar styling.
pub fn scroll_area(class: &str, attrs: &str, children: &str) -> String {
    format!(
        r#"<div class="relative overflow-y-auto scrollbar-thin scrollbar-thumb-gray-200 scrollbar-track-transparent {class}" {attrs}>{children}</div>"#
    )
}
