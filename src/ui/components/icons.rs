//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements (lucide outlines) so they pick up
//! `currentColor` and sizing classes from the caller.

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

fn svg(class: &str, body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{ICON_SIZE} {class}" aria-hidden="true">{body}</svg>"#
    )
}

/// Send/paper-plane icon.
pub fn send_icon(class: &str) -> String {
    svg(
        class,
        r#"<line x1="22" y1="2" x2="11" y2="13"/><polygon points="22 2 15 22 11 13 2 9 22 2"/>"#,
    )
}

/// Single check mark.
pub fn check_icon(class: &str) -> String {
    svg(class, r#"<polyline points="20 6 9 17 4 12"/>"#)
}

/// Double check mark.
pub fn check_check_icon(class: &str) -> String {
    svg(class, r#"<path d="M18 6 7 17l-5-5"/><path d="m22 10-7.5 7.5L13 16"/>"#)
}

/// User silhouette.
pub fn user_icon(class: &str) -> String {
    svg(
        class,
        r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#,
    )
}

/// Office building, the placeholder for organizations without a logo.
pub fn building_icon(class: &str) -> String {
    svg(
        class,
        r#"<path d="M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z"/><path d="M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2"/><path d="M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2"/><path d="M10 6h4"/><path d="M10 10h4"/><path d="M10 14h4"/><path d="M10 18h4"/>"#,
    )
}

/// Square speech bubble.
pub fn message_square_icon(class: &str) -> String {
    svg(
        class,
        r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>"#,
    )
}

/// Magnifying glass.
pub fn search_icon(class: &str) -> String {
    svg(
        class,
        r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
    )
}

/// Funnel.
pub fn filter_icon(class: &str) -> String {
    svg(
        class,
        r#"<polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3"/>"#,
    )
}

/// Plus sign.
pub fn plus_icon(class: &str) -> String {
    svg(class, r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#)
}

/// Clock face.
pub fn clock_icon(class: &str) -> String {
    svg(
        class,
        r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
    )
}

/// Paperclip.
pub fn paperclip_icon(class: &str) -> String {
    svg(
        class,
        r#"<path d="m21.44 11.05-9.19 9.19a6 6 0 0 1-8.49-8.49l8.57-8.57A4 4 0 1 1 18 8.84l-8.59 8.57a2 2 0 0 1-2.83-2.83l8.49-8.48"/>"#,
    )
}

/// Smiley face.
pub fn smile_icon(class: &str) -> String {
    svg(
        class,
        r#"<circle cx="12" cy="12" r="10"/><path d="M8 14s1.5 2 4 2 4-2 4-2"/><line x1="9" y1="9" x2="9.01" y2="9"/><line x1="15" y1="9" x2="15.01" y2="9"/>"#,
    )
}
