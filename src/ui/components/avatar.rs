//! Avatar component with image and icon fallback.

use super::icons::building_icon;
use crate::ui::escape;

/// Organization avatar: the logo if there is one, else a building icon.
///
/// `frame` sizes and shapes the container (e.g. `"w-12 h-12 rounded-xl"`);
/// `fallback_class` styles the fallback container and `icon_class` the icon.
pub fn organization_avatar(
    logo: Option<&str>,
    alt: &str,
    frame: &str,
    fallback_class: &str,
    icon_class: &str,
) -> String {
    match logo.filter(|src| !src.is_empty()) {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="{frame} object-cover"/>"#,
            escape(src),
            escape(alt),
        ),
        None => format!(
            r#"<div class="{frame} {fallback_class} flex items-center justify-center">{}</div>"#,
            building_icon(icon_class)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_image() {
        let html = organization_avatar(Some("/logo.png"), "Bank logo", "w-8 h-8", "", "");
        assert!(html.starts_with("<img"));
        assert!(html.contains(r#"src="/logo.png""#));
    }

    #[test]
    fn test_fallback_icon() {
        let html = organization_avatar(None, "x", "w-8 h-8", "bg-gray-200", "text-gray-500");
        assert!(html.starts_with(r#"<div class="w-8 h-8 bg-gray-200"#));
        assert!(html.contains("<svg"));

        let empty = organization_avatar(Some(""), "x", "w-8 h-8", "", "");
        assert!(empty.contains("<svg"));
    }
}
