//! Badge component for status indicators and tags.

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Orange gradient, used for unread counts.
    #[default]
    Default,
    /// Muted badge, used for "Verified".
    Secondary,
    /// Outline badge.
    Outline,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-gradient-to-r from-orange-500 to-orange-600 text-white",
            Self::Secondary => "bg-gray-100 text-gray-700",
            Self::Outline => "border border-gray-200 bg-transparent text-gray-700",
        }
    }
}

/// Render a badge around already-rendered `children`.
pub fn badge(variant: BadgeVariant, class: &str, children: &str) -> String {
    let base_classes = "inline-flex items-center justify-center rounded-full px-2.5 py-0.5 \
                        text-xs font-semibold transition-colors";

    format!(
        r#"<span class="{base_classes} {} {class}">{children}</span>"#,
        variant.classes()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variant_classes() {
        let html = badge(BadgeVariant::Secondary, "text-xs", "Verified");
        assert!(html.contains("bg-gray-100"));
        assert!(html.contains(">Verified</span>"));
    }
}
