//! Button component with variants and sizes.

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Orange gradient call to action.
    #[default]
    Gradient,
    /// Subtle ghost button.
    Ghost,
    /// Outline button.
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Gradient => {
                "bg-gradient-to-r from-orange-500 to-orange-600 text-white hover:from-orange-600 hover:to-orange-700"
            }
            Self::Ghost => "bg-transparent text-gray-500 hover:text-gray-700 hover:bg-gray-100",
            Self::Outline => "bg-transparent border border-gray-200 text-gray-900 hover:bg-gray-50",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Large button.
    Lg,
    /// Icon-only button.
    Icon,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-xs",
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-12 px-6 text-base",
            Self::Icon => "h-10 w-10",
        }
    }
}

/// Button properties. `attrs` is spliced verbatim into the tag and carries
/// `hx-*` wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonProps<'a> {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub button_type: &'a str,
    pub class: &'a str,
    pub attrs: &'a str,
    pub disabled: bool,
}

/// Render a shadcn-style button around already-rendered `children`.
pub fn button(props: &ButtonProps<'_>, children: &str) -> String {
    let base_classes = "inline-flex items-center justify-center rounded-lg font-medium \
                        transition-colors focus-visible:outline-none focus-visible:ring-2 \
                        focus-visible:ring-orange-300 \
                        disabled:pointer-events-none disabled:opacity-50";

    let button_type = if props.button_type.is_empty() {
        "button"
    } else {
        props.button_type
    };
    let disabled = if props.disabled { " disabled" } else { "" };

    format!(
        r#"<button type="{button_type}" class="{base_classes} {} {} {}" {}{disabled}>{children}</button>"#,
        props.variant.classes(),
        props.size.classes(),
        props.class,
        props.attrs,
    )
}
