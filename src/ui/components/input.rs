//! Input components for text fields.

use crate::ui::escape;

/// Text input properties. `attrs` is spliced verbatim (hx wiring).
#[derive(Debug, Clone, Copy, Default)]
pub struct InputProps<'a> {
    pub input_type: &'a str,
    pub name: &'a str,
    pub id: &'a str,
    pub placeholder: &'a str,
    pub value: &'a str,
    pub class: &'a str,
    pub attrs: &'a str,
}

/// Single-line text input.
pub fn input(props: &InputProps<'_>) -> String {
    let base_classes = "flex w-full border text-sm text-gray-900 placeholder:text-gray-400 \
                        focus-visible:outline-none disabled:cursor-not-allowed disabled:opacity-50";
    let input_type = if props.input_type.is_empty() {
        "text"
    } else {
        props.input_type
    };

    format!(
        r#"<input type="{input_type}" id="{}" name="{}" placeholder="{}" value="{}" class="{base_classes} {}" autocomplete="off" {}/>"#,
        props.id,
        props.name,
        escape(props.placeholder),
        escape(props.value),
        props.class,
        props.attrs,
    )
}

/// Multi-line input.
pub fn textarea(name: &str, placeholder: &str, rows: u32, class: &str, attrs: &str) -> String {
    let base_classes = "flex w-full border bg-white px-4 py-3 text-gray-900 \
                        placeholder:text-gray-400 focus-visible:outline-none \
                        disabled:cursor-not-allowed disabled:opacity-50 resize-none";

    format!(
        r#"<textarea name="{name}" placeholder="{}" rows="{rows}" class="{base_classes} {class}" {attrs}></textarea>"#,
        escape(placeholder),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_escapes_value() {
        let html = input(&InputProps {
            name: "q",
            value: r#"a"b<c"#,
            ..InputProps::default()
        });
        assert!(html.contains(r#"type="text""#));
        assert!(html.contains(r#"value="a&quot;b&lt;c""#));
    }

    #[test]
    fn test_textarea_placeholder() {
        let html = textarea("content", "Message A & B...", 2, "", "required");
        assert!(html.contains(r#"placeholder="Message A &amp; B...""#));
        assert!(html.contains("required></textarea>"));
    }
}
