//! Text-case keywords for the `textTransform` property.

use super::value::StyleValue;

/// Normalized `text-transform` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextCase {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl TextCase {
    /// Maps a theme keyword to a text case. Unknown keywords map to `None`.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "uppercase" | "upper" => TextCase::Uppercase,
            "lowercase" | "lower" => TextCase::Lowercase,
            "capitalize" | "title" => TextCase::Capitalize,
            _ => TextCase::None,
        }
    }

    /// The CSS keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            TextCase::None => "none",
            TextCase::Uppercase => "uppercase",
            TextCase::Lowercase => "lowercase",
            TextCase::Capitalize => "capitalize",
        }
    }
}

/// Normalizes a `textTransform` value. Unset stays unset.
pub fn normalize_text_transform(value: &StyleValue) -> StyleValue {
    match value {
        StyleValue::Unset => StyleValue::Unset,
        other => {
            let keyword = other.as_str().unwrap_or_default();
            StyleValue::literal(TextCase::from_keyword(keyword).as_css())
        }
    }
}
