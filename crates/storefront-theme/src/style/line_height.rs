//! Line-height keyword expansion.

use super::value::StyleValue;

/// Symbolic line-height keywords accepted in themes and component styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineHeight {
    /// `1.2`
    Tight,
    /// `1.4`
    Normal,
    /// `1.6`
    Loose,
    /// Use the accompanying custom value verbatim.
    Custom,
}

impl LineHeight {
    /// Parses a keyword. Anything else (including numeric ratios) is `None`.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword.trim() {
            "tight" => Some(LineHeight::Tight),
            "normal" => Some(LineHeight::Normal),
            "loose" => Some(LineHeight::Loose),
            "custom" => Some(LineHeight::Custom),
            _ => None,
        }
    }

    /// The ratio a keyword stands for. `Custom` has none of its own.
    pub fn ratio(self) -> Option<&'static str> {
        match self {
            LineHeight::Tight => Some("1.2"),
            LineHeight::Normal => Some("1.4"),
            LineHeight::Loose => Some("1.6"),
            LineHeight::Custom => None,
        }
    }
}

/// Expands a line-height keyword into its ratio.
///
/// `custom` yields `custom` verbatim, or [`StyleValue::Unset`] when no custom
/// value was supplied so that a cascade can fall through. Every other value
/// passes through unchanged.
///
/// # Example
///
/// ```rust
/// use storefront_theme::{expand_line_height, StyleValue};
///
/// let none = StyleValue::Unset;
/// assert_eq!(expand_line_height(&"tight".into(), &none), StyleValue::from("1.2"));
/// assert_eq!(expand_line_height(&"custom".into(), &"2.5".into()), StyleValue::from("2.5"));
/// assert_eq!(expand_line_height(&"24px".into(), &none), StyleValue::from("24px"));
/// ```
pub fn expand_line_height(value: &StyleValue, custom: &StyleValue) -> StyleValue {
    let Some(keyword) = value.as_str().and_then(LineHeight::parse) else {
        return value.clone();
    };
    match keyword.ratio() {
        Some(ratio) => StyleValue::literal(ratio),
        None if custom.is_truthy() => custom.clone(),
        None => StyleValue::Unset,
    }
}
