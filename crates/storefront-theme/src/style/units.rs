//! Unit coercion for length-like properties.
//!
//! Theme authors store sizes either as bare numbers (`"16"`, `16`) or as
//! qualified CSS lengths (`"2rem"`, `"50%"`). [`with_unit`] appends a unit to
//! the former and leaves the latter alone, so a value is never suffixed twice.

use super::value::StyleValue;

/// Unit appended when the caller does not specify one.
pub const DEFAULT_UNIT: &str = "px";

/// Appends `unit` to a bare numeric value.
///
/// - Unset values and empty strings yield `None` (omit the property).
/// - Strings containing any non-digit character are returned unchanged.
/// - Digit-only strings and finite numbers get `unit` appended.
///
/// # Example
///
/// ```rust
/// use storefront_theme::{with_unit, StyleValue};
///
/// assert_eq!(with_unit(&StyleValue::from("10"), "px"), Some("10px".to_string()));
/// assert_eq!(with_unit(&StyleValue::from("2rem"), "px"), Some("2rem".to_string()));
/// assert_eq!(with_unit(&StyleValue::Number(8.0), "px"), Some("8px".to_string()));
/// assert_eq!(with_unit(&StyleValue::from(""), "px"), None);
/// assert_eq!(with_unit(&StyleValue::Unset, "px"), None);
/// ```
pub fn with_unit(value: &StyleValue, unit: &str) -> Option<String> {
    match value {
        StyleValue::Unset => None,
        StyleValue::Number(n) if n.is_finite() => Some(format!("{}{}", n, unit)),
        StyleValue::Number(_) => None,
        StyleValue::Literal(s) | StyleValue::TokenRef(s) => with_unit_str(s, unit),
        StyleValue::Bool(b) => Some(b.to_string()),
    }
}

/// String form of [`with_unit`].
pub fn with_unit_str(value: &str, unit: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if value.chars().all(|c| c.is_ascii_digit()) {
        Some(format!("{}{}", value, unit))
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_digits_get_unit() {
        assert_eq!(with_unit_str("10", "px"), Some("10px".to_string()));
        assert_eq!(with_unit_str("3", "rem"), Some("3rem".to_string()));
    }

    #[test]
    fn test_qualified_values_unchanged() {
        for value in ["2rem", "50%", "calc(1px + 2px)", "auto", "1.5", "-4"] {
            assert_eq!(with_unit_str(value, "px"), Some(value.to_string()));
        }
    }

    #[test]
    fn test_empty_is_omitted() {
        assert_eq!(with_unit_str("", "px"), None);
        assert_eq!(with_unit(&StyleValue::literal(""), "px"), None);
        assert_eq!(with_unit(&StyleValue::Unset, "px"), None);
    }

    #[test]
    fn test_numbers_get_unit() {
        assert_eq!(with_unit(&StyleValue::Number(0.0), "px"), Some("0px".to_string()));
        assert_eq!(with_unit(&StyleValue::Number(1.5), "em"), Some("1.5em".to_string()));
        assert_eq!(with_unit(&StyleValue::Number(f64::NAN), "px"), None);
    }
}
