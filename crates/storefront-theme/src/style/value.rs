//! Style value types for literals, token references and numbers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Property name to raw style value, as stored on a component or a preset.
pub type StyleMap = BTreeMap<String, StyleValue>;

/// A style value in its tagged form.
///
/// Component styles and theme tokens arrive as loosely typed JSON/YAML where
/// a string may be a CSS literal (`"16px"`) or the name of another theme
/// token (`"primary_color"`). Values are parsed into this enum once at
/// ingestion; [`ThemeScope::classify`](crate::ThemeScope::classify) marks
/// strings that name a token in the active scope as [`StyleValue::TokenRef`].
///
/// # Example
///
/// ```rust
/// use storefront_theme::StyleValue;
///
/// let size: StyleValue = "16px".into();
/// let weight: StyleValue = 600.0.into();
///
/// assert_eq!(size.to_string(), "16px");
/// assert_eq!(weight.to_string(), "600");
/// assert!(!StyleValue::from("").is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StyleValue {
    /// No value. Omitted from output.
    #[default]
    Unset,
    /// A literal CSS-ish string such as `"16px"` or `"#ff0000"`.
    Literal(String),
    /// The name of another theme token.
    TokenRef(String),
    /// A bare number such as `16` or `1.5`.
    Number(f64),
    /// A boolean flag.
    Bool(bool),
}

impl StyleValue {
    /// Creates a literal value.
    pub fn literal(value: impl Into<String>) -> Self {
        StyleValue::Literal(value.into())
    }

    /// Creates a token reference.
    pub fn token(name: impl Into<String>) -> Self {
        StyleValue::TokenRef(name.into())
    }

    /// Parses a raw JSON value without classifying token references.
    ///
    /// Strings become literals, numbers and booleans keep their type, and
    /// `null`, arrays and objects become [`StyleValue::Unset`].
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => StyleValue::Literal(s.clone()),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(StyleValue::Number)
                .unwrap_or(StyleValue::Unset),
            serde_json::Value::Bool(b) => StyleValue::Bool(*b),
            _ => StyleValue::Unset,
        }
    }

    /// Returns whether this value counts as "set" in a cascade.
    ///
    /// Unset, the empty string, zero, `NaN` and `false` are all falsy and
    /// fall through to the next cascade level.
    pub fn is_truthy(&self) -> bool {
        match self {
            StyleValue::Unset => false,
            StyleValue::Literal(s) | StyleValue::TokenRef(s) => !s.is_empty(),
            StyleValue::Number(n) => *n != 0.0 && !n.is_nan(),
            StyleValue::Bool(b) => *b,
        }
    }

    /// Returns true for [`StyleValue::Unset`].
    pub fn is_unset(&self) -> bool {
        matches!(self, StyleValue::Unset)
    }

    /// Returns the string payload of a literal or token reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Literal(s) | StyleValue::TokenRef(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric payload, parsing numeric literals as well.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Literal(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Renders the value for output, or `None` when unset.
    pub fn to_css_string(&self) -> Option<String> {
        match self {
            StyleValue::Unset => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Unset => Ok(()),
            StyleValue::Literal(s) | StyleValue::TokenRef(s) => f.write_str(s),
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Literal(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Literal(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Number(value as f64)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Unset => serializer.serialize_none(),
            StyleValue::Literal(s) | StyleValue::TokenRef(s) => serializer.serialize_str(s),
            StyleValue::Number(n) => serializer.serialize_f64(*n),
            StyleValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(StyleValue::from_json(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_string_is_literal() {
        let value = StyleValue::from_json(&serde_json::json!("primary_color"));
        assert_eq!(value, StyleValue::literal("primary_color"));
    }

    #[test]
    fn test_from_json_number() {
        let value = StyleValue::from_json(&serde_json::json!(12));
        assert_eq!(value, StyleValue::Number(12.0));
    }

    #[test]
    fn test_from_json_null_and_objects_are_unset() {
        assert!(StyleValue::from_json(&serde_json::Value::Null).is_unset());
        assert!(StyleValue::from_json(&serde_json::json!({"a": 1})).is_unset());
        assert!(StyleValue::from_json(&serde_json::json!([1, 2])).is_unset());
    }

    #[test]
    fn test_truthiness_follows_or_chain_semantics() {
        assert!(!StyleValue::Unset.is_truthy());
        assert!(!StyleValue::literal("").is_truthy());
        assert!(!StyleValue::Number(0.0).is_truthy());
        assert!(!StyleValue::Number(f64::NAN).is_truthy());
        assert!(!StyleValue::Bool(false).is_truthy());

        assert!(StyleValue::literal("0").is_truthy());
        assert!(StyleValue::Number(-1.0).is_truthy());
        assert!(StyleValue::token("body_font").is_truthy());
    }

    #[test]
    fn test_display_drops_trailing_zero() {
        assert_eq!(StyleValue::Number(16.0).to_string(), "16");
        assert_eq!(StyleValue::Number(1.6).to_string(), "1.6");
    }

    #[test]
    fn test_as_number_parses_literals() {
        assert_eq!(StyleValue::literal(" 24 ").as_number(), Some(24.0));
        assert_eq!(StyleValue::literal("24px").as_number(), None);
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let map: StyleMap = serde_yaml::from_str("color: red\nsize: 14\nbold: true").unwrap();
        assert_eq!(map["color"], StyleValue::literal("red"));
        assert_eq!(map["size"], StyleValue::Number(14.0));
        assert_eq!(map["bold"], StyleValue::Bool(true));
    }

    #[test]
    fn test_serialize_round_trips_through_json() {
        let value = StyleValue::token("heading_font");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"heading_font\"");
        assert_eq!(serde_json::to_string(&StyleValue::Unset).unwrap(), "null");
    }
}
