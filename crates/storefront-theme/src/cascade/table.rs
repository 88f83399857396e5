//! Declarative property tables.
//!
//! Each component family describes its visual properties once, as a static
//! slice of [`PropertyRule`]s, instead of hand-writing a fallback chain per
//! property:
//!
//! ```rust
//! use storefront_theme::{PropertyKind, PropertyRule};
//!
//! const BUTTON: &[PropertyRule] = &[
//!     PropertyRule::new("backgroundColor")
//!         .theme("button_backgroundColor")
//!         .fallback("primary_color")
//!         .kind(PropertyKind::Color),
//!     PropertyRule::new("borderRadius")
//!         .theme("button_radius")
//!         .fallback("6")
//!         .kind(PropertyKind::Length("px")),
//! ];
//! # assert_eq!(BUTTON.len(), 2);
//! ```
//!
//! [`resolve_table`] runs every rule through the precedence cascade and
//! collects the results into a [`ResolvedStyleSet`].

use crate::style::{
    expand_line_height, normalize_text_transform, to_css_color, with_unit, StyleMap, StyleValue,
};
use crate::theme::ThemeScope;

use super::font::resolve_font;
use super::property::Cascade;
use super::resolved::ResolvedStyleSet;
use super::text_style::CUSTOM_LINE_HEIGHT;

/// Post-processing applied to a property's value at every cascade layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyKind {
    /// Used as is.
    #[default]
    Plain,
    /// Bare numbers get the unit appended.
    Length(&'static str),
    /// HSL triplets are wrapped as `hsl(...)`.
    Color,
    /// The theme layer goes through font resolution.
    FontFamily,
    /// Keywords expand to ratios; `custom` reads `customLineHeight`.
    LineHeight,
    /// Normalized to a CSS `text-transform` keyword.
    TextTransform,
}

/// One row of a property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRule {
    /// Output property name.
    pub property: &'static str,
    /// Key in the component's own styles.
    pub component_key: &'static str,
    /// Key in the preset map, if the preset layer applies.
    pub preset_key: Option<&'static str>,
    /// Theme token holding the default.
    pub theme_key: Option<&'static str>,
    /// Literal used when no layer resolves. May name a token.
    pub fallback: Option<&'static str>,
    pub kind: PropertyKind,
}

impl PropertyRule {
    /// A rule reading `property` from the component and the preset, with no
    /// theme default or fallback.
    pub const fn new(property: &'static str) -> Self {
        Self {
            property,
            component_key: property,
            preset_key: Some(property),
            theme_key: None,
            fallback: None,
            kind: PropertyKind::Plain,
        }
    }

    pub const fn component(self, key: &'static str) -> Self {
        Self {
            component_key: key,
            ..self
        }
    }

    pub const fn preset(self, key: &'static str) -> Self {
        Self {
            preset_key: Some(key),
            ..self
        }
    }

    /// Skips the preset layer.
    pub const fn no_preset(self) -> Self {
        Self {
            preset_key: None,
            ..self
        }
    }

    pub const fn theme(self, token: &'static str) -> Self {
        Self {
            theme_key: Some(token),
            ..self
        }
    }

    pub const fn fallback(self, literal: &'static str) -> Self {
        Self {
            fallback: Some(literal),
            ..self
        }
    }

    pub const fn kind(self, kind: PropertyKind) -> Self {
        Self { kind, ..self }
    }

    /// Resolves this rule against the given layers.
    pub fn resolve(
        &self,
        scope: &ThemeScope<'_>,
        component: &StyleMap,
        preset: &StyleMap,
    ) -> StyleValue {
        let kind = self.kind;
        let mut cascade =
            Cascade::new(*scope).with_transform(move |value| apply_kind(kind, value));

        // Line-height `custom` reads its value from the same layer.
        cascade = if kind == PropertyKind::LineHeight {
            cascade.layer_with(|s| line_height_layer(s, component, self.component_key))
        } else {
            cascade.map(component, self.component_key)
        };

        if let Some(key) = self.preset_key {
            cascade = if kind == PropertyKind::LineHeight {
                cascade.layer_with(|s| line_height_layer(s, preset, key))
            } else {
                cascade.map(preset, key)
            };
        }

        if let Some(token) = self.theme_key {
            cascade = match kind {
                PropertyKind::FontFamily => {
                    cascade.layer_with(|s| StyleValue::Literal(resolve_font(s, token)))
                }
                PropertyKind::LineHeight => cascade.layer_with(|s| {
                    let custom = s.token(&custom_line_height_token(token));
                    expand_line_height(&s.token(token), &custom)
                }),
                _ => cascade.token(token),
            };
        }

        match self.fallback {
            Some(literal) => cascade.or_literal(literal),
            None => cascade.finish(),
        }
    }
}

/// Resolves every rule of a table into a fresh [`ResolvedStyleSet`].
///
/// Properties that resolve to nothing are left out.
///
/// # Example
///
/// ```rust
/// use storefront_theme::{resolve_table, PropertyKind, PropertyRule, StyleMap, ThemeConfig};
///
/// const RULES: &[PropertyRule] = &[
///     PropertyRule::new("color").theme("text_color").kind(PropertyKind::Color),
///     PropertyRule::new("padding").fallback("12").kind(PropertyKind::Length("px")),
///     PropertyRule::new("gap"),
/// ];
///
/// let theme = ThemeConfig::new().add("text_color", "0 0% 9%");
/// let set = resolve_table(&theme.scope(), RULES, &StyleMap::new(), &StyleMap::new());
///
/// assert_eq!(set.get("color"), Some("hsl(0 0% 9%)"));
/// assert_eq!(set.get("padding"), Some("12px"));
/// assert_eq!(set.get("gap"), None);
/// ```
pub fn resolve_table(
    scope: &ThemeScope<'_>,
    rules: &[PropertyRule],
    component: &StyleMap,
    preset: &StyleMap,
) -> ResolvedStyleSet {
    let mut set = ResolvedStyleSet::new();
    for rule in rules {
        let value = rule.resolve(scope, component, preset);
        set.insert(rule.property, &value);
    }
    set
}

fn apply_kind(kind: PropertyKind, value: StyleValue) -> StyleValue {
    match kind {
        PropertyKind::Plain | PropertyKind::FontFamily => value,
        PropertyKind::Length(unit) => with_unit(&value, unit)
            .map(StyleValue::Literal)
            .unwrap_or_default(),
        PropertyKind::Color => to_css_color(&value),
        PropertyKind::LineHeight => expand_line_height(&value, &StyleValue::Unset),
        PropertyKind::TextTransform => normalize_text_transform(&value),
    }
}

fn line_height_layer(scope: &ThemeScope<'_>, styles: &StyleMap, key: &str) -> StyleValue {
    let Some(raw) = styles.get(key) else {
        return StyleValue::Unset;
    };
    let custom = styles
        .get(CUSTOM_LINE_HEIGHT)
        .map(|value| scope.resolve(value))
        .unwrap_or_default();
    expand_line_height(&scope.resolve(raw), &custom)
}

/// `heading1_lineHeight` → `heading1_customLineHeight`.
fn custom_line_height_token(token: &str) -> String {
    match token.rsplit_once('_') {
        Some((family, _)) => format!("{}_{}", family, CUSTOM_LINE_HEIGHT),
        None => CUSTOM_LINE_HEIGHT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeConfig;

    fn styles(pairs: &[(&str, StyleValue)]) -> StyleMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_const_builder() {
        const RULE: PropertyRule = PropertyRule::new("borderRadius")
            .component("radius")
            .no_preset()
            .theme("button_radius")
            .fallback("4")
            .kind(PropertyKind::Length("px"));
        assert_eq!(RULE.component_key, "radius");
        assert_eq!(RULE.preset_key, None);
        assert_eq!(RULE.theme_key, Some("button_radius"));
        assert_eq!(RULE.kind, PropertyKind::Length("px"));
    }

    #[test]
    fn test_length_coercion_per_layer() {
        let theme = ThemeConfig::new().add("button_radius", "8");
        let rule = PropertyRule::new("borderRadius")
            .theme("button_radius")
            .kind(PropertyKind::Length("px"));
        let value = rule.resolve(&theme.scope(), &StyleMap::new(), &StyleMap::new());
        assert_eq!(value, StyleValue::literal("8px"));

        let component = styles(&[("borderRadius", "1rem".into())]);
        let value = rule.resolve(&theme.scope(), &component, &StyleMap::new());
        assert_eq!(value, StyleValue::literal("1rem"));
    }

    #[test]
    fn test_color_token_reference_is_wrapped() {
        let theme = ThemeConfig::new().add("primary_color", "209 100% 50%");
        let rule = PropertyRule::new("backgroundColor")
            .fallback("primary_color")
            .kind(PropertyKind::Color);
        let value = rule.resolve(&theme.scope(), &StyleMap::new(), &StyleMap::new());
        assert_eq!(value, StyleValue::literal("hsl(209 100% 50%)"));
    }

    #[test]
    fn test_line_height_keyword_from_preset() {
        let theme = ThemeConfig::new();
        let preset = styles(&[("lineHeight", "tight".into())]);
        let rule = PropertyRule::new("lineHeight").kind(PropertyKind::LineHeight);
        let value = rule.resolve(&theme.scope(), &StyleMap::new(), &preset);
        assert_eq!(value, StyleValue::literal("1.2"));
    }

    #[test]
    fn test_line_height_custom_reads_same_layer() {
        let theme = ThemeConfig::new();
        let component = styles(&[
            ("lineHeight", "custom".into()),
            ("customLineHeight", "2.5".into()),
        ]);
        let preset = styles(&[("lineHeight", "loose".into())]);
        let rule = PropertyRule::new("lineHeight").kind(PropertyKind::LineHeight);
        let value = rule.resolve(&theme.scope(), &component, &preset);
        assert_eq!(value, StyleValue::literal("2.5"));
    }

    #[test]
    fn test_line_height_custom_without_value_falls_through() {
        let theme = ThemeConfig::new();
        let component = styles(&[("lineHeight", "custom".into())]);
        let preset = styles(&[("lineHeight", "loose".into())]);
        let rule = PropertyRule::new("lineHeight").kind(PropertyKind::LineHeight);
        let value = rule.resolve(&theme.scope(), &component, &preset);
        assert_eq!(value, StyleValue::literal("1.6"));
    }

    #[test]
    fn test_line_height_theme_custom_token() {
        let theme = ThemeConfig::new()
            .add("heading1_lineHeight", "custom")
            .add("heading1_customLineHeight", "1.05");
        let rule = PropertyRule::new("lineHeight")
            .theme("heading1_lineHeight")
            .kind(PropertyKind::LineHeight);
        let value = rule.resolve(&theme.scope(), &StyleMap::new(), &StyleMap::new());
        assert_eq!(value, StyleValue::literal("1.05"));
    }

    #[test]
    fn test_font_family_theme_layer() {
        let theme = ThemeConfig::new()
            .add("heading_font", "'Georgia', serif")
            .add("heading3_font", "heading_font");
        let rule = PropertyRule::new("fontFamily")
            .theme("heading3_font")
            .kind(PropertyKind::FontFamily);
        let value = rule.resolve(&theme.scope(), &StyleMap::new(), &StyleMap::new());
        assert_eq!(value, StyleValue::literal("'Georgia', serif"));

        let component = styles(&[("fontFamily", "monospace".into())]);
        let value = rule.resolve(&theme.scope(), &component, &StyleMap::new());
        assert_eq!(value, StyleValue::literal("monospace"));
    }

    #[test]
    fn test_text_transform_normalized() {
        let theme = ThemeConfig::new();
        let component = styles(&[("textTransform", "upper".into())]);
        let rule = PropertyRule::new("textTransform").kind(PropertyKind::TextTransform);
        let value = rule.resolve(&theme.scope(), &component, &StyleMap::new());
        assert_eq!(value, StyleValue::literal("uppercase"));
    }

    #[test]
    fn test_empty_text_transform_falls_through() {
        let theme = ThemeConfig::new();
        let component = styles(&[("textTransform", "".into())]);
        let preset = styles(&[("textTransform", "capitalize".into())]);
        let rule = PropertyRule::new("textTransform").kind(PropertyKind::TextTransform);
        let value = rule.resolve(&theme.scope(), &component, &preset);
        assert_eq!(value, StyleValue::literal("capitalize"));
    }

    #[test]
    fn test_no_preset_skips_preset_layer() {
        let theme = ThemeConfig::new();
        let preset = styles(&[("color", "blue".into())]);
        let rule = PropertyRule::new("color").no_preset().fallback("black");
        let value = rule.resolve(&theme.scope(), &StyleMap::new(), &preset);
        assert_eq!(value, StyleValue::literal("black"));
    }

    #[test]
    fn test_resolve_table_omits_unset() {
        let theme = ThemeConfig::new();
        let rules = [
            PropertyRule::new("color").fallback("#000000"),
            PropertyRule::new("margin"),
        ];
        let set = resolve_table(&theme.scope(), &rules, &StyleMap::new(), &StyleMap::new());
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("color"), Some("#000000"));
    }

    #[test]
    fn test_custom_line_height_token_name() {
        assert_eq!(
            custom_line_height_token("heading1_lineHeight"),
            "heading1_customLineHeight"
        );
        assert_eq!(custom_line_height_token("lineHeight"), "customLineHeight");
    }
}
