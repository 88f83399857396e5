//! Component-family presets.
//!
//! Themes may carry per-family defaults named `{family}_{property}`, for
//! example `product_price_fontSize` or `button_hover_backgroundColor`. A
//! component selects its family by its kebab-case kind (`product-price`).

use crate::style::StyleMap;
use crate::theme::{ThemeConfig, ThemeScope};

/// Token prefix for a component family: `product-price` → `product_price`.
pub fn family_prefix(family: &str) -> String {
    family.trim().replace('-', "_")
}

/// Collects every `{family}_{property}` token into a preset style map keyed
/// by `property`. Values are resolved through the scope.
///
/// # Example
///
/// ```rust
/// use storefront_theme::{component_preset, StyleValue, ThemeConfig};
///
/// let theme = ThemeConfig::new()
///     .add("accent_color", "30 90% 50%")
///     .add("product_price_color", "accent_color")
///     .add("product_price_fontSize", "18px")
///     .add("product_title_fontSize", "24px");
///
/// let preset = component_preset(&theme.scope(), "product-price");
/// assert_eq!(preset.len(), 2);
/// assert_eq!(preset["color"], StyleValue::from("30 90% 50%"));
/// ```
pub fn component_preset(scope: &ThemeScope<'_>, family: &str) -> StyleMap {
    let prefix = format!("{}_", family_prefix(family));
    scope
        .token_names()
        .filter_map(|name| {
            let property = name.strip_prefix(&prefix)?;
            let value = scope.token(name);
            (!property.is_empty() && value.is_truthy()).then(|| (property.to_string(), value))
        })
        .collect()
}

/// Free-function form of [`component_preset`] taking the theme layers
/// directly.
pub fn get_component_styles(
    theme: &ThemeConfig,
    family: &str,
    applied: Option<&ThemeConfig>,
) -> StyleMap {
    component_preset(&ThemeScope::new(theme).with_applied(applied), family)
}
