//! Font-family resolution.
//!
//! Themes define four base font tokens and let each text style point at one
//! of them:
//!
//! ```yaml
//! heading_font: "'Playfair Display', serif"
//! body_font: "'Inter', sans-serif"
//! heading3_font: heading_font     # alias to a base token
//! paragraph_font: custom          # use paragraph_font_custom
//! paragraph_font_custom: "'Lora', serif"
//! ```

use crate::style::StyleValue;
use crate::theme::{ThemeConfig, ThemeScope};

/// The base font tokens every per-style font key may point at.
pub const BASE_FONT_TOKENS: [&str; 4] = [
    "heading_font",
    "body_font",
    "subheading_font",
    "accent_font",
];

/// Family used when nothing in the theme resolves.
pub const DEFAULT_FONT_FAMILY: &str = "\"Inter\", sans-serif";

/// Theme-wide custom font used when a `custom` key has no sibling value.
pub const CUSTOM_FONT_TOKEN: &str = "customFont";

const CUSTOM_KEYWORD: &str = "custom";

/// Returns true if `name` is one of [`BASE_FONT_TOKENS`].
pub fn is_base_font_token(name: &str) -> bool {
    BASE_FONT_TOKENS.contains(&name)
}

/// The base token a per-style font key falls back to when it is not set.
fn implied_base(font_key: &str) -> &'static str {
    if font_key.starts_with("heading") {
        "heading_font"
    } else if font_key.starts_with("subheading") {
        "subheading_font"
    } else if font_key.starts_with("accent") {
        "accent_font"
    } else {
        "body_font"
    }
}

/// Resolves a font key to a CSS font-family string.
///
/// - A value naming a base font token is replaced by that token's value.
/// - `custom` uses `{font_key}_custom`, then the theme-wide `customFont`.
/// - Any other value is a literal font-family.
///
/// An unset key falls back to the base token its name implies
/// (`heading3_font` → `heading_font`, `paragraph_font` → `body_font`), and
/// finally to [`DEFAULT_FONT_FAMILY`]. The result is never empty.
///
/// # Example
///
/// ```rust
/// use storefront_theme::{resolve_font, ThemeConfig};
///
/// let theme = ThemeConfig::new()
///     .add("heading_font", "'Georgia', serif")
///     .add("heading3_font", "heading_font");
///
/// assert_eq!(resolve_font(&theme.scope(), "heading3_font"), "'Georgia', serif");
/// assert_eq!(resolve_font(&theme.scope(), "body_font"), "\"Inter\", sans-serif");
/// ```
pub fn resolve_font(scope: &ThemeScope<'_>, font_key: &str) -> String {
    if let Some(family) = font_from_key(scope, font_key) {
        return family;
    }

    let base = implied_base(font_key);
    if base != font_key {
        if let Some(family) = font_from_key(scope, base) {
            return family;
        }
    }

    tracing::debug!(font_key, "no font resolved, using default family");
    DEFAULT_FONT_FAMILY.to_string()
}

/// Free-function form of [`resolve_font`] taking the theme layers directly.
pub fn resolved_font(
    theme: &ThemeConfig,
    font_key: &str,
    applied: Option<&ThemeConfig>,
) -> String {
    resolve_font(&ThemeScope::new(theme).with_applied(applied), font_key)
}

fn font_from_key(scope: &ThemeScope<'_>, font_key: &str) -> Option<String> {
    let resolved = scope.token(font_key);
    let family = resolved.as_str().map(str::trim).filter(|s| !s.is_empty())?;

    if family == CUSTOM_KEYWORD {
        return custom_font(scope, font_key);
    }
    // A base token name that did not resolve means the base token is missing.
    if is_base_font_token(family) {
        return None;
    }
    Some(family.to_string())
}

fn custom_font(scope: &ThemeScope<'_>, font_key: &str) -> Option<String> {
    [format!("{}_custom", font_key), CUSTOM_FONT_TOKEN.to_string()]
        .iter()
        .map(|key| scope.token(key))
        .find(StyleValue::is_truthy)
        .map(|value| value.to_string())
}
