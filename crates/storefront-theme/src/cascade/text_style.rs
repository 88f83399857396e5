//! Named text-style presets (`heading1`..`heading6`, `paragraph`, `custom`).

use std::fmt;
use std::str::FromStr;

use crate::style::{to_css_color, StyleMap, StyleValue};
use crate::theme::{ThemeConfig, ThemeScope};

use super::font::resolve_font;

/// Theme token every preset's color falls back to.
pub const TEXT_COLOR_TOKEN: &str = "text_color";

/// Style key carrying the value used when `lineHeight` is `custom`.
pub const CUSTOM_LINE_HEIGHT: &str = "customLineHeight";

/// A text-style preset selecting a token family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextStylePreset {
    /// `heading1` through `heading6`.
    Heading(u8),
    #[default]
    Paragraph,
    /// Caller-supplied values with no theme defaults.
    Custom,
}

impl TextStylePreset {
    /// Parses a preset name.
    ///
    /// The heading level is a single digit in `1..=6`, so every accepted name
    /// is exactly what [`Display`](fmt::Display) writes back.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "paragraph" => Some(TextStylePreset::Paragraph),
            "custom" => Some(TextStylePreset::Custom),
            other => match other.strip_prefix("heading")?.as_bytes() {
                [digit @ b'1'..=b'6'] => Some(TextStylePreset::Heading(digit - b'0')),
                _ => None,
            },
        }
    }

    /// The token family prefix, `None` for `custom`.
    pub fn token_prefix(&self) -> Option<String> {
        match self {
            TextStylePreset::Heading(level) => Some(format!("heading{}", level)),
            TextStylePreset::Paragraph => Some("paragraph".to_string()),
            TextStylePreset::Custom => None,
        }
    }

    /// The font key this preset reads its family from.
    pub fn font_key(&self) -> String {
        match self.token_prefix() {
            Some(prefix) => format!("{}_font", prefix),
            None => "body_font".to_string(),
        }
    }

    /// Font size used when the theme defines none.
    fn default_font_size(&self) -> String {
        match self {
            TextStylePreset::Heading(level) => format!("{}rem", 3.5 - 0.25 * f64::from(*level)),
            _ => "16px".to_string(),
        }
    }

    fn default_font_weight(&self) -> &'static str {
        match self {
            TextStylePreset::Heading(_) => "bold",
            _ => "normal",
        }
    }

    fn default_line_height(&self) -> &'static str {
        match self {
            TextStylePreset::Heading(level) if *level <= 2 => "tight",
            TextStylePreset::Heading(_) => "normal",
            _ => "1.6",
        }
    }
}

impl fmt::Display for TextStylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextStylePreset::Heading(level) => write!(f, "heading{}", level),
            TextStylePreset::Paragraph => f.write_str("paragraph"),
            TextStylePreset::Custom => f.write_str("custom"),
        }
    }
}

/// Error returned when a preset name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown text style '{0}'")]
pub struct UnknownTextStyle(pub String);

impl FromStr for TextStylePreset {
    type Err = UnknownTextStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextStylePreset::parse(s).ok_or_else(|| UnknownTextStyle(s.to_string()))
    }
}

/// The text properties a preset supplies.
///
/// `line_height` keeps its keyword form (`tight`, `custom`, …);
/// [`expand_line_height`](crate::expand_line_height) runs later, in the
/// property cascade.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyles {
    /// Resolved through the preset's font key.
    pub font_family: StyleValue,
    pub font_size: StyleValue,
    pub font_weight: StyleValue,
    pub line_height: StyleValue,
    pub text_transform: StyleValue,
    pub color: StyleValue,
    /// Value for a `custom` line height.
    pub line_height_custom: StyleValue,
}

impl TextStyles {
    /// Builds styles for the `custom` preset from caller-supplied values.
    ///
    /// Only empty fields are filled, with `16px / normal / 1.6 / none`.
    /// Color and font family are never defaulted.
    pub fn custom(overrides: &StyleMap) -> Self {
        let field = |key: &str, default: &str| match overrides.get(key) {
            Some(value) if value.is_truthy() => value.clone(),
            _ => StyleValue::literal(default),
        };
        Self {
            font_family: overrides.get("fontFamily").cloned().unwrap_or_default(),
            font_size: field("fontSize", "16px"),
            font_weight: field("fontWeight", "normal"),
            line_height: field("lineHeight", "1.6"),
            text_transform: field("textTransform", "none"),
            color: overrides.get("color").cloned().unwrap_or_default(),
            line_height_custom: overrides
                .get(CUSTOM_LINE_HEIGHT)
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Converts to a style map keyed by the camelCase property names, for use
    /// as the preset layer of a cascade. Unset fields are left out.
    pub fn to_style_map(&self) -> StyleMap {
        [
            ("fontFamily", &self.font_family),
            ("fontSize", &self.font_size),
            ("fontWeight", &self.font_weight),
            ("lineHeight", &self.line_height),
            ("textTransform", &self.text_transform),
            ("color", &self.color),
            (CUSTOM_LINE_HEIGHT, &self.line_height_custom),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_unset())
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
    }
}

/// Looks up the text styles of a preset.
///
/// Each field reads `{prefix}_{property}` from the scope (applied override
/// first) and falls back to the preset's synthesized default. Color reads
/// `{prefix}_color`, then `text_color`, and is wrapped as a CSS color. The
/// font family goes through [`resolve_font`] with `{prefix}_font`.
///
/// # Example
///
/// ```rust
/// use storefront_theme::{text_styles, StyleValue, TextStylePreset, ThemeConfig};
///
/// let theme = ThemeConfig::new().add("heading1_fontSize", "64px");
///
/// let h1 = text_styles(&theme.scope(), TextStylePreset::Heading(1));
/// assert_eq!(h1.font_size, StyleValue::from("64px"));
///
/// let h2 = text_styles(&theme.scope(), TextStylePreset::Heading(2));
/// assert_eq!(h2.font_size, StyleValue::from("3rem"));
/// assert_eq!(h2.line_height, StyleValue::from("tight"));
/// ```
pub fn text_styles(scope: &ThemeScope<'_>, preset: TextStylePreset) -> TextStyles {
    let Some(prefix) = preset.token_prefix() else {
        return TextStyles::custom(&StyleMap::new());
    };

    let field = |property: &str, default: &str| {
        let value = scope.token(&format!("{}_{}", prefix, property));
        if value.is_truthy() {
            value
        } else {
            StyleValue::literal(default)
        }
    };

    let color = [format!("{}_color", prefix), TEXT_COLOR_TOKEN.to_string()]
        .iter()
        .map(|key| scope.token(key))
        .find(StyleValue::is_truthy)
        .map(|value| to_css_color(&value))
        .unwrap_or_default();

    TextStyles {
        font_family: StyleValue::Literal(resolve_font(scope, &preset.font_key())),
        font_size: field("fontSize", &preset.default_font_size()),
        font_weight: field("fontWeight", preset.default_font_weight()),
        line_height: field("lineHeight", preset.default_line_height()),
        text_transform: field("textTransform", "none"),
        color,
        line_height_custom: scope.token(&format!("{}_{}", prefix, CUSTOM_LINE_HEIGHT)),
    }
}

/// The fields of a preset that the theme itself defines.
///
/// Unlike [`text_styles`] there are no synthesized defaults and no
/// `text_color` fallback, so the result can be laid over another preset
/// without clobbering it. Keys are the camelCase property names.
pub fn theme_text_styles(scope: &ThemeScope<'_>, preset: TextStylePreset) -> StyleMap {
    let Some(prefix) = preset.token_prefix() else {
        return StyleMap::new();
    };

    let mut styles: StyleMap = [
        "fontSize",
        "fontWeight",
        "lineHeight",
        "textTransform",
        CUSTOM_LINE_HEIGHT,
    ]
    .into_iter()
    .map(|property| {
        let value = scope.token(&format!("{}_{}", prefix, property));
        (property.to_string(), value)
    })
    .filter(|(_, value)| value.is_truthy())
    .collect();

    let color = scope.token(&format!("{}_color", prefix));
    if color.is_truthy() {
        styles.insert("color".to_string(), to_css_color(&color));
    }
    if scope.token(&preset.font_key()).is_truthy() {
        let family = resolve_font(scope, &preset.font_key());
        styles.insert("fontFamily".to_string(), StyleValue::Literal(family));
    }
    styles
}

/// Free-function form of [`text_styles`] taking the theme layers directly.
pub fn get_text_styles(
    theme: &ThemeConfig,
    preset: TextStylePreset,
    applied: Option<&ThemeConfig>,
) -> TextStyles {
    text_styles(&ThemeScope::new(theme).with_applied(applied), preset)
}
