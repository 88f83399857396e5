//! Color token handling.
//!
//! Color tokens are stored as bare HSL component triplets so that a single
//! token can feed both `hsl(...)` and alpha variants:
//!
//! ```yaml
//! primary_color: "209 100% 50%"
//! overlay_color: "0 0% 0% / 0.4"
//! ```
//!
//! Supported inputs:
//!
//! - HSL triplet: `"209 100% 50%"`, optional `deg` on the hue, optional
//!   `/ alpha` (number or percentage); commas are accepted as separators
//! - Anything else (`#ff0000`, `rgb(...)`, `hsl(...)`, `var(--x)`, named
//!   colors) is already a CSS color and passes through

use super::value::StyleValue;

/// A parsed HSL triplet.
#[derive(Debug, Clone, PartialEq)]
pub struct HslTriplet {
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation percentage (0–100).
    pub saturation: f64,
    /// Lightness percentage (0–100).
    pub lightness: f64,
    /// Alpha as written (`0.4` or `40%`).
    pub alpha: Option<String>,
}

impl HslTriplet {
    /// Parses `"h s% l%"` or `"h s% l% / a"`.
    pub fn parse(s: &str) -> Option<Self> {
        let (components, alpha) = match s.split_once('/') {
            Some((c, a)) => (c, Some(parse_alpha(a.trim())?)),
            None => (s, None),
        };

        let parts: Vec<&str> = components
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 3 {
            return None;
        }

        let hue = parts[0].strip_suffix("deg").unwrap_or(parts[0]);
        let hue: f64 = hue.parse().ok().filter(|h: &f64| h.is_finite())?;
        let saturation = parse_percentage(parts[1])?;
        let lightness = parse_percentage(parts[2])?;

        Some(Self {
            hue,
            saturation,
            lightness,
            alpha,
        })
    }

    /// Formats as a CSS `hsl()` color.
    pub fn to_css(&self) -> String {
        match &self.alpha {
            Some(alpha) => format!(
                "hsl({} {}% {}% / {})",
                self.hue, self.saturation, self.lightness, alpha
            ),
            None => format!("hsl({} {}% {}%)", self.hue, self.saturation, self.lightness),
        }
    }

    /// Returns a copy with lightness shifted by `delta` points, clamped to 0–100.
    ///
    /// Used to derive hover variants when a theme has no explicit hover token.
    pub fn shift_lightness(&self, delta: f64) -> Self {
        Self {
            lightness: (self.lightness + delta).clamp(0.0, 100.0),
            ..self.clone()
        }
    }
}

fn parse_percentage(part: &str) -> Option<f64> {
    let value: f64 = part.strip_suffix('%')?.parse().ok()?;
    (0.0..=100.0).contains(&value).then_some(value)
}

fn parse_alpha(part: &str) -> Option<String> {
    let number = part.strip_suffix('%').unwrap_or(part);
    let value: f64 = number.parse().ok()?;
    value.is_finite().then(|| part.to_string())
}

/// Returns true if `s` is a bare HSL triplet.
pub fn is_hsl_triplet(s: &str) -> bool {
    HslTriplet::parse(s).is_some()
}

/// Converts a color token value into a CSS color.
///
/// HSL triplets are wrapped in `hsl(...)`; every other value is returned
/// unchanged.
///
/// # Example
///
/// ```rust
/// use storefront_theme::{to_css_color, StyleValue};
///
/// assert_eq!(to_css_color(&"209 100% 50%".into()), StyleValue::from("hsl(209 100% 50%)"));
/// assert_eq!(to_css_color(&"#ff0000".into()), StyleValue::from("#ff0000"));
/// ```
pub fn to_css_color(value: &StyleValue) -> StyleValue {
    match value.as_str().and_then(HslTriplet::parse) {
        Some(hsl) => StyleValue::literal(hsl.to_css()),
        None => value.clone(),
    }
}
