//! # Storefront Theme - Theme Resolution and Style Cascade
//!
//! `storefront-theme` turns a storefront theme (a flat map of design tokens)
//! and a component's stored styles into the final values a renderer applies.
//!
//! The engine is pure and total: every call borrows its theme explicitly,
//! never mutates it, and always produces a usable value. Missing tokens,
//! malformed values and reference cycles degrade to literal fallbacks.
//!
//! ## Core Concepts
//!
//! - [`ThemeConfig`]: named token map, loaded from YAML/JSON or built in code
//! - [`ThemeScope`]: a base theme plus an optional applied override
//! - [`StyleValue`]: tagged style value (`Literal`, `TokenRef`, `Number`, …)
//! - [`Cascade`] / [`resolve_property`]: per-property precedence
//! - [`PropertyRule`] / [`resolve_table`]: declarative per-component tables
//! - [`ResolvedStyleSet`]: the output of one resolution pass
//! - [`ThemeRegistry`]: themes by name from inline sources and directories
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_theme::{resolve_table, PropertyKind, PropertyRule, StyleMap, ThemeConfig};
//!
//! let theme = ThemeConfig::from_yaml(r#"
//! primary_color: "209 100% 50%"
//! button:
//!   backgroundColor: primary_color
//!   radius: 8
//! "#).unwrap();
//!
//! const BUTTON: &[PropertyRule] = &[
//!     PropertyRule::new("backgroundColor")
//!         .theme("button_backgroundColor")
//!         .kind(PropertyKind::Color),
//!     PropertyRule::new("borderRadius")
//!         .theme("button_radius")
//!         .kind(PropertyKind::Length("px")),
//! ];
//!
//! let mut styles = StyleMap::new();
//! styles.insert("borderRadius".into(), "2rem".into());
//!
//! let resolved = resolve_table(&theme.scope(), BUTTON, &styles, &StyleMap::new());
//! assert_eq!(resolved.get("backgroundColor"), Some("hsl(209 100% 50%)"));
//! assert_eq!(resolved.get("borderRadius"), Some("2rem"));
//! ```
//!
//! ## Applied Overrides
//!
//! A preview theme is layered over the base theme for one render without
//! touching either:
//!
//! ```rust
//! use storefront_theme::{resolve_font, ThemeConfig, ThemeScope};
//!
//! let theme = ThemeConfig::new().add("body_font", "'Inter', sans-serif");
//! let preview = ThemeConfig::new().add("body_font", "'Lora', serif");
//!
//! let scope = ThemeScope::new(&theme).with_applied(Some(&preview));
//! assert_eq!(resolve_font(&scope, "body_font"), "'Lora', serif");
//! assert_eq!(resolve_font(&theme.scope(), "body_font"), "'Inter', sans-serif");
//! ```
//!
//! ## Text Styles
//!
//! ```rust
//! use storefront_theme::{text_styles, StyleValue, TextStylePreset, ThemeConfig};
//!
//! let theme = ThemeConfig::new();
//! let h2 = text_styles(&theme.scope(), TextStylePreset::Heading(2));
//! assert_eq!(h2.font_size, StyleValue::from("3rem"));
//! ```

pub mod cascade;
mod error;
pub mod style;
pub mod theme;

// Error types
pub use error::{ThemeError, TokenValidationError};

// Style value exports
pub use style::{
    expand_line_height, is_hsl_triplet, normalize_text_transform, to_css_color, with_unit,
    with_unit_str, HslTriplet, LineHeight, StyleMap, StyleValue, TextCase, DEFAULT_UNIT,
};

// Theme exports
pub use theme::{
    resolve_value, strip_extension, ThemeConfig, ThemeFormat, ThemeRegistry, ThemeScope,
    MAX_REFERENCE_DEPTH, THEME_EXTENSIONS,
};

// Cascade exports
pub use cascade::{
    component_preset, get_component_styles, get_text_styles, resolve_font, resolve_property,
    resolve_table, resolved_font, text_styles, theme_text_styles, Cascade, PropertyKind,
    PropertyRule,
    ResolvedStyleSet, TextStylePreset, TextStyles, UnknownTextStyle, BASE_FONT_TOKENS,
    DEFAULT_FONT_FAMILY,
};
