//! The style precedence cascade.
//!
//! Everything a component needs to turn its stored styles into final
//! values:
//!
//! - [`Cascade`] and [`resolve_property`]: component > preset > theme > literal
//! - [`resolve_font`]: font-family aliases, `custom` fonts, the default family
//! - [`text_styles`]: `heading1`..`heading6` / `paragraph` / `custom` presets
//! - [`component_preset`]: `{family}_{property}` tokens as a preset layer
//! - [`PropertyRule`] tables and [`resolve_table`]: one declarative table per
//!   component family, resolved into a [`ResolvedStyleSet`]
//!
//! Nothing here returns an error. Missing tokens and broken references
//! degrade to the next layer or to the literal fallback.

mod font;
mod preset;
mod property;
mod resolved;
mod table;
mod text_style;

pub use font::{
    is_base_font_token, resolve_font, resolved_font, BASE_FONT_TOKENS, CUSTOM_FONT_TOKEN,
    DEFAULT_FONT_FAMILY,
};
pub use preset::{component_preset, family_prefix, get_component_styles};
pub use property::{resolve_property, Cascade};
pub use resolved::ResolvedStyleSet;
pub use table::{resolve_table, PropertyKind, PropertyRule};
pub use text_style::{
    get_text_styles, text_styles, theme_text_styles, TextStylePreset, TextStyles,
    UnknownTextStyle, CUSTOM_LINE_HEIGHT, TEXT_COLOR_TOKEN,
};
