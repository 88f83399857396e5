//! Theme configuration, loading, and token resolution.
//!
//! A theme is a flat map of design tokens. Components never read it
//! directly; they go through a [`ThemeScope`], which layers an optional
//! applied override (preview or alternate theme) over the base theme and
//! resolves token references.
//!
//! ## Token Families
//!
//! Token names follow `{family}_{property}`:
//!
//! ```yaml
//! # Colors are HSL triplets
//! primary_color: "209 100% 50%"
//! text_color: "0 0% 9%"
//!
//! # Base fonts, and per-text-style aliases to them
//! heading_font: "'Playfair Display', serif"
//! body_font: "'Inter', sans-serif"
//! heading1_font: heading_font
//!
//! # Per-text-style tokens
//! heading1:
//!   fontSize: 56px
//!   lineHeight: tight
//!
//! # Per-element tokens
//! button:
//!   backgroundColor: primary_color
//!   radius: 8
//! ```
//!
//! ## See Also
//!
//! - [`crate::style`]: value types and per-family value semantics
//! - [`crate::cascade`]: the precedence cascade built on top of the scope

mod parser;
mod registry;
mod scope;
#[allow(clippy::module_inception)]
mod theme;

pub use parser::ThemeFormat;
pub use registry::{strip_extension, ThemeRegistry, THEME_EXTENSIONS};
pub use scope::{resolve_value, ThemeScope, MAX_REFERENCE_DEPTH};
pub use theme::ThemeConfig;
