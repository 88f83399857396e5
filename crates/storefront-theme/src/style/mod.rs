//! Style values and the per-family value semantics.
//!
//! This module holds the tagged [`StyleValue`] and the pure, total
//! transformations the cascade applies per property family:
//!
//! - [`with_unit`]: bare numbers get a unit suffix
//! - [`expand_line_height`]: `tight`/`normal`/`loose`/`custom` keywords
//! - [`normalize_text_transform`]: text-case keywords
//! - [`to_css_color`]: HSL triplet tokens become `hsl(...)` colors

mod color;
mod line_height;
mod text_case;
mod units;
mod value;

pub use color::{is_hsl_triplet, to_css_color, HslTriplet};
pub use line_height::{expand_line_height, LineHeight};
pub use text_case::{normalize_text_transform, TextCase};
pub use units::{with_unit, with_unit_str, DEFAULT_UNIT};
pub use value::{StyleMap, StyleValue};
