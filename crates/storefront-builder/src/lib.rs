//! # Storefront Builder - Component Rendering and Shop Glue
//!
//! `storefront-builder` consumes [`storefront_theme`] to render a page's
//! component tree, and carries the small pieces of shop logic the
//! components need.
//!
//! ## Core Concepts
//!
//! - [`ComponentNode`]: one node of a page, deserialized from the page JSON
//! - [`PageRenderer`]: resolves a tree into [`RenderedNode`]s for a theme,
//!   an optional applied theme, and a [`RenderMode`]
//! - [`Cart`] / [`CartStore`]: quantity math and the persistence seam
//! - [`OrderSummary`] / [`Discount`]: totals and discount codes
//! - [`Product`] / [`CatalogSource`]: attribute combinations and stock
//! - [`Paginator`] / [`Carousel`]: list and slider state
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_builder::{ComponentNode, PageRenderer, RenderMode};
//! use storefront_theme::ThemeConfig;
//!
//! let theme = ThemeConfig::from_yaml(r#"
//! primary_color: "209 100% 50%"
//! heading_font: "'Georgia', serif"
//! heading1_font: heading_font
//! "#).unwrap();
//!
//! let page = ComponentNode::page_from_json(r#"[
//!     {"type": "heading", "id": "title", "content": "New arrivals",
//!      "styles": {"textStyle": "heading1", "color": "primary_color"}}
//! ]"#).unwrap();
//!
//! let rendered = PageRenderer::new(&theme)
//!     .with_mode(RenderMode::Frontend)
//!     .render_page(&page);
//!
//! let title = &rendered[0];
//! assert_eq!(title.styles.get("fontFamily"), Some("'Georgia', serif"));
//! assert_eq!(title.styles.get("fontSize"), Some("3.25rem"));
//! assert_eq!(title.styles.get("color"), Some("hsl(209 100% 50%)"));
//! ```

mod cart;
mod catalog;
mod error;
mod mode;
mod money;
mod node;
mod order;
mod pagination;
mod render;
pub mod tables;

pub use cart::{Cart, CartItem, CartStore, InMemoryCartStore};
pub use catalog::{Attribute, CatalogSource, Combination, InMemoryCatalog, Product, Selection};
pub use error::{CartError, DiscountError, NodeError};
pub use mode::RenderMode;
pub use money::round_cents;
pub use node::{ComponentKind, ComponentNode, Walk, TEXT_STYLE_KEY};
pub use order::{find_discount, Discount, DiscountKind, OrderSummary};
pub use pagination::{Carousel, Paginator};
pub use render::{PageRenderer, RenderedNode, DEFAULT_PLACEHOLDER};
