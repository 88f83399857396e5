//! Property tables for every component family.
//!
//! Each table lists the visual properties a component exposes and where
//! each one defaults from. Theme keys follow `{family}_{property}`; literal
//! fallbacks are the last resort when the theme is silent.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use storefront_theme::{PropertyKind, PropertyRule};

use crate::node::ComponentKind;

const PX: PropertyKind = PropertyKind::Length("px");

const CONTAINER: &[PropertyRule] = &[
    PropertyRule::new("backgroundColor").kind(PropertyKind::Color),
    PropertyRule::new("padding").kind(PX),
    PropertyRule::new("margin").kind(PX),
    PropertyRule::new("gap").kind(PX),
    PropertyRule::new("borderRadius").kind(PX),
];

const TEXT: &[PropertyRule] = &[
    PropertyRule::new("fontFamily")
        .theme("body_font")
        .kind(PropertyKind::FontFamily),
    PropertyRule::new("fontSize").fallback("16").kind(PX),
    PropertyRule::new("fontWeight").fallback("normal"),
    PropertyRule::new("lineHeight").kind(PropertyKind::LineHeight),
    PropertyRule::new("textTransform").kind(PropertyKind::TextTransform),
    PropertyRule::new("textAlign"),
    PropertyRule::new("color")
        .theme("text_color")
        .fallback("#000000")
        .kind(PropertyKind::Color),
    PropertyRule::new("margin").kind(PX),
];

const BUTTON: &[PropertyRule] = &[
    PropertyRule::new("fontFamily")
        .theme("body_font")
        .kind(PropertyKind::FontFamily),
    PropertyRule::new("fontSize").fallback("16").kind(PX),
    PropertyRule::new("fontWeight").fallback("600"),
    PropertyRule::new("textTransform").kind(PropertyKind::TextTransform),
    PropertyRule::new("backgroundColor")
        .theme("button_backgroundColor")
        .fallback("#000000")
        .kind(PropertyKind::Color),
    PropertyRule::new("color")
        .preset("textColor")
        .theme("button_textColor")
        .fallback("#ffffff")
        .kind(PropertyKind::Color),
    PropertyRule::new("hoverBackgroundColor")
        .preset("hover_backgroundColor")
        .theme("button_hover_backgroundColor")
        .kind(PropertyKind::Color),
    PropertyRule::new("borderRadius")
        .preset("radius")
        .theme("button_radius")
        .fallback("6")
        .kind(PX),
    PropertyRule::new("borderColor")
        .theme("button_borderColor")
        .kind(PropertyKind::Color),
    PropertyRule::new("borderWidth").kind(PX),
    PropertyRule::new("padding")
        .theme("button_padding")
        .fallback("12px 24px")
        .kind(PX),
];

const IMAGE: &[PropertyRule] = &[
    PropertyRule::new("width").kind(PX),
    PropertyRule::new("height").kind(PX),
    PropertyRule::new("objectFit").fallback("cover"),
    PropertyRule::new("borderRadius")
        .preset("radius")
        .theme("image_radius")
        .kind(PX),
];

const CAROUSEL: &[PropertyRule] = &[
    PropertyRule::new("height").kind(PX),
    PropertyRule::new("gap").fallback("16").kind(PX),
    PropertyRule::new("backgroundColor").kind(PropertyKind::Color),
    PropertyRule::new("indicatorColor")
        .theme("primary_color")
        .fallback("#000000")
        .kind(PropertyKind::Color),
    PropertyRule::new("borderRadius").preset("radius").kind(PX),
];

const CARD: &[PropertyRule] = &[
    PropertyRule::new("backgroundColor")
        .theme("card_backgroundColor")
        .fallback("#ffffff")
        .kind(PropertyKind::Color),
    PropertyRule::new("borderColor")
        .theme("border_color")
        .kind(PropertyKind::Color),
    PropertyRule::new("borderWidth").kind(PX),
    PropertyRule::new("borderRadius")
        .preset("radius")
        .theme("card_radius")
        .fallback("8")
        .kind(PX),
    PropertyRule::new("padding").fallback("16").kind(PX),
    PropertyRule::new("boxShadow").theme("card_shadow"),
];

const PRICE: &[PropertyRule] = &[
    PropertyRule::new("fontFamily")
        .theme("body_font")
        .kind(PropertyKind::FontFamily),
    PropertyRule::new("fontSize").fallback("16").kind(PX),
    PropertyRule::new("fontWeight").fallback("600"),
    PropertyRule::new("lineHeight").kind(PropertyKind::LineHeight),
    PropertyRule::new("color")
        .theme("text_color")
        .fallback("#000000")
        .kind(PropertyKind::Color),
    PropertyRule::new("strikeColor")
        .theme("muted_color")
        .fallback("#888888")
        .kind(PropertyKind::Color),
];

const PANEL: &[PropertyRule] = &[
    PropertyRule::new("fontFamily")
        .theme("body_font")
        .kind(PropertyKind::FontFamily),
    PropertyRule::new("fontSize").fallback("16").kind(PX),
    PropertyRule::new("color")
        .theme("text_color")
        .fallback("#000000")
        .kind(PropertyKind::Color),
    PropertyRule::new("backgroundColor")
        .theme("background_color")
        .kind(PropertyKind::Color),
    PropertyRule::new("padding").fallback("16").kind(PX),
    PropertyRule::new("borderRadius").preset("radius").kind(PX),
];

const FOOTER: &[PropertyRule] = &[
    PropertyRule::new("fontFamily")
        .theme("body_font")
        .kind(PropertyKind::FontFamily),
    PropertyRule::new("fontSize").fallback("14").kind(PX),
    PropertyRule::new("color")
        .preset("textColor")
        .theme("text_color")
        .fallback("#ffffff")
        .kind(PropertyKind::Color),
    PropertyRule::new("backgroundColor")
        .theme("footer_backgroundColor")
        .fallback("#111111")
        .kind(PropertyKind::Color),
    PropertyRule::new("padding").fallback("32").kind(PX),
];

const INPUT: &[PropertyRule] = &[
    PropertyRule::new("fontFamily")
        .theme("body_font")
        .kind(PropertyKind::FontFamily),
    PropertyRule::new("fontSize").fallback("16").kind(PX),
    PropertyRule::new("color")
        .preset("textColor")
        .theme("input_textColor")
        .fallback("#000000")
        .kind(PropertyKind::Color),
    PropertyRule::new("backgroundColor")
        .theme("input_backgroundColor")
        .fallback("#ffffff")
        .kind(PropertyKind::Color),
    PropertyRule::new("borderColor")
        .theme("input_borderColor")
        .fallback("#cccccc")
        .kind(PropertyKind::Color),
    PropertyRule::new("borderWidth").fallback("1").kind(PX),
    PropertyRule::new("borderRadius")
        .preset("radius")
        .theme("input_radius")
        .fallback("4")
        .kind(PX),
    PropertyRule::new("padding").fallback("8").kind(PX),
];

const DIVIDER: &[PropertyRule] = &[
    PropertyRule::new("borderColor")
        .component("color")
        .preset("color")
        .theme("border_color")
        .fallback("#e5e5e5")
        .kind(PropertyKind::Color),
    PropertyRule::new("borderWidth")
        .component("thickness")
        .preset("thickness")
        .fallback("1")
        .kind(PX),
    PropertyRule::new("margin").fallback("16px 0").kind(PX),
];

static TABLES: Lazy<HashMap<ComponentKind, &'static [PropertyRule]>> = Lazy::new(|| {
    HashMap::from([
        (ComponentKind::Container, CONTAINER),
        (ComponentKind::Heading, TEXT),
        (ComponentKind::Text, TEXT),
        (ComponentKind::ProductTitle, TEXT),
        (ComponentKind::Button, BUTTON),
        (ComponentKind::Image, IMAGE),
        (ComponentKind::Carousel, CAROUSEL),
        (ComponentKind::ProductCard, CARD),
        (ComponentKind::Profile, CARD),
        (ComponentKind::ProductPrice, PRICE),
        (ComponentKind::Cart, PANEL),
        (ComponentKind::Footer, FOOTER),
        (ComponentKind::Input, INPUT),
        (ComponentKind::Divider, DIVIDER),
    ])
});

/// The property table for a component kind.
///
/// Unknown kinds use the container table.
pub fn rules_for(kind: ComponentKind) -> &'static [PropertyRule] {
    TABLES.get(&kind).copied().unwrap_or(CONTAINER)
}
