//! Resolving a component tree into render-ready output.
//!
//! Every node goes through the same pipeline:
//!
//! 1. classify the node's raw styles against the active scope
//! 2. build its preset layer from the component-family tokens and its
//!    text-style preset
//! 3. run its kind's property table through the cascade
//!
//! The result is a [`RenderedNode`] tree carrying a fresh
//! [`ResolvedStyleSet`] per node. Nothing is cached between passes.

use serde::Serialize;
use storefront_theme::{
    component_preset, text_styles, theme_text_styles, HslTriplet, PropertyKind, PropertyRule,
    ResolvedStyleSet, StyleMap, TextStylePreset, TextStyles, ThemeConfig, ThemeScope,
};

use crate::mode::RenderMode;
use crate::node::{ComponentKind, ComponentNode};
use crate::tables::rules_for;

/// Text shown for empty text nodes in builder mode.
pub const DEFAULT_PLACEHOLDER: &str = "Click to edit";

/// Lightness shift for hover colors the theme does not define.
const HOVER_LIGHTNESS_SHIFT: f64 = -8.0;

const BUTTON_BACKGROUND: PropertyRule = PropertyRule::new("backgroundColor")
    .theme("button_backgroundColor")
    .kind(PropertyKind::Plain);

/// A resolved node, ready for a rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedNode {
    pub id: String,
    pub kind: ComponentKind,
    pub styles: ResolvedStyleSet,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub content: serde_json::Value,
    pub editable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderedNode>,
}

impl RenderedNode {
    /// Inline CSS for this node's styles.
    pub fn css(&self) -> String {
        self.styles.to_css()
    }

    /// Finds a rendered node by id anywhere in this subtree.
    pub fn find(&self, id: &str) -> Option<&RenderedNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// Renders component trees against one theme scope and mode.
///
/// # Example
///
/// ```rust
/// use storefront_builder::{ComponentKind, ComponentNode, PageRenderer, RenderMode};
/// use storefront_theme::ThemeConfig;
///
/// let theme = ThemeConfig::new()
///     .add("primary_color", "209 100% 50%")
///     .add("button_backgroundColor", "primary_color");
///
/// let node = ComponentNode::new(ComponentKind::Button, "cta").with_content("Buy now");
/// let rendered = PageRenderer::new(&theme).render(&node);
///
/// assert_eq!(rendered.styles.get("backgroundColor"), Some("hsl(209 100% 50%)"));
/// assert!(!rendered.editable);
///
/// let editor = PageRenderer::new(&theme).with_mode(RenderMode::Builder);
/// assert!(editor.render(&node).editable);
/// ```
#[derive(Debug, Clone)]
pub struct PageRenderer<'a> {
    scope: ThemeScope<'a>,
    mode: RenderMode,
    placeholder: String,
}

impl<'a> PageRenderer<'a> {
    /// Creates a frontend renderer over `theme`.
    pub fn new(theme: &'a ThemeConfig) -> Self {
        Self {
            scope: ThemeScope::new(theme),
            mode: RenderMode::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Layers an applied theme (preview or alternate) over the base theme.
    pub fn with_applied(mut self, applied: Option<&'a ThemeConfig>) -> Self {
        self.scope = self.scope.with_applied(applied);
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the builder-mode placeholder for empty text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn scope(&self) -> ThemeScope<'a> {
        self.scope
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Renders every root node of a page.
    pub fn render_page(&self, page: &[ComponentNode]) -> Vec<RenderedNode> {
        page.iter().map(|node| self.render(node)).collect()
    }

    /// Renders a node and its subtree.
    pub fn render(&self, node: &ComponentNode) -> RenderedNode {
        if node.kind == ComponentKind::Unknown {
            tracing::warn!(node = %node.id, "unknown component type, rendering as container");
        }
        tracing::trace!(node = %node.id, kind = %node.kind, mode = %self.mode, "rendering node");

        RenderedNode {
            id: node.id.clone(),
            kind: node.kind,
            styles: self.resolve_styles(node),
            content: self.render_content(node),
            editable: self.mode.is_editable(),
            children: node.children.iter().map(|c| self.render(c)).collect(),
        }
    }

    /// Resolves one node's styles without rendering its children.
    pub fn resolve_styles(&self, node: &ComponentNode) -> ResolvedStyleSet {
        let component = node.style_map(&self.scope);
        let preset = self.preset_layer(node, &component);
        let mut styles =
            storefront_theme::resolve_table(&self.scope, rules_for(node.kind), &component, &preset);

        if node.kind == ComponentKind::Button && !styles.contains("hoverBackgroundColor") {
            if let Some(hover) = self.derived_hover(&component, &preset) {
                styles.insert("hoverBackgroundColor", &hover.into());
            }
        }
        styles
    }

    /// The preset layer: component-family tokens plus the text-style preset.
    ///
    /// With an explicit `textStyle`, the fields the theme defines for it win
    /// over the family tokens and its synthesized defaults only fill gaps. A
    /// kind's default text style sits underneath the family tokens.
    fn preset_layer(&self, node: &ComponentNode, component: &StyleMap) -> StyleMap {
        let family = node
            .kind
            .token_family()
            .map(|family| component_preset(&self.scope, family))
            .unwrap_or_default();

        match node.text_style() {
            Some(TextStylePreset::Custom) => {
                let mut layer = family;
                layer.extend(TextStyles::custom(component).to_style_map());
                layer
            }
            Some(explicit) => {
                let mut layer = text_styles(&self.scope, explicit).to_style_map();
                layer.extend(family);
                layer.extend(theme_text_styles(&self.scope, explicit));
                layer
            }
            None => {
                let mut layer = node
                    .kind
                    .default_text_style()
                    .map(|preset| text_styles(&self.scope, preset).to_style_map())
                    .unwrap_or_default();
                layer.extend(family);
                layer
            }
        }
    }

    /// Darkens the button background when the theme has no hover color.
    fn derived_hover(&self, component: &StyleMap, preset: &StyleMap) -> Option<String> {
        let background = BUTTON_BACKGROUND.resolve(&self.scope, component, preset);
        let triplet = HslTriplet::parse(background.as_str()?)?;
        Some(triplet.shift_lightness(HOVER_LIGHTNESS_SHIFT).to_css())
    }

    fn render_content(&self, node: &ComponentNode) -> serde_json::Value {
        if !node.kind.is_text() {
            return node.content.clone();
        }
        let is_empty = node.text().map_or(true, |text| text.trim().is_empty());
        if !is_empty {
            return node.content.clone();
        }

        match (&node.content, self.mode) {
            (serde_json::Value::Object(map), RenderMode::Builder) => {
                let mut map = map.clone();
                map.insert("text".into(), self.placeholder.clone().into());
                serde_json::Value::Object(map)
            }
            (serde_json::Value::Object(map), RenderMode::Frontend) => {
                let mut map = map.clone();
                map.remove("text");
                serde_json::Value::Object(map)
            }
            (_, RenderMode::Builder) => self.placeholder.clone().into(),
            (_, RenderMode::Frontend) => serde_json::Value::Null,
        }
    }
}
