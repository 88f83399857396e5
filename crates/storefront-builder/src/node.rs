//! The page's component tree.
//!
//! Pages arrive as JSON:
//!
//! ```json
//! {
//!   "type": "heading",
//!   "id": "hero-title",
//!   "content": "Summer sale",
//!   "styles": { "textStyle": "heading1", "color": "accent_color" },
//!   "children": []
//! }
//! ```
//!
//! Style values stay raw on the node. They are classified into
//! [`StyleValue`]s against a [`ThemeScope`] when a render pass asks for them,
//! so the same node renders correctly under different themes.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use storefront_theme::{StyleMap, StyleValue, TextStylePreset, ThemeScope};

use crate::error::NodeError;

/// Style key selecting a node's text-style preset.
pub const TEXT_STYLE_KEY: &str = "textStyle";

/// Rendering variant of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Container,
    Heading,
    Text,
    Button,
    Image,
    Carousel,
    ProductCard,
    ProductTitle,
    ProductPrice,
    Cart,
    Footer,
    Profile,
    Input,
    Divider,
    /// Any type this crate does not know. Rendered as a container.
    #[serde(other)]
    Unknown,
}

impl ComponentKind {
    /// Every known kind, excluding [`ComponentKind::Unknown`].
    pub const ALL: [ComponentKind; 14] = [
        ComponentKind::Container,
        ComponentKind::Heading,
        ComponentKind::Text,
        ComponentKind::Button,
        ComponentKind::Image,
        ComponentKind::Carousel,
        ComponentKind::ProductCard,
        ComponentKind::ProductTitle,
        ComponentKind::ProductPrice,
        ComponentKind::Cart,
        ComponentKind::Footer,
        ComponentKind::Profile,
        ComponentKind::Input,
        ComponentKind::Divider,
    ];

    /// The kebab-case type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Container => "container",
            ComponentKind::Heading => "heading",
            ComponentKind::Text => "text",
            ComponentKind::Button => "button",
            ComponentKind::Image => "image",
            ComponentKind::Carousel => "carousel",
            ComponentKind::ProductCard => "product-card",
            ComponentKind::ProductTitle => "product-title",
            ComponentKind::ProductPrice => "product-price",
            ComponentKind::Cart => "cart",
            ComponentKind::Footer => "footer",
            ComponentKind::Profile => "profile",
            ComponentKind::Input => "input",
            ComponentKind::Divider => "divider",
            ComponentKind::Unknown => "unknown",
        }
    }

    /// The theme token family for `{family}_{property}` presets.
    ///
    /// Plain text has none: its tokens are the `paragraph_*` text style, and
    /// a `text_` prefix would capture global tokens such as `text_color`.
    pub fn token_family(&self) -> Option<&'static str> {
        match self {
            ComponentKind::Text | ComponentKind::Unknown => None,
            other => Some(other.as_str()),
        }
    }

    /// Whether the node's content is editable text.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            ComponentKind::Heading
                | ComponentKind::Text
                | ComponentKind::Button
                | ComponentKind::ProductTitle
        )
    }

    /// The text-style preset used when the node does not pick one.
    pub fn default_text_style(&self) -> Option<TextStylePreset> {
        match self {
            ComponentKind::Heading => Some(TextStylePreset::Heading(2)),
            ComponentKind::ProductTitle => Some(TextStylePreset::Heading(4)),
            ComponentKind::Text
            | ComponentKind::Button
            | ComponentKind::ProductPrice
            | ComponentKind::Input
            | ComponentKind::Footer
            | ComponentKind::Cart
            | ComponentKind::Profile => Some(TextStylePreset::Paragraph),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub id: String,
    /// Type-specific payload: text, a URL, or a nested object.
    #[serde(default)]
    pub content: serde_json::Value,
    /// Raw style values, classified per render.
    #[serde(default)]
    pub styles: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentNode>,
}

impl ComponentNode {
    pub fn new(kind: ComponentKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            content: serde_json::Value::Null,
            styles: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets the content, returning the updated node.
    pub fn with_content(mut self, content: impl Into<serde_json::Value>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets one raw style value, returning the updated node.
    pub fn with_style(mut self, property: &str, value: impl Into<serde_json::Value>) -> Self {
        self.styles.insert(property.to_string(), value.into());
        self
    }

    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(child);
        self
    }

    /// Parses a single node (and its subtree) from JSON.
    pub fn from_json(json: &str) -> Result<Self, NodeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a page: a JSON array of root nodes. Ids must be unique across
    /// the whole page.
    pub fn page_from_json(json: &str) -> Result<Vec<Self>, NodeError> {
        let page: Vec<ComponentNode> = serde_json::from_str(json)?;
        check_unique_ids(&page)?;
        Ok(page)
    }

    /// Classifies this node's raw styles against `scope`.
    ///
    /// Strings naming a token become [`StyleValue::TokenRef`]; the
    /// `textStyle` selector is not a visual property and is left out.
    pub fn style_map(&self, scope: &ThemeScope<'_>) -> StyleMap {
        self.styles
            .iter()
            .filter(|(key, _)| key.as_str() != TEXT_STYLE_KEY)
            .map(|(key, raw)| (key.clone(), scope.classify(raw)))
            .filter(|(_, value)| !value.is_unset())
            .collect()
    }

    /// The node's explicit text-style preset, if it names a valid one.
    pub fn text_style(&self) -> Option<TextStylePreset> {
        let name = self.styles.get(TEXT_STYLE_KEY)?.as_str()?;
        let preset = TextStylePreset::parse(name);
        if preset.is_none() {
            tracing::debug!(node = %self.id, text_style = name, "unknown text style, ignoring");
        }
        preset
    }

    /// The text payload: string content, or a `text` field of object content.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            serde_json::Value::String(s) => Some(s.as_str()),
            serde_json::Value::Object(map) => map.get("text").and_then(|v| v.as_str()),
            _ => None,
        }
    }

    /// Depth-first, pre-order traversal of this node and its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Finds a node by id anywhere in this subtree.
    pub fn find(&self, id: &str) -> Option<&ComponentNode> {
        self.walk().find(|node| node.id == id)
    }

    /// Finds a node by id for editing.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut ComponentNode> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Returns the raw style value for `property`, if present.
    pub fn raw_style(&self, property: &str) -> Option<StyleValue> {
        self.styles.get(property).map(StyleValue::from_json)
    }
}

/// Iterator returned by [`ComponentNode::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<&'a ComponentNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a ComponentNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

fn check_unique_ids(page: &[ComponentNode]) -> Result<(), NodeError> {
    let mut seen = HashSet::new();
    for node in page.iter().flat_map(ComponentNode::walk) {
        if !seen.insert(node.id.as_str()) {
            return Err(NodeError::DuplicateId(node.id.clone()));
        }
    }
    Ok(())
}
