//! Resolved output of a cascade pass.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::style::StyleValue;

/// Final property values for one component, ready to apply.
///
/// Keys are camelCase CSS property names (`fontSize`, `backgroundColor`).
/// A set is built fresh on every render and never mutated by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedStyleSet {
    properties: BTreeMap<String, String>,
}

impl ResolvedStyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a resolved value. Unset values are skipped so the property is
    /// omitted from output.
    pub fn insert(&mut self, property: impl Into<String>, value: &StyleValue) {
        if let Some(rendered) = value.to_css_string() {
            self.properties.insert(property.into(), rendered);
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Copies every property of `other` into this set, `other` winning.
    pub fn extend(&mut self, other: ResolvedStyleSet) {
        self.properties.extend(other.properties);
    }

    /// Renders the set as an inline CSS declaration list.
    ///
    /// ```rust
    /// use storefront_theme::{ResolvedStyleSet, StyleValue};
    ///
    /// let mut set = ResolvedStyleSet::new();
    /// set.insert("fontSize", &"16px".into());
    /// set.insert("backgroundColor", &"hsl(0 0% 100%)".into());
    ///
    /// assert_eq!(set.to_css(), "background-color: hsl(0 0% 100%); font-size: 16px;");
    /// ```
    pub fn to_css(&self) -> String {
        self.properties
            .iter()
            .map(|(property, value)| format!("{}: {};", kebab_case(property), value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> IntoIterator for &'a ResolvedStyleSet {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
