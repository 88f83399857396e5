//! The precedence cascade.
//!
//! A property is resolved by walking its layers from highest to lowest
//! priority and keeping the first value that is truthy after reference
//! resolution:
//!
//! 1. the component's own style
//! 2. the active preset (text style or component family)
//! 3. the theme default token
//! 4. a hard-coded literal
//!
//! Each property is resolved on its own, so a component may take `color`
//! from its inline styles and `fontSize` from the theme. Falsy values (`""`,
//! `0`, `false`) at a higher layer fall through to the next one.

use std::fmt;

use crate::style::{StyleMap, StyleValue};
use crate::theme::ThemeScope;

/// Post-resolution step applied to each layer's value.
type Transform<'t> = Box<dyn Fn(StyleValue) -> StyleValue + 't>;

/// Builder for a single property's precedence chain.
///
/// Layers are consulted in the order they are added. Once a layer yields a
/// truthy value the remaining layers are ignored.
///
/// # Example
///
/// ```rust
/// use storefront_theme::{Cascade, StyleValue, ThemeConfig};
///
/// let theme = ThemeConfig::new().add("button_radius", 6.0);
///
/// let radius = Cascade::new(theme.scope())
///     .layer(Some(&StyleValue::from("")))  // falsy, falls through
///     .token("button_radius")
///     .or_literal("4px");
///
/// assert_eq!(radius, StyleValue::Number(6.0));
/// ```
pub struct Cascade<'t> {
    scope: ThemeScope<'t>,
    transform: Option<Transform<'t>>,
    found: Option<StyleValue>,
}

impl<'t> Cascade<'t> {
    /// Starts an empty cascade over `scope`.
    pub fn new(scope: ThemeScope<'t>) -> Self {
        Self {
            scope,
            transform: None,
            found: None,
        }
    }

    /// Applies `f` to every layer's resolved value before the truthiness
    /// check.
    ///
    /// Values that are falsy before the transform still fall through, so a
    /// transform cannot turn an empty string into a winning value.
    pub fn with_transform(mut self, f: impl Fn(StyleValue) -> StyleValue + 't) -> Self {
        self.transform = Some(Box::new(f));
        self
    }

    /// Adds a layer holding a raw value.
    pub fn layer(self, raw: Option<&StyleValue>) -> Self {
        match raw {
            Some(raw) => self.layer_with(|scope| scope.resolve(raw)),
            None => self,
        }
    }

    /// Adds a layer reading `key` from a style map.
    pub fn map(self, styles: &StyleMap, key: &str) -> Self {
        self.layer(styles.get(key))
    }

    /// Adds a layer reading a theme token.
    pub fn token(self, name: &str) -> Self {
        self.layer_with(|scope| scope.token(name))
    }

    /// Adds a layer computed from the scope. Skipped once a value is found.
    pub fn layer_with(mut self, f: impl FnOnce(&ThemeScope<'t>) -> StyleValue) -> Self {
        if self.found.is_none() {
            let value = f(&self.scope);
            if value.is_truthy() {
                let value = match &self.transform {
                    Some(transform) => transform(value),
                    None => value,
                };
                if value.is_truthy() {
                    self.found = Some(value);
                }
            }
        }
        self
    }

    /// Returns true once some layer has produced a value.
    pub fn is_resolved(&self) -> bool {
        self.found.is_some()
    }

    /// Finishes the cascade, yielding [`StyleValue::Unset`] if no layer
    /// produced a value.
    pub fn finish(self) -> StyleValue {
        self.found.unwrap_or_default()
    }

    /// Finishes the cascade with a literal fallback.
    ///
    /// The fallback is reference-resolved and transformed like any other
    /// layer.
    pub fn or_literal(self, fallback: &str) -> StyleValue {
        self.layer_with(|scope| scope.resolve_str(fallback)).finish()
    }
}

impl fmt::Debug for Cascade<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cascade")
            .field("found", &self.found)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

/// Resolves one property through the component, preset and theme-default
/// layers.
///
/// Returns [`StyleValue::Unset`] when no layer has a truthy value; callers
/// apply their own literal default, or use [`Cascade::or_literal`].
///
/// # Example
///
/// ```rust
/// use storefront_theme::{resolve_property, StyleMap, StyleValue, ThemeConfig};
///
/// let styles = |pairs: &[(&str, &str)]| -> StyleMap {
///     pairs.iter().map(|(k, v)| (k.to_string(), StyleValue::from(*v))).collect()
/// };
/// let component = styles(&[("color", "red")]);
/// let preset = styles(&[("color", "blue"), ("fontSize", "20px")]);
/// let defaults = styles(&[("color", "green"), ("fontSize", "16px")]);
/// let theme = ThemeConfig::new();
/// let scope = theme.scope();
///
/// assert_eq!(resolve_property(&scope, "color", &component, &preset, &defaults), StyleValue::from("red"));
/// assert_eq!(resolve_property(&scope, "fontSize", &component, &preset, &defaults), StyleValue::from("20px"));
/// ```
pub fn resolve_property(
    scope: &ThemeScope<'_>,
    property: &str,
    component: &StyleMap,
    preset: &StyleMap,
    theme_default: &StyleMap,
) -> StyleValue {
    Cascade::new(*scope)
        .map(component, property)
        .map(preset, property)
        .map(theme_default, property)
        .finish()
}
