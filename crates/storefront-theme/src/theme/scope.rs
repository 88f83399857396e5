//! Resolution scope: a base theme plus an optional applied override.
//!
//! Every resolver in this crate takes its theme explicitly through a
//! [`ThemeScope`]; there is no ambient theme. The scope borrows both
//! configurations and never mutates them.
//!
//! ## Lookup Order
//!
//! A token lookup checks the applied override first and falls back to the
//! base theme. An override entry that is falsy (empty string, `0`, unset)
//! does not shadow the base value.
//!
//! ## Reference Resolution
//!
//! A string that exactly names a token is replaced by that token's value,
//! following chains (`heading3_font` → `heading_font` → `'Georgia', serif`).
//! Chains are followed for at most [`MAX_REFERENCE_DEPTH`] lookups. A cycle or
//! an overlong chain resolves to the original string instead of failing.

use crate::style::StyleValue;

use super::theme::ThemeConfig;

/// Maximum number of token lookups a single resolution performs.
pub const MAX_REFERENCE_DEPTH: usize = 5;

/// Borrowed view over a base theme and an optional applied override.
///
/// # Example
///
/// ```rust
/// use storefront_theme::{StyleValue, ThemeConfig, ThemeScope};
///
/// let theme = ThemeConfig::new()
///     .add("primary_color", "209 100% 50%")
///     .add("button_backgroundColor", "primary_color");
/// let preview = ThemeConfig::new().add("primary_color", "0 80% 50%");
///
/// let scope = ThemeScope::new(&theme);
/// assert_eq!(scope.token("button_backgroundColor"), StyleValue::from("209 100% 50%"));
///
/// let scope = scope.with_applied(Some(&preview));
/// assert_eq!(scope.token("button_backgroundColor"), StyleValue::from("0 80% 50%"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ThemeScope<'a> {
    theme: &'a ThemeConfig,
    applied: Option<&'a ThemeConfig>,
}

impl<'a> ThemeScope<'a> {
    /// Creates a scope over `theme` with no applied override.
    pub fn new(theme: &'a ThemeConfig) -> Self {
        Self {
            theme,
            applied: None,
        }
    }

    /// Sets the applied override, returning the updated scope.
    pub fn with_applied(mut self, applied: Option<&'a ThemeConfig>) -> Self {
        self.applied = applied;
        self
    }

    /// Returns the base theme.
    pub fn theme(&self) -> &'a ThemeConfig {
        self.theme
    }

    /// Returns the applied override, if any.
    pub fn applied(&self) -> Option<&'a ThemeConfig> {
        self.applied
    }

    /// Returns the stored (unresolved) value of a token, override first.
    ///
    /// A falsy override only yields to the base theme when the base theme
    /// defines the token too.
    pub fn lookup(&self, name: &str) -> Option<&'a StyleValue> {
        let applied = self.applied.and_then(|applied| applied.get(name));
        match (applied, self.theme.get(name)) {
            (Some(value), Some(base)) if !value.is_truthy() => Some(base),
            (Some(value), _) => Some(value),
            (None, base) => base,
        }
    }

    /// Returns true if either layer defines this token.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Iterates over the names of every token visible in this scope.
    ///
    /// Names defined in both layers are yielded once.
    pub fn token_names(&self) -> impl Iterator<Item = &'a str> + 'a {
        let theme = self.theme;
        let applied = self
            .applied
            .into_iter()
            .flat_map(|a| a.tokens().map(|(name, _)| name))
            .filter(move |name| !theme.contains(name));
        theme.tokens().map(|(name, _)| name).chain(applied)
    }

    /// Classifies a raw ingested value into its tagged form.
    ///
    /// Strings that exactly name a token in this scope become
    /// [`StyleValue::TokenRef`]; every other value keeps its literal type.
    pub fn classify(&self, raw: &serde_json::Value) -> StyleValue {
        match StyleValue::from_json(raw) {
            StyleValue::Literal(s) if self.contains(&s) => StyleValue::TokenRef(s),
            other => other,
        }
    }

    /// Resolves a style value to its final literal form.
    ///
    /// - Non-string values are returned unchanged.
    /// - A string naming a token is replaced by the token's resolved value.
    /// - Any other string is returned unchanged.
    ///
    /// This never fails: unknown tokens, cycles and chains longer than
    /// [`MAX_REFERENCE_DEPTH`] all resolve to the original string as a literal.
    pub fn resolve(&self, value: &StyleValue) -> StyleValue {
        match value {
            StyleValue::Literal(name) | StyleValue::TokenRef(name) => self
                .follow(name)
                .unwrap_or_else(|| StyleValue::Literal(name.clone())),
            other => other.clone(),
        }
    }

    /// Resolves a raw string.
    pub fn resolve_str(&self, raw: &str) -> StyleValue {
        self.follow(raw)
            .unwrap_or_else(|| StyleValue::literal(raw))
    }

    /// Returns the resolved value of a token, or [`StyleValue::Unset`] if the
    /// scope does not define it.
    pub fn token(&self, name: &str) -> StyleValue {
        match self.lookup(name) {
            Some(value) => self.resolve(value),
            None => StyleValue::Unset,
        }
    }

    /// Follows a reference chain starting at `start`.
    ///
    /// Returns `None` when `start` is not a token, or when the chain cycles or
    /// exceeds the depth cap.
    fn follow(&self, start: &str) -> Option<StyleValue> {
        let mut current = start;
        let mut visited: Vec<&str> = Vec::with_capacity(MAX_REFERENCE_DEPTH);

        for _ in 0..MAX_REFERENCE_DEPTH {
            if visited.contains(&current) {
                tracing::debug!(token = start, chain = ?visited, "token reference cycle, using literal");
                return None;
            }
            visited.push(current);

            let value = self.lookup(current)?;
            match value.as_str() {
                Some(next) if self.contains(next) => current = next,
                Some(literal) => return Some(StyleValue::Literal(literal.to_string())),
                None => return Some(value.clone()),
            }
        }

        tracing::debug!(
            token = start,
            limit = MAX_REFERENCE_DEPTH,
            "token reference chain too deep, using literal"
        );
        None
    }
}

/// Resolves `raw` against `theme` with an optional applied override.
///
/// Free-function form of [`ThemeScope::resolve`].
///
/// # Example
///
/// ```rust
/// use storefront_theme::{resolve_value, StyleValue, ThemeConfig};
///
/// let theme = ThemeConfig::new().add("a", "b").add("b", "a");
///
/// // Cycles terminate and yield a literal.
/// let value = resolve_value(&"a".into(), &theme, None);
/// assert!(matches!(value, StyleValue::Literal(_)));
///
/// // Numbers pass through.
/// assert_eq!(resolve_value(&StyleValue::Number(4.0), &theme, None), StyleValue::Number(4.0));
/// ```
pub fn resolve_value(
    raw: &StyleValue,
    theme: &ThemeConfig,
    applied: Option<&ThemeConfig>,
) -> StyleValue {
    ThemeScope::new(theme).with_applied(applied).resolve(raw)
}
