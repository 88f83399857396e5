//! Theme configuration: the flat token map every resolution reads from.
//!
//! A theme is a mapping from token name to value. Names follow the
//! `{family}_{property}` convention (`heading1_fontSize`, `button_radius`,
//! `primary_color`), and the resolvers in this crate rely on it.
//!
//! # Construction Methods
//!
//! ## Programmatic (Builder API)
//!
//! ```rust
//! use storefront_theme::ThemeConfig;
//!
//! let theme = ThemeConfig::new()
//!     .add("primary_color", "209 100% 50%")
//!     .add("heading_font", "'Georgia', serif")
//!     // A token may reference another token by name
//!     .add("heading3_font", "heading_font")
//!     .add("button_radius", 8.0);
//! ```
//!
//! ## From YAML or JSON
//!
//! ```rust
//! use storefront_theme::ThemeConfig;
//!
//! let theme = ThemeConfig::from_yaml(r#"
//! primary_color: "209 100% 50%"
//! heading2:
//!   fontSize: 40px
//!   lineHeight: tight
//! "#).unwrap();
//!
//! assert!(theme.contains("heading2_fontSize"));
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ThemeError, TokenValidationError};
use crate::style::StyleValue;

use super::parser::{parse_tokens, ThemeFormat};
use super::scope::{ThemeScope, MAX_REFERENCE_DEPTH};

/// A named collection of theme tokens.
///
/// The same type serves as the base theme and as an applied override set;
/// see [`ThemeScope`] for how the two are layered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeConfig {
    /// Theme name (optional, typically derived from filename).
    name: Option<String>,
    /// Source file path (for refresh support).
    source_path: Option<PathBuf>,
    /// Token name to stored value.
    tokens: BTreeMap<String, StyleValue>,
}

impl ThemeConfig {
    /// Creates an empty, unnamed theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the name on this theme, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Creates a theme from YAML content.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if parsing fails or a token value is not a scalar.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        Ok(Self::from_tokens(parse_tokens(yaml, ThemeFormat::Yaml, None)?))
    }

    /// Creates a theme from JSON content.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if parsing fails or a token value is not a scalar.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(Self::from_tokens(parse_tokens(json, ThemeFormat::Json, None)?))
    }

    /// Creates a theme from an already flattened token map.
    pub fn from_tokens(tokens: BTreeMap<String, StyleValue>) -> Self {
        Self {
            tokens,
            ..Self::default()
        }
    }

    /// Loads a theme from a `.yaml`, `.yml` or `.json` file.
    ///
    /// The theme name is derived from the filename (without extension).
    /// The source path is stored for [`refresh`](ThemeConfig::refresh) support.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the file cannot be read or parsed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let theme = ThemeConfig::from_file("./themes/boutique.yaml")?;
    /// assert_eq!(theme.name(), Some("boutique"));
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let tokens = read_tokens(path)?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());

        tracing::debug!(path = %path.display(), tokens = tokens.len(), "loaded theme file");
        Ok(Self {
            name,
            source_path: Some(path.to_path_buf()),
            tokens,
        })
    }

    /// Returns the theme name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the source file path, if this theme was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Reloads the tokens from the source file.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the theme was not loaded from a file, or
    /// if the file cannot be read or parsed. The current tokens are kept on
    /// error.
    pub fn refresh(&mut self) -> Result<(), ThemeError> {
        let path = self.source_path.as_ref().ok_or_else(|| ThemeError::Load {
            message: "cannot refresh: theme has no source file".to_string(),
        })?;

        self.tokens = read_tokens(path)?;
        Ok(())
    }

    /// Adds a token, returning an updated theme for chaining.
    ///
    /// If a token with the same name exists, it is replaced.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a token in place.
    pub fn insert<V: Into<StyleValue>>(&mut self, name: &str, value: V) {
        self.tokens.insert(name.to_string(), value.into());
    }

    /// Returns the stored (unresolved) value of a token.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.tokens.get(name)
    }

    /// Returns true if the theme defines this token.
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// Iterates over tokens in name order.
    pub fn tokens(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens are defined.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Merges another theme into this one. Tokens from `other` win.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront_theme::ThemeConfig;
    ///
    /// let base = ThemeConfig::new().add("text_color", "0 0% 9%");
    /// let brand = ThemeConfig::new().add("text_color", "220 30% 20%");
    ///
    /// let merged = base.merge(brand);
    /// assert_eq!(merged.get("text_color").unwrap().to_string(), "220 30% 20%");
    /// ```
    pub fn merge(mut self, other: ThemeConfig) -> Self {
        self.tokens.extend(other.tokens);
        self
    }

    /// Returns a resolution scope over this theme with no applied override.
    pub fn scope(&self) -> ThemeScope<'_> {
        ThemeScope::new(self)
    }

    /// Validates that every token reference chain resolves.
    ///
    /// Resolution never fails at render time (cycles and overlong chains
    /// degrade to literals), so this is for early detection when a theme is
    /// saved or loaded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront_theme::{ThemeConfig, TokenValidationError};
    ///
    /// let valid = ThemeConfig::new()
    ///     .add("heading_font", "serif")
    ///     .add("heading1_font", "heading_font");
    /// assert!(valid.validate().is_ok());
    ///
    /// let cycle = ThemeConfig::new().add("a", "b").add("b", "a");
    /// assert!(matches!(
    ///     cycle.validate(),
    ///     Err(TokenValidationError::CycleDetected { .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), TokenValidationError> {
        for name in self.tokens.keys() {
            self.validate_chain(name)?;
        }
        Ok(())
    }

    /// Validates a single chain starting from `name`.
    fn validate_chain(&self, name: &str) -> Result<(), TokenValidationError> {
        let mut path = vec![name.to_string()];
        let mut current = &self.tokens[name];

        while let Some(next) = current.as_str().filter(|n| self.tokens.contains_key(*n)) {
            let seen = path.iter().any(|p| p == next);
            path.push(next.to_string());

            if seen {
                return Err(TokenValidationError::CycleDetected { path });
            }
            if path.len() > MAX_REFERENCE_DEPTH {
                return Err(TokenValidationError::DepthExceeded {
                    path,
                    limit: MAX_REFERENCE_DEPTH,
                });
            }
            current = &self.tokens[next];
        }
        Ok(())
    }
}

fn read_tokens(path: &Path) -> Result<BTreeMap<String, StyleValue>, ThemeError> {
    let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Load {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;
    parse_tokens(&content, ThemeFormat::from_path(path), Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_new_is_empty() {
        let theme = ThemeConfig::new();
        assert!(theme.is_empty());
        assert_eq!(theme.len(), 0);
        assert_eq!(theme.name(), None);
        assert_eq!(theme.source_path(), None);
    }

    #[test]
    fn test_theme_named() {
        let theme = ThemeConfig::named("boutique");
        assert_eq!(theme.name(), Some("boutique"));
        assert!(theme.is_empty());
    }

    #[test]
    fn test_theme_add_and_get() {
        let theme = ThemeConfig::new()
            .add("primary_color", "209 100% 50%")
            .add("button_radius", 8.0);

        assert_eq!(theme.len(), 2);
        assert_eq!(
            theme.get("primary_color"),
            Some(&StyleValue::literal("209 100% 50%"))
        );
        assert_eq!(theme.get("button_radius"), Some(&StyleValue::Number(8.0)));
        assert_eq!(theme.get("missing"), None);
    }

    #[test]
    fn test_theme_add_replaces() {
        let theme = ThemeConfig::new()
            .add("body_font", "serif")
            .add("body_font", "sans-serif");
        assert_eq!(theme.len(), 1);
        assert_eq!(theme.get("body_font").unwrap().to_string(), "sans-serif");
    }

    #[test]
    fn test_theme_from_yaml_nested() {
        let theme = ThemeConfig::from_yaml(
            r#"
            paragraph:
                fontSize: 18px
                lineHeight: loose
            "#,
        )
        .unwrap();
        assert_eq!(theme.len(), 2);
        assert!(theme.contains("paragraph_lineHeight"));
    }

    #[test]
    fn test_theme_from_yaml_invalid() {
        assert!(ThemeConfig::from_yaml("not valid yaml: [").is_err());
    }

    #[test]
    fn test_theme_from_json() {
        let theme = ThemeConfig::from_json(r#"{"accent_font": "monospace"}"#).unwrap();
        assert!(theme.contains("accent_font"));
    }

    #[test]
    fn test_theme_from_file() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let theme_path = temp_dir.path().join("boutique.yaml");
        fs::write(
            &theme_path,
            r#"
            primary_color: "340 80% 45%"
            body_font: "'Lato', sans-serif"
            "#,
        )
        .unwrap();

        let theme = ThemeConfig::from_file(&theme_path).unwrap();
        assert_eq!(theme.name(), Some("boutique"));
        assert_eq!(theme.source_path(), Some(theme_path.as_path()));
        assert_eq!(theme.len(), 2);
    }

    #[test]
    fn test_theme_from_json_file() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let theme_path = temp_dir.path().join("mono.json");
        fs::write(&theme_path, r#"{"body_font": "monospace", "button": {"radius": 0}}"#).unwrap();

        let theme = ThemeConfig::from_file(&theme_path).unwrap();
        assert_eq!(theme.name(), Some("mono"));
        assert_eq!(theme.get("button_radius"), Some(&StyleValue::Number(0.0)));
    }

    #[test]
    fn test_theme_from_file_not_found() {
        let result = ThemeConfig::from_file("/nonexistent/path/theme.yaml");
        assert!(matches!(result, Err(ThemeError::Load { .. })));
    }

    #[test]
    fn test_theme_refresh() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let theme_path = temp_dir.path().join("live.yaml");
        fs::write(&theme_path, "text_color: \"0 0% 0%\"").unwrap();

        let mut theme = ThemeConfig::from_file(&theme_path).unwrap();
        assert_eq!(theme.len(), 1);

        fs::write(
            &theme_path,
            "text_color: \"0 0% 10%\"\nbackground_color: \"0 0% 100%\"",
        )
        .unwrap();

        theme.refresh().unwrap();
        assert_eq!(theme.len(), 2);
        assert_eq!(theme.get("text_color").unwrap().to_string(), "0 0% 10%");
    }

    #[test]
    fn test_theme_refresh_without_source() {
        let mut theme = ThemeConfig::new();
        assert!(theme.refresh().is_err());
    }

    #[test]
    fn test_theme_merge() {
        let base = ThemeConfig::new()
            .add("keep", "1")
            .add("overwrite", "red");
        let extension = ThemeConfig::new()
            .add("overwrite", "blue")
            .add("new", "2");

        let merged = base.merge(extension);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("overwrite").unwrap().to_string(), "blue");
        assert!(merged.contains("keep"));
    }

    #[test]
    fn test_validate_literal_chain() {
        let theme = ThemeConfig::new()
            .add("heading_font", "'Georgia', serif")
            .add("heading1_font", "heading_font")
            .add("heading2_font", "heading1_font");
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_validate_self_reference() {
        let theme = ThemeConfig::new().add("a", "a");
        assert_eq!(
            theme.validate(),
            Err(TokenValidationError::CycleDetected {
                path: vec!["a".into(), "a".into()]
            })
        );
    }

    #[test]
    fn test_validate_cycle_path() {
        let theme = ThemeConfig::new().add("a", "b").add("b", "a");
        match theme.validate() {
            Err(TokenValidationError::CycleDetected { path }) => {
                assert_eq!(path, vec!["a", "b", "a"]);
            }
            other => panic!("expected cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_depth_exceeded() {
        let theme = ThemeConfig::new()
            .add("t1", "t2")
            .add("t2", "t3")
            .add("t3", "t4")
            .add("t4", "t5")
            .add("t5", "t6")
            .add("t6", "12px");
        assert!(matches!(
            theme.validate(),
            Err(TokenValidationError::DepthExceeded { limit: 5, .. })
        ));
    }

    #[test]
    fn test_validate_chain_at_limit() {
        let theme = ThemeConfig::new()
            .add("t1", "t2")
            .add("t2", "t3")
            .add("t3", "t4")
            .add("t4", "t5")
            .add("t5", "12px");
        assert!(theme.validate().is_ok());
    }
}
