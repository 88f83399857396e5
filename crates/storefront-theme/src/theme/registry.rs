//! Theme registry for named theme lookup.
//!
//! This module provides [`ThemeRegistry`], which resolves theme names from
//! multiple sources: themes registered in memory and theme files found in
//! directories.
//!
//! # Theme Resolution
//!
//! Themes are resolved by name using these rules:
//!
//! 1. **Inline themes** (added via [`ThemeRegistry::add_inline`] or
//!    [`ThemeRegistry::add_theme`]) have highest priority
//! 2. **File themes** are searched across registered directories
//! 3. Names can be given with or without extension: both `"boutique"` and
//!    `"boutique.yaml"` resolve
//!
//! # Supported Extensions
//!
//! | Priority | Extension | Format |
//! |----------|-----------|--------|
//! | 1 (highest) | `.yaml` | YAML |
//! | 2 | `.yml` | YAML |
//! | 3 (lowest) | `.json` | JSON |
//!
//! If one directory holds several files with the same base name, the
//! higher-priority extension wins.
//!
//! # Collision Handling
//!
//! The same base name in two different directories is an error
//! ([`ThemeError::Collision`]) raised when the second directory is added.
//!
//! # Hot Reloading
//!
//! File themes are re-read and re-parsed on every [`get`](ThemeRegistry::get),
//! so edits made in a theme editor are picked up without a restart.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_theme::ThemeRegistry;
//!
//! let mut registry = ThemeRegistry::new();
//! registry.add_dir("./themes")?;
//!
//! let theme = registry.get("boutique")?;
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::error::ThemeError;

use super::theme::ThemeConfig;

/// Recognized theme file extensions in priority order.
pub const THEME_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// A theme file discovered in a registered directory.
#[derive(Debug, Clone)]
struct FileEntry {
    path: PathBuf,
    /// Index into [`THEME_EXTENSIONS`].
    priority: usize,
}

/// Registry of named themes from memory and the filesystem.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    /// Inline themes (highest priority).
    inline: HashMap<String, ThemeConfig>,
    /// Registered directories, in registration order.
    dirs: Vec<PathBuf>,
    /// Base name to discovered file.
    files: BTreeMap<String, FileEntry>,
}

impl ThemeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an inline theme from YAML content.
    ///
    /// Inline themes shadow any file-based theme with the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML content cannot be parsed.
    pub fn add_inline(&mut self, name: impl Into<String>, yaml: &str) -> Result<(), ThemeError> {
        let name = name.into();
        let theme = ThemeConfig::from_yaml(yaml)?.with_name(name.clone());
        self.inline.insert(name, theme);
        Ok(())
    }

    /// Adds a pre-built theme directly.
    pub fn add_theme(&mut self, name: impl Into<String>, theme: ThemeConfig) {
        let name = name.into();
        let theme = theme.with_name(name.clone());
        self.inline.insert(name, theme);
    }

    /// Adds a directory to search for theme files.
    ///
    /// Files are registered by their path relative to the directory, without
    /// extension: `./themes/seasonal/winter.yaml` resolves as `"seasonal/winter"`.
    ///
    /// The directory is registered whole or not at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a readable directory, or if it
    /// provides a theme name already provided by another directory.
    pub fn add_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ThemeError> {
        let root = path.as_ref().to_path_buf();
        let staged = scan_dir(&root, &self.files)?;
        self.files.extend(staged);

        tracing::debug!(dir = %root.display(), themes = self.files.len(), "registered theme directory");
        self.dirs.push(root);
        Ok(())
    }

    /// Gets a theme by name.
    ///
    /// Looks up inline themes first, then file-based themes. File themes are
    /// read from disk on each call.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotFound`] for unknown names, or a load/parse
    /// error if the file cannot be read.
    pub fn get(&self, name: &str) -> Result<ThemeConfig, ThemeError> {
        if let Some(theme) = self.inline.get(name) {
            return Ok(theme.clone());
        }

        let base_name = strip_extension(name);
        let entry = self.files.get(base_name).ok_or_else(|| ThemeError::NotFound {
            name: name.to_string(),
        })?;

        Ok(ThemeConfig::from_file(&entry.path)?.with_name(base_name))
    }

    /// Checks if a theme exists in the registry.
    pub fn contains(&self, name: &str) -> bool {
        self.inline.contains_key(name) || self.files.contains_key(strip_extension(name))
    }

    /// Returns all registered theme names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .inline
            .keys()
            .map(|s| s.as_str())
            .chain(
                self.files
                    .keys()
                    .map(|s| s.as_str())
                    .filter(|name| !self.inline.contains_key(*name)),
            )
            .collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of distinct theme names.
    pub fn len(&self) -> usize {
        self.names().len()
    }

    /// Returns true if no themes are registered.
    pub fn is_empty(&self) -> bool {
        self.inline.is_empty() && self.files.is_empty()
    }

    /// Clears all registered themes and directories.
    pub fn clear(&mut self) {
        self.inline.clear();
        self.dirs.clear();
        self.files.clear();
    }

    /// Re-scans all registered directories.
    ///
    /// Picks up theme files added or removed since registration.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory can no longer be read, or if two
    /// directories now provide the same name. The registry is left as it
    /// was before the call.
    pub fn refresh(&mut self) -> Result<(), ThemeError> {
        let mut files = BTreeMap::new();
        for root in &self.dirs {
            let staged = scan_dir(root, &files)?;
            files.extend(staged);
        }
        self.files = files;
        Ok(())
    }
}

/// Strips a recognized theme extension from a name.
pub fn strip_extension(name: &str) -> &str {
    THEME_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or(name)
}

fn extension_priority(file_name: &str) -> Option<usize> {
    THEME_EXTENSIONS
        .iter()
        .position(|ext| file_name.ends_with(ext))
}

/// Scans one registered directory into entries ready to merge into `files`.
///
/// Within the directory the higher-priority extension wins; a name already
/// present in `files` is a collision.
fn scan_dir(
    root: &Path,
    files: &BTreeMap<String, FileEntry>,
) -> Result<BTreeMap<String, FileEntry>, ThemeError> {
    if !root.is_dir() {
        return Err(ThemeError::Load {
            message: format!("theme directory not found: {}", root.display()),
        });
    }

    let mut found = Vec::new();
    collect_files(root, root, &mut found)?;
    found.sort();

    let mut staged: BTreeMap<String, FileEntry> = BTreeMap::new();
    for (name, priority, path) in found {
        if let Some(existing) = files.get(&name) {
            return Err(ThemeError::Collision {
                name,
                paths: vec![existing.path.clone(), path],
            });
        }
        let shadowed = staged
            .get(&name)
            .is_some_and(|current| current.priority <= priority);
        if !shadowed {
            staged.insert(name, FileEntry { path, priority });
        }
    }
    Ok(staged)
}

/// Recursively collects `(name, priority, path)` for theme files under `dir`.
fn collect_files(
    root: &Path,
    dir: &Path,
    found: &mut Vec<(String, usize, PathBuf)>,
) -> Result<(), ThemeError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ThemeError::Load {
        message: format!("failed to read {}: {}", dir.display(), e),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ThemeError::Load {
            message: format!("failed to read entry in {}: {}", dir.display(), e),
        })?;
        let path = entry.path();

        if path.is_dir() {
            collect_files(root, &path, found)?;
            continue;
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if let Some(priority) = extension_priority(&relative) {
            let name = strip_extension(&relative).to_string();
            found.push((name, priority, path));
        }
    }
    Ok(())
}
