//! Theme document parsing.
//!
//! Theme files are YAML or JSON mappings of token name to scalar value.
//! Nested mappings are a convenience for grouping a token family and are
//! flattened with `_`, so these two documents are equivalent:
//!
//! ```yaml
//! heading1_fontSize: 48px
//! heading1_fontWeight: 700
//! ```
//!
//! ```yaml
//! heading1:
//!   fontSize: 48px
//!   fontWeight: 700
//! ```
//!
//! `null` entries are skipped. Sequences are rejected.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ThemeError;
use crate::style::StyleValue;

/// Serialization format of a theme document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFormat {
    Yaml,
    Json,
}

impl ThemeFormat {
    /// Picks the format from a file extension. Unknown extensions read as YAML,
    /// which is a superset of JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ThemeFormat::Json,
            _ => ThemeFormat::Yaml,
        }
    }
}

/// Parses theme tokens from a document in the given format.
pub(crate) fn parse_tokens(
    content: &str,
    format: ThemeFormat,
    path: Option<&Path>,
) -> Result<BTreeMap<String, StyleValue>, ThemeError> {
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let root: serde_json::Value = match format {
        ThemeFormat::Yaml => serde_yaml::from_str(content).map_err(|e| ThemeError::Parse {
            path: path.map(Path::to_path_buf),
            message: e.to_string(),
        })?,
        ThemeFormat::Json => serde_json::from_str(content).map_err(|e| ThemeError::Parse {
            path: path.map(Path::to_path_buf),
            message: e.to_string(),
        })?,
    };

    let mut tokens = BTreeMap::new();
    match root {
        serde_json::Value::Null => {}
        serde_json::Value::Object(map) => {
            for (key, value) in map {
                flatten_into(&mut tokens, key, value, path)?;
            }
        }
        other => {
            return Err(ThemeError::Parse {
                path: path.map(Path::to_path_buf),
                message: format!("theme root must be a mapping, found {}", kind_of(&other)),
            })
        }
    }
    Ok(tokens)
}

fn flatten_into(
    tokens: &mut BTreeMap<String, StyleValue>,
    name: String,
    value: serde_json::Value,
    path: Option<&Path>,
) -> Result<(), ThemeError> {
    match value {
        serde_json::Value::Null => Ok(()),
        serde_json::Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(tokens, format!("{}_{}", name, key), nested, path)?;
            }
            Ok(())
        }
        serde_json::Value::Array(_) => Err(ThemeError::InvalidToken {
            token: name,
            message: "sequences are not valid token values".to_string(),
            path: path.map(Path::to_path_buf),
        }),
        scalar => {
            tokens.insert(name, StyleValue::from_json(&scalar));
            Ok(())
        }
    }
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a sequence",
        serde_json::Value::Object(_) => "a mapping",
    }
}
