//! Error types for theme loading and validation.
//!
//! Resolution itself never fails: every lookup degrades to a literal. These
//! errors only surface from the configuration side (parsing theme files,
//! registry lookups, and [`ThemeConfig::validate`](crate::ThemeConfig::validate)).

use std::path::PathBuf;

/// A problem found while walking token reference chains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenValidationError {
    /// A token references itself, directly or through other tokens.
    #[error("cycle detected in token references: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    /// A reference chain is longer than the resolver will follow.
    #[error("token reference chain exceeds {limit} hops: {}", .path.join(" -> "))]
    DepthExceeded { path: Vec<String>, limit: usize },
}

/// Error type for theme configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The theme document could not be parsed.
    #[error("failed to parse theme{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Message from the underlying parser.
        message: String,
    },

    /// A token holds a value that cannot be stored as a theme token.
    #[error("invalid value for token '{token}'{}: {message}", location(.path))]
    InvalidToken {
        token: String,
        message: String,
        path: Option<PathBuf>,
    },

    /// Reading a theme file or directory failed.
    #[error("failed to load theme: {message}")]
    Load { message: String },

    /// The registry has no theme under this name.
    #[error("theme not found: {name}")]
    NotFound { name: String },

    /// Two registered directories both provide a theme with this name.
    #[error("theme '{name}' is defined in more than one directory: {}", display_paths(.paths))]
    Collision { name: String, paths: Vec<PathBuf> },

    /// Token references are cyclic or too deep.
    #[error("token validation failed: {0}")]
    Validation(#[from] TokenValidationError),
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_detected_display() {
        let err = TokenValidationError::CycleDetected {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("cycle"));
        assert!(msg.contains("a -> b -> a"));
    }

    #[test]
    fn test_parse_error_display_with_path() {
        let err = ThemeError::Parse {
            path: Some(PathBuf::from("themes/shop.yaml")),
            message: "bad indent".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("themes/shop.yaml"));
        assert!(msg.contains("bad indent"));
    }

    #[test]
    fn test_parse_error_display_without_path() {
        let err = ThemeError::Parse {
            path: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse theme: bad indent");
    }

    #[test]
    fn test_validation_error_converts() {
        let err: ThemeError = TokenValidationError::DepthExceeded {
            path: vec!["x".into()],
            limit: 5,
        }
        .into();
        assert!(matches!(err, ThemeError::Validation(_)));
        assert!(err.to_string().contains("5 hops"));
    }
}
