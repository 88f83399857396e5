//! Render modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a page is rendered.
///
/// `Builder` is the page editor: nodes are editable and empty text shows a
/// placeholder. `Frontend` is the published storefront: read-only, and empty
/// text renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Builder,
    #[default]
    Frontend,
}

impl RenderMode {
    pub fn is_editable(&self) -> bool {
        matches!(self, RenderMode::Builder)
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Builder => f.write_str("builder"),
            RenderMode::Frontend => f.write_str("frontend"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "builder" | "edit" => Ok(RenderMode::Builder),
            "frontend" | "live" => Ok(RenderMode::Frontend),
            other => Err(format!("unknown render mode '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("builder".parse::<RenderMode>(), Ok(RenderMode::Builder));
        assert_eq!("Frontend".parse::<RenderMode>(), Ok(RenderMode::Frontend));
        assert!("preview".parse::<RenderMode>().is_err());
    }

    #[test]
    fn test_default_is_read_only() {
        assert!(!RenderMode::default().is_editable());
        assert!(RenderMode::Builder.is_editable());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&RenderMode::Builder).unwrap(), "\"builder\"");
    }
}
