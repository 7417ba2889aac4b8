//! HTML output configuration.

use serde::{Deserialize, Serialize};

/// Options for HTML output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HtmlConfig {
    /// Escape special HTML characters in text and URLs.
    /// Default: true
    #[serde(default = "default_true")]
    pub escape: bool,
}

fn default_true() -> bool {
    true
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self { escape: true }
    }
}

/// `[html]` keys given in an override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HtmlOverride {
    pub escape: Option<bool>,
}

impl HtmlConfig {
    /// Apply the keys set in `other`.
    pub fn merge(&mut self, other: &HtmlOverride) {
        if let Some(escape) = other.escape {
            self.escape = escape;
        }
    }
}
