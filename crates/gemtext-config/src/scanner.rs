//! Scanner buffer configuration.

use serde::{Deserialize, Serialize};

/// Buffer sizes handed to the line scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScannerConfig {
    /// Size of the first buffer allocation in bytes.
    /// Default: 4096
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Longest line accepted, terminator included, in bytes.
    /// Default: 65536
    #[serde(default = "default_max_line_size")]
    pub max_line_size: usize,
}

fn default_buffer_size() -> usize {
    4096
}

fn default_max_line_size() -> usize {
    64 * 1024
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
            max_line_size: default_max_line_size(),
        }
    }
}

/// `[scanner]` keys given in an override; absent keys stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScannerOverride {
    pub buffer_size: Option<usize>,
    pub max_line_size: Option<usize>,
}

impl ScannerConfig {
    /// Apply the keys set in `other`, keeping the rest.
    pub fn merge(&mut self, other: &ScannerOverride) {
        if let Some(size) = other.buffer_size {
            self.buffer_size = size;
        }
        if let Some(size) = other.max_line_size {
            self.max_line_size = size;
        }
    }
}
