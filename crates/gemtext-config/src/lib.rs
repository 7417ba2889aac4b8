//! Gemtext Config
//!
//! This crate handles configuration loading and management for gmi2html,
//! supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/gmi2html/config.toml`
//! - macOS: `~/Library/Application Support/gmi2html/config.toml`
//! - Windows: `%APPDATA%\gmi2html\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use gemtext_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod html;
mod scanner;

pub use html::{HtmlConfig, HtmlOverride};
pub use scanner::{ScannerConfig, ScannerOverride};

use gemtext_core::{GemtextError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[scanner]
BufferSize  = 4096
MaxLineSize = 65536

[html]
Escape = true
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scanner buffer configuration
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// HTML output configuration
    #[serde(default)]
    pub html: HtmlConfig,
}

/// Partial configuration read from an override file or string.
///
/// Sections and keys the override leaves out are `None` and do not touch
/// the configuration they are merged into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverride {
    #[serde(default)]
    pub scanner: Option<ScannerOverride>,

    #[serde(default)]
    pub html: Option<HtmlOverride>,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use gemtext_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[scanner]"));
    /// assert!(toml.contains("[html]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "gmi2html")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// Returns the path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| GemtextError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| GemtextError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gemtext_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[html]\nEscape = false")).unwrap();
    /// assert!(!config.html.escape);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Parse an override given either as a file path or as inline TOML.
    pub fn parse_override(override_str: &str) -> Result<ConfigOverride> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.exists() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| GemtextError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge an override into this config.
    ///
    /// Keys set in `other` take precedence; everything else is kept.
    ///
    /// # Example
    ///
    /// ```
    /// use gemtext_config::{Config, ConfigOverride};
    ///
    /// let mut base = Config::default();
    /// base.scanner.max_line_size = 1000;
    /// let override_config: ConfigOverride = toml::from_str(r#"
    ///     [html]
    ///     Escape = false
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.html.escape);
    /// assert_eq!(base.scanner.max_line_size, 1000);
    /// ```
    pub fn merge(&mut self, other: &ConfigOverride) {
        if let Some(scanner) = &other.scanner {
            self.scanner.merge(scanner);
        }
        if let Some(html) = &other.html {
            self.html.merge(html);
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| GemtextError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
