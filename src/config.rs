//! Build configuration.
//!
//! Handles loading and validating the optional `lensmap.toml` file at the
//! scan root. All settings have stock defaults, so the file is only needed to
//! override them:
//!
//! ```toml
//! # Public base URL the manifest entries point at (no trailing slash needed;
//! # one is trimmed if present).
//! base_url = "https://example.github.io/imagesWeb"
//!
//! # File extensions (lowercase, no dot) treated as image assets.
//! extensions = ["jpg", "jpeg", "png", "webp", "gif", "svg"]
//!
//! # Directory names pruned from the walk, at any depth. Dot-prefixed
//! # directories are always pruned in addition to this list.
//! skip_dirs = [".git", "node_modules", ".github", ".idea", ".vscode"]
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up at the scan root.
pub const CONFIG_FILE: &str = "lensmap.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build configuration loaded from `lensmap.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Public base URL prepended to every asset path. Stored without a
    /// trailing slash.
    pub base_url: String,
    /// Lowercase file extensions (without the dot) recognized as assets.
    pub extensions: Vec<String>,
    /// Directory names pruned from the walk, at any depth.
    pub skip_dirs: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            extensions: default_extensions(),
            skip_dirs: default_skip_dirs(),
        }
    }
}

fn default_base_url() -> String {
    "https://thepiratecowboy.github.io/imagesWeb".to_string()
}

fn default_extensions() -> Vec<String> {
    ["jpg", "jpeg", "png", "webp", "gif", "svg"]
        .map(String::from)
        .to_vec()
}

fn default_skip_dirs() -> Vec<String> {
    [".git", "node_modules", ".github", ".idea", ".vscode"]
        .map(String::from)
        .to_vec()
}

impl BuildConfig {
    /// True if `ext` (any case, no dot) is a recognized asset extension.
    pub fn matches_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// True if a directory with this name should be pruned from the walk.
    /// Dot-prefixed names are always pruned.
    pub fn skips_dir(&self, name: &str) -> bool {
        name.starts_with('.') || self.skip_dirs.iter().any(|d| d == name)
    }
}

/// Load config from `lensmap.toml` under `root`, or stock defaults if the
/// file doesn't exist.
pub fn load_config(root: &Path) -> Result<BuildConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    let mut config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        BuildConfig::default()
    };

    // Normalize so URL construction never produces a double slash
    while config.base_url.ends_with('/') {
        config.base_url.pop();
    }

    validate(&config)?;
    Ok(config)
}

fn validate(config: &BuildConfig) -> Result<(), ConfigError> {
    if config.base_url.is_empty() {
        return Err(ConfigError::Validation("base_url must not be empty".into()));
    }
    if config.extensions.is_empty() {
        return Err(ConfigError::Validation(
            "extensions must list at least one file extension".into(),
        ));
    }
    for ext in &config.extensions {
        if ext.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "extension {ext:?} must not include the leading dot"
            )));
        }
    }
    Ok(())
}

/// Stock config with every option documented, for `lensmap gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Lensmap Configuration
# =====================
# All settings are optional. Values shown below are the defaults.
# Place this file as lensmap.toml at the root of the directory you scan.
# Unknown keys will cause an error.

# Public base URL that manifest entries point at. A trailing slash is trimmed.
base_url = "https://thepiratecowboy.github.io/imagesWeb"

# File extensions (lowercase, no dot) treated as image assets.
extensions = ["jpg", "jpeg", "png", "webp", "gif", "svg"]

# Directory names pruned from the walk at any depth. Directories whose name
# starts with a dot are always pruned, even if not listed here.
skip_dirs = [".git", "node_modules", ".github", ".idea", ".vscode"]
"##
}
