//! Configuration file loading for throwguard.
//!
//! Reads `.throwguard/throwguard.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.
//!
//! The checked exception and safe marker live in the analyzer config and are
//! not read from this file.

use std::path::Path;

use serde::{Deserialize, Serialize};

pub const CONFIG_DIR: &str = ".throwguard";
pub const CONFIG_FILE: &str = "throwguard.json";
/// Per-directory ignore file honored when walking for trees.
pub const IGNORE_FILE: &str = ".throwguardignore";

/// Top-level throwguard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrowguardConfig {
    #[serde(default = "default_version")]
    pub version: String,
    /// Issue ids whose violations are reported as suppressed.
    #[serde(default)]
    pub suppress: Vec<String>,
    /// File name suffix identifying serialized syntax trees.
    #[serde(default = "default_tree_suffix")]
    pub tree_suffix: String,
    /// Gitignore-style patterns, matched relative to each walked directory.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_tree_suffix() -> String {
    ".tree.json".to_string()
}

impl Default for ThrowguardConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            suppress: vec![],
            tree_suffix: default_tree_suffix(),
            ignore_patterns: vec![],
        }
    }
}

impl ThrowguardConfig {
    /// Load configuration from `throwguard.json` inside the given config directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }
}
