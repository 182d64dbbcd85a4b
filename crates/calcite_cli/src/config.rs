//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config <path>`
//! 2. `$CALCITE_CONFIG` environment variable
//! 3. `~/.config/calcite/config.toml`
//! 4. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub repl: ReplConfig,
    pub output: OutputConfig,
}

/// Interactive session settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    pub prompt: String,
    /// Print the welcome banner on start.
    pub banner: bool,
}

/// Result and diagnostic output settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    /// Echo the normalized expression before each result.
    pub show_normalized: bool,
}

// --- Defaults ---

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".into(),
            banner: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_normalized: false,
        }
    }
}

/// Load config from disk. Returns defaults if no config file exists.
///
/// An explicitly given path must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(p) = explicit {
        return read_config(p);
    }

    match config_path() {
        Some(p) if p.exists() => read_config(&p),
        _ => Ok(Config::default()),
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    // 1. Environment variable
    if let Ok(p) = std::env::var("CALCITE_CONFIG") {
        return Some(PathBuf::from(p));
    }

    // 2. ~/.config/calcite/config.toml
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("calcite").join("config.toml"))
}
