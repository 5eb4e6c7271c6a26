//! Configuration management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// LCD configuration
    #[serde(default)]
    pub lcd: LcdConfig,

    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,
}

/// LCD dimensions configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LcdConfig {
    /// Display width in pixels
    #[serde(default = "default_width")]
    pub width: u16,

    /// Display height in pixels
    #[serde(default = "default_height")]
    pub height: u16,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RenderConfig {
    /// Path to the default font file
    #[serde(default)]
    pub font: Option<String>,
}

// Default value functions
fn default_width() -> u16 {
    320
}

fn default_height() -> u16 {
    240
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read configuration file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse configuration")?;
        Ok(config)
    }
}
