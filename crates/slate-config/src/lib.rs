//! Slate toolkit configuration
//!
//! This crate provides centralized configuration for the slate widget
//! toolkit, loading tunables from `slate.toml` as an alternative to
//! environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the slate toolkit
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Text measurement and caret settings
    pub text: TextConfig,
    /// Input widget settings
    pub input: InputConfig,
}

/// Text measurement and caret configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Default font size in pixels
    pub size: f32,
    /// Caret blink interval in milliseconds
    pub blink_interval_ms: u64,
    /// Left padding applied at the start of each wrapped line, in pixels
    pub wrap_pad: f32,
    /// Extra vertical spacing between stacked lines, in pixels
    pub line_pad: f32,
}

/// Input widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum text length for multi-line boxes when the caller does not cap one
    pub default_max_len: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            size: 14.0,
            blink_interval_ms: 667,
            wrap_pad: 3.0,
            line_pad: 3.0,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_max_len: 0x7fff_fffe,
        }
    }
}

impl ToolkitConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the slate.toml configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (slate.toml in the current
    /// directory) or return default configuration if the file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("slate.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values,
    /// which allows temporary overrides without editing the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("SLATE_TEXT_SIZE") {
            if let Ok(size) = val.parse::<f32>() {
                self.text.size = size;
            }
        }
        if let Ok(val) = std::env::var("SLATE_BLINK_MS") {
            if let Ok(ms) = val.parse::<u64>() {
                self.text.blink_interval_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("SLATE_WRAP_PAD") {
            if let Ok(pad) = val.parse::<f32>() {
                self.text.wrap_pad = pad;
            }
        }
        if let Ok(val) = std::env::var("SLATE_LINE_PAD") {
            if let Ok(pad) = val.parse::<f32>() {
                self.text.line_pad = pad;
            }
        }
        if let Ok(val) = std::env::var("SLATE_MAX_LEN") {
            if let Ok(len) = val.parse::<usize>() {
                self.input.default_max_len = len;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from slate.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
