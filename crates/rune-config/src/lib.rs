//! Rune canvas configuration
//!
//! Loads the canvas resize settings from `rune.toml`, with environment
//! variables as overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuneConfig {
    /// Canvas resolution bounds
    pub resize: ResizeConfig,
    /// Diagnostics
    pub debug: DebugConfig,
}

/// Canvas resize configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResizeConfig {
    /// Design-time resolution `[width, height]`
    pub standard: [f32; 2],
    /// Smallest reference resolution; unset allows any extension downwards
    pub minimum: Option<[f32; 2]>,
    /// Largest reference resolution; unset allows any extension upwards
    pub maximum: Option<[f32; 2]>,
    /// Refuse to resize when bounds are not ordered around `standard`
    pub strict_bounds: bool,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Produce overlay rectangles for sample device aspect ratios
    pub overlay: bool,
    /// Local scale applied to overlay rectangles
    pub overlay_scale: [f32; 2],
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            standard: [2272.0, 1536.0],
            minimum: Some([2048.0, 1278.0]),
            maximum: Some([2768.0, 1536.0]),
            strict_bounds: false,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            overlay: false,
            overlay_scale: [1.0, 1.0],
        }
    }
}

impl RuneConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (rune.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        match Self::load_from_file("rune.toml") {
            Ok(config) => config,
            Err(ConfigError::Io { .. }) => Self::default(),
            Err(err) => {
                log::warn!("{}; using defaults", err);
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Values that fail to parse are ignored.
    pub fn merge_with_env(&mut self) {
        // Resize settings
        if let Some(size) = env_resolution("RUNE_STANDARD_RESOLUTION") {
            self.resize.standard = size;
        }
        if let Some(size) = env_resolution("RUNE_MINIMUM_RESOLUTION") {
            self.resize.minimum = Some(size);
        }
        if let Some(size) = env_resolution("RUNE_MAXIMUM_RESOLUTION") {
            self.resize.maximum = Some(size);
        }
        if let Ok(val) = std::env::var("RUNE_STRICT_BOUNDS") {
            self.resize.strict_bounds = is_truthy(&val);
        }

        // Debug settings
        if let Ok(val) = std::env::var("RUNE_DEBUG_OVERLAY") {
            self.debug.overlay = is_truthy(&val);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

/// Parse `WIDTHxHEIGHT` (e.g. `2272x1536`).
pub fn parse_resolution(s: &str) -> Option<[f32; 2]> {
    let (w, h) = s.trim().split_once(['x', 'X'])?;
    let w = w.trim().parse::<f32>().ok()?;
    let h = h.trim().parse::<f32>().ok()?;
    Some([w, h])
}

fn env_resolution(key: &str) -> Option<[f32; 2]> {
    let val = std::env::var(key).ok()?;
    let parsed = parse_resolution(&val);
    if parsed.is_none() {
        log::warn!("ignoring {}={:?}: expected WIDTHxHEIGHT", key, val);
    }
    parsed
}

fn is_truthy(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}
