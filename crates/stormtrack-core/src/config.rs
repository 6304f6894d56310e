//! Configuration types for stormtrack.
//!
//! [`Config::load`] reads `~/.config/stormtrack/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::detect::DetectOptions;
use crate::types::{Bounds, SourceVariant};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[sources]
tracks    = "data/hurricanes.json"
using_l   = "data/florida_landfalls.json"
without_l = "data/florida_landfalls_without_using_L.csv"
variant   = "using-l"

[display]
min_year      = 1900
fallback_year = "1900"

[detect]
buffer_deg     = 0.05
max_step_miles = 100.0
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/stormtrack/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub detect: DetectConfig,
}

/// `[sources]` section. Landfall paths ending in `.csv` are read as tabular
/// files, anything else as JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_tracks")]
    pub tracks: PathBuf,
    #[serde(default = "default_using_l")]
    pub using_l: PathBuf,
    #[serde(default = "default_without_l")]
    pub without_l: PathBuf,
    /// Variant loaded at startup.
    #[serde(default)]
    pub variant: SourceVariant,
}

fn default_tracks() -> PathBuf { PathBuf::from("data/hurricanes.json") }
fn default_using_l() -> PathBuf { PathBuf::from("data/florida_landfalls.json") }
fn default_without_l() -> PathBuf { PathBuf::from("data/florida_landfalls_without_using_L.csv") }

impl SourcesConfig {
    pub fn landfalls(&self, variant: SourceVariant) -> &Path {
        match variant {
            SourceVariant::UsingIndicator => &self.using_l,
            SourceVariant::WithoutIndicator => &self.without_l,
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            tracks: default_tracks(),
            using_l: default_using_l(),
            without_l: default_without_l(),
            variant: SourceVariant::default(),
        }
    }
}

/// `[display]` section. `min_year` can narrow the selectable years but
/// never reach below [`crate::years::MIN_YEAR`].
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    /// Selected year when no landfall years are loaded.
    #[serde(default = "default_fallback_year")]
    pub fallback_year: String,
}

fn default_min_year() -> i32 { crate::years::MIN_YEAR }
fn default_fallback_year() -> String { crate::years::FALLBACK_YEAR.to_string() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            min_year: default_min_year(),
            fallback_year: default_fallback_year(),
        }
    }
}

/// `[detect]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectConfig {
    #[serde(default = "default_buffer_deg")]
    pub buffer_deg: f64,
    #[serde(default = "default_max_step_miles")]
    pub max_step_miles: f64,
}

fn default_buffer_deg() -> f64 { 0.05 }
fn default_max_step_miles() -> f64 { 100.0 }

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            buffer_deg: default_buffer_deg(),
            max_step_miles: default_max_step_miles(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/stormtrack/config.toml`, layered on top of the
    /// built-in defaults, then `extra` if given. Creates the user file with
    /// defaults if it does not exist.
    pub fn load(extra: Option<&Path>) -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false));
        if let Some(extra) = extra {
            builder = builder.add_source(config::File::from(extra).required(true));
        }

        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Parse a config from TOML text layered over the defaults.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    pub fn detect_options(&self) -> DetectOptions {
        DetectOptions {
            region: Bounds::FLORIDA,
            buffer_deg: self.detect.buffer_deg,
            max_step_miles: self.detect.max_step_miles,
            min_year: self.display.min_year,
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("stormtrack")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
