//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DcfResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Default form values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    #[serde(default = "default_years")]
    pub years: u32,

    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,

    #[serde(default = "default_growth_rate")]
    pub growth_rate: f64,

    /// Unit label appended to displayed amounts
    #[serde(default = "default_unit")]
    pub unit: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            years: default_years(),
            discount_rate: default_discount_rate(),
            growth_rate: default_growth_rate(),
            unit: default_unit(),
        }
    }
}

fn default_start_year() -> i32 {
    2025
}

fn default_years() -> u32 {
    5
}

fn default_discount_rate() -> f64 {
    0.10
}

fn default_growth_rate() -> f64 {
    0.02
}

fn default_unit() -> String {
    "M€".to_string()
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const VALUES: &'static [&'static str] = &["auto", "always", "never"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DcfResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DcfResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults; env overrides applied
    pub fn load_or_default(project_root: Option<&Path>) -> LoadedConfig {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (DCFCALC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
