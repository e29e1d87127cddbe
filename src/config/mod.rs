//! Configuration module for dcfcalc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DCFCALC_*)
//! 3. Project config (./dcfcalc.toml)
//! 4. User config (~/.config/dcfcalc/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    user_config_path, with_env_overrides_from, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, DefaultsConfig, OutputConfig};

pub(crate) use loader::{parse_collecting_unknown, unknown_key_warnings};
