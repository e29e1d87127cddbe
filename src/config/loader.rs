//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub use crate::domain::value_objects::ConfigWarning;
use crate::error::{DcfError, DcfResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "dcfcalc.toml";

/// Result of resolving the configuration hierarchy.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` when only defaults apply.
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DcfResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let (config, unknown) = parse_collecting_unknown::<Config>(&content, path)?;
    let warnings = unknown_key_warnings(unknown, &content, path, CONFIG_KEYS);
    Ok((config, warnings))
}

/// Deserialize TOML, returning the dotted paths of keys serde did not consume.
pub(crate) fn parse_collecting_unknown<T>(content: &str, path: &Path) -> DcfResult<(T, Vec<String>)>
where
    T: serde::de::DeserializeOwned,
{
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let value: T = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DcfError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok((value, unknown_paths))
}

/// Turn unknown key paths into warnings with line numbers and suggestions.
pub(crate) fn unknown_key_warnings(
    unknown_paths: Vec<String>,
    content: &str,
    path: &Path,
    candidates: &[&str],
) -> Vec<ConfigWarning> {
    unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            tracing::warn!(key = %key, file = %path.display(), "unknown configuration key");
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key, candidates),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect()
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> LoadedConfig {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                tracing::info!(file = %path.display(), "loaded configuration");
                return LoadedConfig {
                    config: with_env_overrides(config),
                    source: Some(path),
                    warnings,
                };
            }
            Err(err) => {
                tracing::warn!(file = %path.display(), error = %err, "skipping unreadable configuration");
            }
        }
    }

    LoadedConfig {
        config: with_env_overrides(Config::default()),
        source: None,
        warnings: Vec::new(),
    }
}

/// Apply environment variable overrides (DCFCALC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply overrides read through `get_env`, writing warnings to `writer`.
pub fn with_env_overrides_from<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    writer: &mut W,
) -> Config {
    let defaults = &mut config.defaults;

    if let Some(val) = get_env("DCFCALC_START_YEAR") {
        defaults.start_year = EnvVarValidator::numeric("DCFCALC_START_YEAR", "a year such as 2025")
            .parse_with_writer(&val, |s| s.parse().ok(), defaults.start_year, writer);
    }

    if let Some(val) = get_env("DCFCALC_YEARS") {
        defaults.years = EnvVarValidator::numeric("DCFCALC_YEARS", "a whole number of years")
            .parse_with_writer(&val, |s| s.parse().ok(), defaults.years, writer);
    }

    if let Some(val) = get_env("DCFCALC_DISCOUNT_RATE") {
        defaults.discount_rate =
            EnvVarValidator::numeric("DCFCALC_DISCOUNT_RATE", "a decimal rate such as 0.10")
                .parse_with_writer(&val, parse_rate, defaults.discount_rate, writer);
    }

    if let Some(val) = get_env("DCFCALC_GROWTH_RATE") {
        defaults.growth_rate =
            EnvVarValidator::numeric("DCFCALC_GROWTH_RATE", "a decimal rate such as 0.02")
                .parse_with_writer(&val, parse_rate, defaults.growth_rate, writer);
    }

    if let Some(val) = get_env("DCFCALC_UNIT") {
        if !val.trim().is_empty() {
            defaults.unit = val.trim().to_string();
        }
    }

    if let Some(val) = get_env("DCFCALC_COLOR") {
        config.output.color = EnvVarValidator::new("DCFCALC_COLOR", ColorMode::VALUES)
            .parse_with_writer(&val, ColorMode::parse, config.output.color, writer);
    }

    config
}

fn parse_rate(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|r| r.is_finite())
}

/// `$XDG_CONFIG_HOME/dcfcalc/config.toml`, else `~/.config/dcfcalc/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|dir| dir.join("dcfcalc").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

const CONFIG_KEYS: &[&str] = &[
    "defaults",
    "start_year",
    "years",
    "discount_rate",
    "growth_rate",
    "unit",
    "output",
    "color",
    "unicode",
];

fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
