//! Tests for the config module

use super::loader::{load_or_default, load_with_warnings, with_env_overrides_from};
use super::types::*;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.defaults.start_year, 2025);
    assert_eq!(config.defaults.years, 5);
    assert_eq!(config.defaults.discount_rate, 0.10);
    assert_eq!(config.defaults.growth_rate, 0.02);
    assert_eq!(config.defaults.unit, "M€");
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[defaults]
start_year = 2030
years = 3
discount_rate = 0.08
growth_rate = 0.015
unit = "M$"

[output]
color = "never"
unicode = false
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.defaults.start_year, 2030);
    assert_eq!(config.defaults.years, 3);
    assert_eq!(config.defaults.discount_rate, 0.08);
    assert_eq!(config.defaults.growth_rate, 0.015);
    assert_eq!(config.defaults.unit, "M$");
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(!config.output.unicode);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config: Config = toml::from_str("[defaults]\nyears = 8\n").unwrap();
    assert_eq!(config.defaults.years, 8);
    assert_eq!(config.defaults.discount_rate, 0.10);
    assert_eq!(config.output, OutputConfig::default());
}

#[test]
fn test_unknown_keys_produce_warnings_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dcfcalc.toml");
    fs::write(&path, "[defaults]\ndiscount_rte = 0.09\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.defaults.discount_rate, 0.10);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "discount_rte");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("discount_rate"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dcfcalc.toml");
    fs::write(&path, "[defaults\nyears = ").unwrap();

    let err = load_with_warnings(&path).unwrap_err();
    assert!(err.to_string().contains("invalid configuration"));
}

#[test]
fn test_load_or_default_reads_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("dcfcalc.toml"),
        "[defaults]\nstart_year = 2040\n",
    )
    .unwrap();

    let loaded = load_or_default(Some(dir.path()));

    assert_eq!(loaded.config.defaults.start_year, 2040);
    assert_eq!(loaded.source, Some(dir.path().join("dcfcalc.toml")));
}

#[test]
fn test_env_overrides_apply() {
    let mut sink = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        env(&[
            ("DCFCALC_DISCOUNT_RATE", "0.12"),
            ("DCFCALC_GROWTH_RATE", "0.03"),
            ("DCFCALC_START_YEAR", "2031"),
            ("DCFCALC_YEARS", "7"),
            ("DCFCALC_UNIT", "k$"),
            ("DCFCALC_COLOR", "NEVER"),
        ]),
        &mut sink,
    );

    assert_eq!(config.defaults.discount_rate, 0.12);
    assert_eq!(config.defaults.growth_rate, 0.03);
    assert_eq!(config.defaults.start_year, 2031);
    assert_eq!(config.defaults.years, 7);
    assert_eq!(config.defaults.unit, "k$");
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(sink.is_empty());
}

#[test]
fn test_invalid_env_values_are_ignored_with_warning() {
    let mut sink = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        env(&[("DCFCALC_YEARS", "five"), ("DCFCALC_COLOR", "nevr")]),
        &mut sink,
    );

    assert_eq!(config.defaults.years, 5);
    assert_eq!(config.output.color, ColorMode::Auto);

    let msg = String::from_utf8(sink).unwrap();
    assert!(msg.contains("Invalid DCFCALC_YEARS value 'five'"));
    assert!(msg.contains("Did you mean 'never'?"));
}

#[test]
fn test_non_finite_rate_from_env_is_rejected() {
    let mut sink = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        env(&[("DCFCALC_DISCOUNT_RATE", "inf")]),
        &mut sink,
    );
    assert_eq!(config.defaults.discount_rate, 0.10);
}
