use dcfcalc::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

/// Unknown-key warnings for config and scenario files, one block per key.
pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let mut out = String::new();
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        out.push_str(&format!("{} Unknown key '{}' in {}\n", icon, w.key, location));
        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

pub fn print_config_warnings(warnings: &[ConfigWarning], supports_color: bool, supports_unicode: bool) {
    eprint!(
        "{}",
        render_config_warnings(warnings, supports_color, supports_unicode)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_lists_location_and_suggestion() {
        let warnings = vec![
            ConfigWarning {
                key: "discount_rte".to_string(),
                file: PathBuf::from("dcfcalc.toml"),
                line: Some(2),
                suggestion: Some("discount_rate".to_string()),
            },
            ConfigWarning {
                key: "colour".to_string(),
                file: PathBuf::from("config.toml"),
                line: None,
                suggestion: None,
            },
        ];

        insta::assert_snapshot!(render_config_warnings(&warnings, false, false), @r"
        [WARN] Unknown key 'discount_rte' in dcfcalc.toml:2
           Did you mean 'discount_rate'?
        [WARN] Unknown key 'colour' in config.toml
        ");
    }
}
