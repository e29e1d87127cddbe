//! Environment variable validation with helpful warnings
//!
//! Invalid `DCFCALC_*` values never abort: they are reported with a typo
//! suggestion (for enumerated values) and the previous value is kept.

use std::io::Write;

/// What a variable accepts, used in the warning text.
#[derive(Debug, Clone, Copy)]
enum Expected<'a> {
    OneOf(&'a [&'a str]),
    Number(&'a str),
}

/// Validator for a single environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    expected: Expected<'a>,
}

impl<'a> EnvVarValidator<'a> {
    /// Validator for a variable taking one of `valid_values`
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            expected: Expected::OneOf(valid_values),
        }
    }

    /// Validator for a numeric variable; `hint` describes the accepted range
    pub fn numeric(var_name: &'a str, hint: &'a str) -> Self {
        Self {
            var_name,
            expected: Expected::Number(hint),
        }
    }

    /// Parse a value, returning `fallback` if invalid (with a warning on stderr)
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, fallback, &mut std::io::stderr())
    }

    /// Parse with a custom writer (for testing)
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        fallback: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value.trim()) {
            return parsed;
        }

        tracing::warn!(var = self.var_name, value, "ignoring invalid environment value");
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name,
            value,
            self.suggest(value)
        );
        let _ = match self.expected {
            Expected::OneOf(values) => writeln!(writer, "Valid values: {}", values.join(", ")),
            Expected::Number(hint) => writeln!(writer, "Expected: {}", hint),
        };
        fallback
    }

    /// Suggest a valid value based on Levenshtein distance
    fn suggest(&self, value: &str) -> String {
        let Expected::OneOf(values) = self.expected else {
            return String::new();
        };

        let input = value.trim().to_lowercase();
        let best = values
            .iter()
            .map(|&valid| (valid, levenshtein(&input, valid)))
            .min_by_key(|(_, dist)| *dist);

        match best {
            Some((suggested, dist)) if dist <= 2 && dist > 0 => {
                format!(". Did you mean '{}'?", suggested)
            }
            _ => String::new(),
        }
    }
}

/// Levenshtein distance for typo detection, shared with the config loader
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_rate(s: &str) -> Option<f64> {
        s.parse().ok()
    }

    #[test]
    fn test_levenshtein_typos() {
        assert_eq!(levenshtein("alway", "always"), 1);
        assert_eq!(levenshtein("nevr", "never"), 1);
        assert_eq!(levenshtein("", "auto"), 4);
    }

    #[test]
    fn test_numeric_valid_value() {
        let validator = EnvVarValidator::numeric("DCFCALC_DISCOUNT_RATE", "a decimal rate");
        let mut output = Vec::new();
        let rate = validator.parse_with_writer(" 0.08 ", parse_rate, 0.10, &mut output);
        assert_eq!(rate, 0.08);
        assert!(output.is_empty());
    }

    #[test]
    fn test_numeric_invalid_value_keeps_fallback() {
        let validator = EnvVarValidator::numeric("DCFCALC_DISCOUNT_RATE", "a decimal rate");
        let mut output = Vec::new();
        let rate = validator.parse_with_writer("ten percent", parse_rate, 0.10, &mut output);
        assert_eq!(rate, 0.10);

        let msg = String::from_utf8(output).unwrap();
        assert!(msg.contains("Warning: Invalid DCFCALC_DISCOUNT_RATE value 'ten percent'"));
        assert!(msg.contains("Expected: a decimal rate"));
        assert!(!msg.contains("Did you mean"));
    }

    #[test]
    fn test_enum_typo_suggestion() {
        let validator = EnvVarValidator::new("DCFCALC_COLOR", &["auto", "always", "never"]);
        let mut output = Vec::new();
        validator.parse_with_writer("allways", |_| None::<()>, (), &mut output);

        let msg = String::from_utf8(output).unwrap();
        assert!(
            msg.contains("Did you mean 'always'?"),
            "Should suggest correction: {}",
            msg
        );
        assert!(msg.contains("Valid values: auto, always, never"));
    }

    #[test]
    fn test_enum_no_suggestion_for_distant_value() {
        let validator = EnvVarValidator::new("DCFCALC_COLOR", &["auto", "always", "never"]);
        let mut output = Vec::new();
        validator.parse_with_writer("rainbow-mode", |_| None::<()>, (), &mut output);

        let msg = String::from_utf8(output).unwrap();
        assert!(!msg.contains("Did you mean"), "{}", msg);
    }
}
