use dcfcalc::DcfError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::json::events::ErrorEvent;

/// Stable machine-readable code for `--json` error events.
pub fn error_code(err: &DcfError) -> &'static str {
    match err {
        DcfError::RatesEqual { .. } => "rates_equal",
        DcfError::GrowthExceedsDiscount { .. } => "growth_exceeds_discount",
        DcfError::EmptyProjection => "empty_projection",
        DcfError::NonFiniteInput { .. } => "non_finite_input",
        DcfError::OutOfRange { .. } => "out_of_range",
        DcfError::InvalidConfig { .. } => "invalid_config",
        DcfError::Io(_) => "io",
        DcfError::Aborted => "aborted",
    }
}

/// Suggested correction shown under the error message.
pub fn fix_hint(err: &DcfError) -> Option<String> {
    match err {
        DcfError::RatesEqual { .. } => Some(
            "Use a discount rate above the growth rate, e.g. --discount-rate 0.10 --growth-rate 0.02"
                .to_string(),
        ),
        DcfError::GrowthExceedsDiscount { discount_rate, .. } => Some(format!(
            "Lower --growth-rate below the discount rate ({})",
            discount_rate
        )),
        DcfError::EmptyProjection => {
            Some("Provide at least one cash flow, e.g. --cash-flows 100,110,121".to_string())
        }
        DcfError::NonFiniteInput { field, .. } => {
            Some(format!("Use a finite number for {}", field))
        }
        DcfError::OutOfRange { min, max, .. } => {
            Some(format!("Enter a value between {} and {}", min, max))
        }
        DcfError::InvalidConfig { .. } => {
            Some("Fix the TOML syntax or the value type, then run again.".to_string())
        }
        DcfError::Io(_) | DcfError::Aborted => None,
    }
}

fn format_dcf_error_with(err: &DcfError, supports_color: bool, supports_unicode: bool) -> String {
    let mut block = ErrorBlock::new(err.to_string());
    if let DcfError::InvalidConfig { file, .. } = err {
        block = block.with_file(file);
    }
    if let Some(fix) = fix_hint(err) {
        block = block.with_fix(fix);
    }
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(dcf) = err.downcast_ref::<DcfError>() {
        return format_dcf_error_with(dcf, supports_color, supports_unicode);
    }
    ErrorBlock::new(format!("{:#}", err)).render(supports_color, supports_unicode)
}

/// Report a failed command on stderr, or as an `error` event in JSON mode.
pub fn print_error(err: &anyhow::Error, command: &str, json: bool) {
    if json {
        let dcf = err.downcast_ref::<DcfError>();
        let code = dcf.map(error_code).unwrap_or("error");
        let event = ErrorEvent::new(command, code, format!("{:#}", err))
            .with_help(dcf.and_then(fix_hint));
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
