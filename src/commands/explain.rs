use anyhow::Result;

use crate::ui::json::events::{CompleteEvent, StartEvent};

pub fn cmd_explain(brief: bool, json: bool, verbose: u8) -> Result<()> {
    if json {
        crate::ui::json::emit_event(&StartEvent::new("explain"))?;
        crate::ui::json::emit_event(&CompleteEvent::success("explain", explain_data()))?;
        return Ok(());
    }

    print!("{}", explain_text(brief, verbose));
    Ok(())
}

fn explain_data() -> serde_json::Value {
    serde_json::json!({
        "name": "dcfcalc",
        "version": env!("CARGO_PKG_VERSION"),
        "purpose": "Discounted cash flow valuation with a Gordon-growth terminal value",
        "formula": {
            "terminal_value": "CF[n-1] * (1 + g) / (r - g)",
            "discounted_cash_flow": "CF[i] / (1 + r)^(i + 1)",
            "total": "sum(discounted cash flows) + TV / (1 + r)^n"
        },
        "constraints": ["cash_flows is non-empty", "growth_rate < discount_rate"],
        "commands": {
            "dcfcalc": "Interactive form (when stdin is a terminal)",
            "dcfcalc compute --cash-flows 100,110,121": "Non-interactive valuation",
            "dcfcalc compute --input scenario.toml": "Valuation from a scenario file",
            "dcfcalc explain": "This explanation"
        },
        "config": {
            "project": "./dcfcalc.toml",
            "user": "~/.config/dcfcalc/config.toml",
            "env_prefix": "DCFCALC_"
        }
    })
}

pub(crate) fn explain_text(brief: bool, verbose: u8) -> String {
    let mut out = format!(
        "dcfcalc v{}\nDiscounted cash flow valuation calculator.\n\n",
        env!("CARGO_PKG_VERSION")
    );

    out.push_str("FORMULA:\n");
    out.push_str("  TV     = CF[n-1] * (1 + g) / (r - g)\n");
    out.push_str("  DCF_i  = CF[i] / (1 + r)^(i + 1)\n");
    out.push_str("  TOTAL  = sum(DCF_i) + TV / (1 + r)^n\n\n");

    if brief {
        out.push_str("KEY COMMANDS:\n");
        out.push_str("  dcfcalc\n");
        out.push_str("  dcfcalc compute --cash-flows 100,110,121 [--discount-rate 0.10] [--growth-rate 0.02]\n");
        return out;
    }

    out.push_str("INPUTS:\n");
    out.push_str("  Cash flows       One projected free cash flow per year (end-of-year discounting)\n");
    out.push_str("  Discount rate r  WACC as a decimal (form accepts 0.01 - 0.20)\n");
    out.push_str("  Growth rate g    Perpetual growth after the horizon (form accepts 0.00 - 0.10)\n");
    out.push_str("  Start year       Label of the first projection year (form accepts 2000 - 2100)\n\n");

    out.push_str("RULES:\n");
    out.push_str("  At least one cash flow is required.\n");
    out.push_str("  The growth rate must be strictly below the discount rate.\n\n");

    out.push_str("KEY COMMANDS:\n");
    out.push_str("  dcfcalc                         Interactive form\n");
    out.push_str("  dcfcalc compute [FLAGS]         Non-interactive valuation\n");
    out.push_str("  dcfcalc compute --input FILE    Valuation from a scenario file\n");
    out.push_str("  dcfcalc explain [--brief]       This explanation\n\n");

    out.push_str("CONFIGURATION (highest priority first):\n");
    out.push_str("  CLI flags, DCFCALC_* environment variables, ./dcfcalc.toml,\n");
    out.push_str("  ~/.config/dcfcalc/config.toml, built-in defaults\n");

    if verbose > 0 {
        out.push_str("\nEXAMPLES:\n");
        out.push_str("  # Three-year projection at 10% WACC and 2% growth\n");
        out.push_str("  dcfcalc compute --cash-flows 100,110,121 --discount-rate 0.10 --growth-rate 0.02\n\n");
        out.push_str("  # Default 100 + 10*i series over 7 years, as JSON\n");
        out.push_str("  dcfcalc compute --years 7 --json\n\n");
        out.push_str("  # Scenario file with a flag override\n");
        out.push_str("  dcfcalc compute --input scenario.toml --growth-rate 0.03\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brief_text_lists_formula_and_commands_only() {
        let text = explain_text(true, 0);
        assert!(text.contains("TV     = CF[n-1] * (1 + g) / (r - g)"));
        assert!(text.contains("KEY COMMANDS:"));
        assert!(!text.contains("CONFIGURATION"));
    }

    #[test]
    fn verbose_text_adds_examples() {
        assert!(!explain_text(false, 0).contains("EXAMPLES:"));
        assert!(explain_text(false, 1).contains("EXAMPLES:"));
    }

    #[test]
    fn json_data_names_constraints() {
        let data = explain_data();
        assert_eq!(data["name"], "dcfcalc");
        assert_eq!(data["constraints"][1], "growth_rate < discount_rate");
    }
}
