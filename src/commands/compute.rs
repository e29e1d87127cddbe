use std::path::PathBuf;

use anyhow::{Context, Result};

use dcfcalc::config::Config;
use dcfcalc::presentation::{create_valuate_use_case, ColorWhen, OutputFormat, ValuationPayload};
use dcfcalc::{ValuationInputs, ValuationOptions};

use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, StartEvent};

pub fn cmd_compute(
    inputs: ValuationInputs,
    scenario: Option<PathBuf>,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let loaded = Config::load_or_default(Some(&cwd));
    let ui = UiContext::new(json, color, &loaded.config);
    let format = OutputFormat::from_json_flag(json);

    match format {
        OutputFormat::Json => crate::ui::json::emit_event(&StartEvent::new("compute"))?,
        OutputFormat::Text => {
            crate::ui::output::print_config_warnings(&loaded.warnings, ui.color, ui.unicode)
        }
    }

    let options = ValuationOptions::new()
        .with_inputs(inputs)
        .with_scenario(scenario);
    let use_case = create_valuate_use_case(loaded.config.defaults.clone());
    let result = use_case.execute(&options)?;

    match format {
        OutputFormat::Json => {
            crate::ui::json::emit_event(&CompleteEvent::success(
                "compute",
                ValuationPayload::from(&result),
            ))?;
        }
        OutputFormat::Text => {
            crate::ui::output::print_config_warnings(
                &result.scenario_warnings,
                ui.color,
                ui.unicode,
            );
            print!(
                "{}",
                crate::ui::views::valuation::render_valuation(&result, ui.color, ui.unicode)
            );
        }
    }
    Ok(())
}
