//! Interactive command module
//!
//! Runs the valuation form in the terminal and renders the result.

mod form;

use anyhow::{bail, Context, Result};

use dcfcalc::config::Config;
use dcfcalc::presentation::{create_valuate_use_case, ColorWhen};
use dcfcalc::DcfError;

use crate::ui::context::UiContext;
use form::{run_form, DialoguerPrompter};

/// `explicit` is true for `dcfcalc interactive`, false when no command was given.
pub fn cmd_interactive(
    explicit: bool,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    if json {
        bail!("the interactive form does not support --json; use `dcfcalc compute --json`");
    }

    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let loaded = Config::load_or_default(Some(&cwd));
    let ui = UiContext::new(json, color, &loaded.config);

    if !ui.can_prompt() {
        if explicit {
            bail!("the interactive form needs a terminal on stdin; use `dcfcalc compute` instead");
        }
        println!("No command provided.");
        println!("Try: `dcfcalc compute --cash-flows 100,110,121` or `dcfcalc --help`");
        return Ok(());
    }

    crate::ui::output::print_config_warnings(&loaded.warnings, ui.color, ui.unicode);
    print!(
        "{}",
        crate::ui::views::interactive::render_banner(ui.color, ui.unicode)
    );

    let mut prompter = DialoguerPrompter::new(ui.color, ui.unicode);
    let request = match run_form(&mut prompter, &loaded.config.defaults) {
        Ok(request) => request,
        Err(e) if matches!(e.downcast_ref::<DcfError>(), Some(DcfError::Aborted)) => {
            tracing::info!("form declined");
            println!("Aborted.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let use_case = create_valuate_use_case(loaded.config.defaults.clone());
    let result = use_case.evaluate(request)?;

    println!();
    print!(
        "{}",
        crate::ui::views::valuation::render_valuation(&result, ui.color, ui.unicode)
    );
    Ok(())
}
