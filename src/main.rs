//! dcfcalc CLI - Discounted Cash Flow valuation calculator
//!
//! Usage: dcfcalc [COMMAND]
//!
//! Commands:
//!   compute      Compute a valuation from flags and/or a scenario file
//!   interactive  Run the interactive input form
//!   explain      Explain the valuation formula and usage

mod commands;
mod ui;

use clap::Parser;

use dcfcalc::domain::entities::ValuationInputs;
use dcfcalc::presentation::{Cli, ColorWhen, Commands};

fn main() {
    let cli = Cli::parse();

    let log_ansi = cli.color != Some(ColorWhen::Never) && std::env::var_os("NO_COLOR").is_none();
    dcfcalc::logging::init(cli.verbose, log_ansi);

    let command_name = match &cli.command {
        Some(Commands::Compute { .. }) => "compute",
        Some(Commands::Interactive) | None => "interactive",
        Some(Commands::Explain { .. }) => "explain",
    };

    let result = match cli.command {
        Some(Commands::Compute {
            cash_flows,
            years,
            start_year,
            discount_rate,
            growth_rate,
            unit,
            input,
        }) => {
            let inputs = ValuationInputs::new()
                .with_cash_flows(cash_flows)
                .with_years(years)
                .with_start_year(start_year)
                .with_discount_rate(discount_rate)
                .with_growth_rate(growth_rate)
                .with_unit(unit);
            commands::compute::cmd_compute(inputs, input, cli.json, cli.color)
        }
        Some(Commands::Interactive) => {
            commands::interactive::cmd_interactive(true, cli.json, cli.color)
        }
        Some(Commands::Explain { brief }) => {
            commands::explain::cmd_explain(brief, cli.json, cli.verbose)
        }
        None => commands::interactive::cmd_interactive(false, cli.json, cli.color),
    };

    if let Err(e) = result {
        ui::error::print_error(&e, command_name, cli.json);
        std::process::exit(1);
    }
}
