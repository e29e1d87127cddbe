//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - Without a subcommand the interactive form runs (when stdin is a terminal)

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// dcfcalc - Discounted Cash Flow valuation calculator
#[derive(Parser, Debug)]
#[command(name = "dcfcalc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'dcfcalc' without arguments for the interactive form.")]
pub struct Cli {
    /// Output NDJSON events instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a valuation from flags and/or a scenario file
    Compute {
        /// Projected cash flows, comma separated (e.g. 100,110,121)
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        cash_flows: Option<Vec<f64>>,

        /// Number of years for the default 100 + 10*i series
        #[arg(long, conflicts_with = "cash_flows")]
        years: Option<u32>,

        /// First projection year
        #[arg(long, allow_negative_numbers = true)]
        start_year: Option<i32>,

        /// Discount rate (WACC) as a decimal, e.g. 0.10
        #[arg(long, allow_negative_numbers = true)]
        discount_rate: Option<f64>,

        /// Long-term growth rate as a decimal, e.g. 0.02
        #[arg(long, allow_negative_numbers = true)]
        growth_rate: Option<f64>,

        /// Unit label shown next to amounts
        #[arg(long)]
        unit: Option<String>,

        /// Scenario file (TOML) providing any of the values above
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Run the interactive input form
    Interactive,

    /// Explain the valuation formula and usage
    Explain {
        /// Short version (just the essentials)
        #[arg(long)]
        brief: bool,
    },
}
