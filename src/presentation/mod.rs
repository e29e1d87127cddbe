//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Machine-readable output payloads
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output format and the JSON valuation payload
//!
//! ## Usage
//!
//! ```ignore
//! use dcfcalc::presentation::factory;
//!
//! let use_case = factory::create_valuate_use_case(defaults);
//! let result = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::create_valuate_use_case;
pub use output::{OutputFormat, ValuationPayload};
