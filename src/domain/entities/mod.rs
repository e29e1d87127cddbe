//! Domain Entities
//!
//! Valuation inputs as gathered from their sources, and the report produced
//! by a single computation.

mod inputs;
mod report;

pub use inputs::ValuationInputs;
pub use report::{ReportRow, TerminalValue, ValuationReport, YearlyResult};
