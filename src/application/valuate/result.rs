//! Valuation result

use crate::domain::entities::ValuationReport;
use crate::domain::value_objects::{ConfigWarning, ValuationParameters};
use crate::error::DcfError;

/// Result of a valuation: the report plus what it was computed from
#[derive(Debug)]
pub struct ValuationResult {
    pub params: ValuationParameters,
    pub unit: String,
    pub report: ValuationReport,
    /// `OutOfRange` errors for inputs beyond the form bounds (not fatal)
    pub out_of_range: Vec<DcfError>,
    /// Unknown keys found in the scenario file
    pub scenario_warnings: Vec<ConfigWarning>,
}

impl ValuationResult {
    pub fn total(&self) -> f64 {
        self.report.total()
    }

    /// Success message with the total rounded to two decimals.
    pub fn summary_line(&self) -> String {
        format!("Estimated total DCF value: {:.2} {}", self.total(), self.unit)
    }

    pub fn has_warnings(&self) -> bool {
        !self.out_of_range.is_empty() || !self.scenario_warnings.is_empty()
    }
}
