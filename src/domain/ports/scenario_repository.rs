//! ScenarioRepository port - where saved valuation inputs come from
//!
//! A scenario file holds one set of valuation inputs (rates, start year,
//! cash flows). The domain only needs the parsed inputs and any warnings;
//! the file format is an infrastructure detail.

use std::path::Path;

use crate::domain::entities::ValuationInputs;
use crate::domain::value_objects::ConfigWarning;
use crate::error::DcfResult;

/// Inputs read from a scenario, plus non-fatal warnings (unknown keys).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedScenario {
    pub inputs: ValuationInputs,
    pub warnings: Vec<ConfigWarning>,
}

/// Abstract source of scenario inputs
pub trait ScenarioRepository {
    /// Load the scenario stored at `path`
    fn load(&self, path: &Path) -> DcfResult<LoadedScenario>;
}
