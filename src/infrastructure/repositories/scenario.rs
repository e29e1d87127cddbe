//! TOML Scenario Repository
//!
//! Implements the ScenarioRepository port for TOML files such as:
//!
//! ```toml
//! start_year = 2025
//! discount_rate = 0.10
//! growth_rate = 0.02
//! cash_flows = [100, 110, 121]
//! unit = "M€"
//! ```

use std::fs;
use std::path::Path;

use crate::config::{parse_collecting_unknown, unknown_key_warnings};
use crate::domain::entities::ValuationInputs;
use crate::domain::ports::{LoadedScenario, ScenarioRepository};
use crate::error::DcfResult;

const SCENARIO_KEYS: &[&str] = &[
    "start_year",
    "years",
    "discount_rate",
    "growth_rate",
    "cash_flows",
    "unit",
];

/// TOML-based scenario repository reading from the local file system
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlScenarioRepository;

impl TomlScenarioRepository {
    pub fn new() -> Self {
        Self
    }

    /// Parse scenario content; `path` is only used for messages.
    pub fn parse(&self, content: &str, path: &Path) -> DcfResult<LoadedScenario> {
        let (inputs, unknown) = parse_collecting_unknown::<ValuationInputs>(content, path)?;
        let warnings = unknown_key_warnings(unknown, content, path, SCENARIO_KEYS);
        Ok(LoadedScenario { inputs, warnings })
    }
}

impl ScenarioRepository for TomlScenarioRepository {
    fn load(&self, path: &Path) -> DcfResult<LoadedScenario> {
        let content = fs::read_to_string(path)?;
        tracing::debug!(file = %path.display(), "loaded scenario");
        self.parse(&content, path)
    }
}
