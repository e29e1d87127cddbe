//! Valuate Use Case
//!
//! Resolves inputs from their sources and runs the DCF calculator.

use tracing::{debug, warn};

use crate::config::DefaultsConfig;
use crate::domain::ports::ScenarioRepository;
use crate::domain::services::compute_projection;

use super::options::{ValuationOptions, ValuationRequest};
use super::result::ValuationResult;
use crate::error::DcfResult;

/// Valuate use case - one valuation per call, no state kept between calls
pub struct ValuateUseCase<SR>
where
    SR: ScenarioRepository,
{
    scenarios: SR,
    defaults: DefaultsConfig,
}

impl<SR> ValuateUseCase<SR>
where
    SR: ScenarioRepository,
{
    /// Create a new valuate use case
    pub fn new(scenarios: SR, defaults: DefaultsConfig) -> Self {
        Self {
            scenarios,
            defaults,
        }
    }

    pub fn defaults(&self) -> &DefaultsConfig {
        &self.defaults
    }

    /// Layer flags over the scenario file over config defaults, then compute.
    pub fn execute(&self, options: &ValuationOptions) -> DcfResult<ValuationResult> {
        let mut inputs = options.inputs.clone();
        let mut scenario_warnings = Vec::new();

        if let Some(path) = &options.scenario {
            let loaded = self.scenarios.load(path)?;
            inputs = inputs.overlay(loaded.inputs);
            scenario_warnings = loaded.warnings;
        }

        let request = ValuationRequest::resolve(&inputs, &self.defaults)?;
        let mut result = self.evaluate(request)?;
        result.scenario_warnings = scenario_warnings;
        Ok(result)
    }

    /// Compute an already-resolved request (used by the interactive form).
    pub fn evaluate(&self, request: ValuationRequest) -> DcfResult<ValuationResult> {
        let out_of_range = request.out_of_range();
        for issue in &out_of_range {
            warn!("{}", issue);
        }

        debug!(
            start_year = request.params.start_year,
            years = request.projection.len(),
            unit = %request.unit,
            "evaluating request"
        );
        let report = compute_projection(&request.projection, &request.params)?;

        Ok(ValuationResult {
            params: request.params,
            unit: request.unit,
            report,
            out_of_range,
            scenario_warnings: Vec::new(),
        })
    }
}
