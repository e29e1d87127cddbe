//! Valuation options and the fully resolved request

use std::path::PathBuf;

use crate::config::DefaultsConfig;
use crate::domain::entities::ValuationInputs;
use crate::domain::value_objects::{CashFlowProjection, FormField, ValuationParameters};
use crate::error::{DcfError, DcfResult};

/// Options for the valuate use case
#[derive(Debug, Clone, Default)]
pub struct ValuationOptions {
    /// Values given explicitly (CLI flags); highest priority
    pub inputs: ValuationInputs,
    /// Optional scenario file layered below `inputs`
    pub scenario: Option<PathBuf>,
}

impl ValuationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(mut self, inputs: ValuationInputs) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_scenario(mut self, scenario: Option<PathBuf>) -> Self {
        self.scenario = scenario;
        self
    }
}

/// Every input of a valuation, resolved and validated as value objects.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationRequest {
    pub params: ValuationParameters,
    pub projection: CashFlowProjection,
    pub unit: String,
}

impl ValuationRequest {
    pub fn new(
        params: ValuationParameters,
        projection: CashFlowProjection,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            params,
            projection,
            unit: unit.into(),
        }
    }

    /// Resolve `inputs` against config defaults.
    ///
    /// Missing cash flows become the default series (`100 + 10*i`) over
    /// `inputs.years`, falling back to `defaults.years`. That count must lie
    /// within the form bounds.
    pub fn resolve(inputs: &ValuationInputs, defaults: &DefaultsConfig) -> DcfResult<Self> {
        let projection = match &inputs.cash_flows {
            Some(cash_flows) => CashFlowProjection::new(cash_flows.clone())?,
            None => {
                let years = inputs.years.unwrap_or(defaults.years);
                FormField::Years.check(f64::from(years))?;
                CashFlowProjection::default_series(years)?
            }
        };

        let params = ValuationParameters::new(
            inputs.start_year.unwrap_or(defaults.start_year),
            inputs.discount_rate.unwrap_or(defaults.discount_rate),
            inputs.growth_rate.unwrap_or(defaults.growth_rate),
        );

        let unit = inputs
            .unit
            .clone()
            .unwrap_or_else(|| defaults.unit.clone());

        Ok(Self::new(params, projection, unit))
    }

    /// Fields lying outside the bounds the interactive form would accept.
    pub fn out_of_range(&self) -> Vec<DcfError> {
        FormField::ALL
            .iter()
            .filter_map(|field| field.check(self.field_value(*field)).err())
            .collect()
    }

    fn field_value(&self, field: FormField) -> f64 {
        match field {
            FormField::StartYear => f64::from(self.params.start_year),
            FormField::Years => self.projection.len() as f64,
            FormField::DiscountRate => self.params.discount_rate,
            FormField::GrowthRate => self.params.growth_rate,
        }
    }
}
