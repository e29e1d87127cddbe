//! Partially specified valuation inputs
//!
//! Inputs arrive from several sources (CLI flags, a scenario file, config
//! defaults). Each source fills in what it knows; higher-priority sources are
//! layered over lower ones with [`ValuationInputs::overlay`].

use serde::{Deserialize, Serialize};

/// Valuation inputs where every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuationInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,

    /// Length of the default cash flow series; ignored when `cash_flows` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_flows: Option<Vec<f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ValuationInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_year(mut self, start_year: Option<i32>) -> Self {
        self.start_year = start_year;
        self
    }

    pub fn with_years(mut self, years: Option<u32>) -> Self {
        self.years = years;
        self
    }

    pub fn with_discount_rate(mut self, discount_rate: Option<f64>) -> Self {
        self.discount_rate = discount_rate;
        self
    }

    pub fn with_growth_rate(mut self, growth_rate: Option<f64>) -> Self {
        self.growth_rate = growth_rate;
        self
    }

    pub fn with_cash_flows(mut self, cash_flows: Option<Vec<f64>>) -> Self {
        self.cash_flows = cash_flows;
        self
    }

    pub fn with_unit(mut self, unit: Option<String>) -> Self {
        self.unit = unit;
        self
    }

    /// Fill fields missing from `self` with the values of `lower`.
    pub fn overlay(self, lower: ValuationInputs) -> Self {
        Self {
            start_year: self.start_year.or(lower.start_year),
            years: self.years.or(lower.years),
            discount_rate: self.discount_rate.or(lower.discount_rate),
            growth_rate: self.growth_rate.or(lower.growth_rate),
            cash_flows: self.cash_flows.or(lower.cash_flows),
            unit: self.unit.or(lower.unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_prefers_upper_values() {
        let flags = ValuationInputs::new()
            .with_discount_rate(Some(0.09))
            .with_unit(Some("k$".to_string()));
        let file = ValuationInputs::new()
            .with_discount_rate(Some(0.12))
            .with_growth_rate(Some(0.01))
            .with_cash_flows(Some(vec![10.0, 20.0]));

        let merged = flags.overlay(file);

        assert_eq!(merged.discount_rate, Some(0.09));
        assert_eq!(merged.growth_rate, Some(0.01));
        assert_eq!(merged.cash_flows, Some(vec![10.0, 20.0]));
        assert_eq!(merged.unit.as_deref(), Some("k$"));
        assert_eq!(merged.start_year, None);
    }

    #[test]
    fn deserializes_sparse_toml() {
        let inputs: ValuationInputs = toml::from_str("growth_rate = 0.03\n").unwrap();
        assert_eq!(inputs.growth_rate, Some(0.03));
        assert!(inputs.cash_flows.is_none());
    }
}
