//! Cash flow projection value object

use serde::{Deserialize, Serialize};

use super::parameters::ensure_finite;
use crate::error::{DcfError, DcfResult};

/// Base of the suggested default series (`100 + 10*i`).
const DEFAULT_BASE: f64 = 100.0;
const DEFAULT_INCREMENT: f64 = 10.0;

/// Projected free cash flows, one per year, in chronological order.
///
/// Never empty: the last value is the base of the terminal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CashFlowProjection(Vec<f64>);

impl CashFlowProjection {
    pub fn new(cash_flows: Vec<f64>) -> DcfResult<Self> {
        if cash_flows.is_empty() {
            return Err(DcfError::EmptyProjection);
        }
        for (i, value) in cash_flows.iter().enumerate() {
            ensure_finite(&format!("cash_flows[{}]", i), *value)?;
        }
        Ok(Self(cash_flows))
    }

    /// The suggested series `100, 110, 120, ...` for `years` periods.
    pub fn default_series(years: u32) -> DcfResult<Self> {
        Self::new((0..years as usize).map(default_cash_flow).collect())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Final projected cash flow (base of the terminal value).
    pub fn last(&self) -> f64 {
        self.0[self.0.len() - 1]
    }
}

/// Default cash flow for the zero-based projection year `index`.
pub fn default_cash_flow(index: usize) -> f64 {
    DEFAULT_BASE + DEFAULT_INCREMENT * index as f64
}

impl TryFrom<Vec<f64>> for CashFlowProjection {
    type Error = DcfError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CashFlowProjection> for Vec<f64> {
    fn from(value: CashFlowProjection) -> Self {
        value.0
    }
}

impl AsRef<[f64]> for CashFlowProjection {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}
