//! Discounted cash flow calculator
//!
//! End-of-year discounting (no mid-year convention) with a Gordon-growth
//! terminal value based on the last projected cash flow:
//!
//! ```text
//! TV    = CF[n-1] * (1 + g) / (r - g)
//! DCF_i = CF[i] / (1 + r)^(i + 1)
//! total = Σ DCF_i + TV / (1 + r)^n
//! ```
//!
//! The sum is a plain left-to-right fold starting at `0.0`, without error
//! compensation, matching CPython 3.11 and earlier `sum()`.

use tracing::debug;

use crate::domain::entities::{TerminalValue, ValuationReport, YearlyResult};
use crate::domain::value_objects::{CashFlowProjection, ValuationParameters};
use crate::error::DcfResult;

/// Compute the DCF valuation of `cash_flows` starting at `start_year`.
///
/// Fails on an empty projection, non-finite inputs, or when the growth rate is
/// not strictly below the discount rate. No rounding is applied.
pub fn compute(
    cash_flows: &[f64],
    discount_rate: f64,
    growth_rate: f64,
    start_year: i32,
) -> DcfResult<ValuationReport> {
    let projection = CashFlowProjection::new(cash_flows.to_vec())?;
    let params = ValuationParameters::new(start_year, discount_rate, growth_rate);
    compute_projection(&projection, &params)
}

/// Same as [`compute`] for already-validated value objects.
pub fn compute_projection(
    projection: &CashFlowProjection,
    params: &ValuationParameters,
) -> DcfResult<ValuationReport> {
    params.validate()?;

    let n = projection.len();
    params.check_horizon(n)?;
    let tv = terminal_value(projection.last(), params);

    let years: Vec<YearlyResult> = projection
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &cash_flow)| YearlyResult {
            year: params.year_at(i),
            cash_flow,
            discounted_cash_flow: cash_flow / discount_factor(params.discount_rate, i + 1),
        })
        .collect();

    let discounted_tv = tv / discount_factor(params.discount_rate, n);
    let total = years
        .iter()
        .map(|y| y.discounted_cash_flow)
        .fold(0.0, |acc, d| acc + d)
        + discounted_tv;

    debug!(
        years = n,
        discount_rate = params.discount_rate,
        growth_rate = params.growth_rate,
        terminal_value = tv,
        total,
        "computed valuation"
    );

    Ok(ValuationReport::new(
        years,
        TerminalValue {
            value: tv,
            discounted: discounted_tv,
        },
        total,
    ))
}

/// Gordon-growth perpetuity of `last_cash_flow`, valued at the end of the horizon.
pub fn terminal_value(last_cash_flow: f64, params: &ValuationParameters) -> f64 {
    last_cash_flow * (1.0 + params.growth_rate) / params.spread()
}

/// `(1 + rate)^periods`.
///
/// `powf` (libm `pow`) rather than `powi`, so results agree bit-for-bit with
/// other `pow`-based implementations of the same formula.
pub fn discount_factor(rate: f64, periods: usize) -> f64 {
    (1.0 + rate).powf(periods as f64)
}
