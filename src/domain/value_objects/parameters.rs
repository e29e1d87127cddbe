//! Valuation parameters - the scalar inputs of a DCF computation

use serde::{Deserialize, Serialize};

use crate::error::{DcfError, DcfResult};

/// Rates and first projection year for a valuation.
///
/// `discount_rate` is the WACC. `growth_rate` is the perpetual growth used for
/// the terminal value and must stay strictly below the discount rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationParameters {
    pub start_year: i32,
    pub discount_rate: f64,
    pub growth_rate: f64,
}

impl ValuationParameters {
    pub fn new(start_year: i32, discount_rate: f64, growth_rate: f64) -> Self {
        Self {
            start_year,
            discount_rate,
            growth_rate,
        }
    }

    /// Check that the rates define a finite, positive perpetuity denominator.
    ///
    /// Equal rates are a division by zero. A growth rate above the discount
    /// rate is rejected as well: the Gordon formula would flip sign.
    pub fn validate(&self) -> DcfResult<()> {
        ensure_finite("discount_rate", self.discount_rate)?;
        ensure_finite("growth_rate", self.growth_rate)?;

        if self.discount_rate == self.growth_rate {
            return Err(DcfError::RatesEqual {
                rate: self.discount_rate,
            });
        }

        if self.discount_rate < self.growth_rate {
            return Err(DcfError::GrowthExceedsDiscount {
                discount_rate: self.discount_rate,
                growth_rate: self.growth_rate,
            });
        }

        Ok(())
    }

    /// Denominator of the Gordon growth formula (`r - g`).
    pub fn spread(&self) -> f64 {
        self.discount_rate - self.growth_rate
    }

    /// Calendar year of the projection period with the given zero-based index.
    ///
    /// Saturates at `i32::MAX`; [`check_horizon`](Self::check_horizon) rejects
    /// horizons that would reach it.
    pub fn year_at(&self, index: usize) -> i32 {
        let offset = i32::try_from(index).unwrap_or(i32::MAX);
        self.start_year.saturating_add(offset)
    }

    /// Check that every year of an `n`-period horizon fits in an `i32`.
    pub fn check_horizon(&self, periods: usize) -> DcfResult<()> {
        let last_offset = i32::try_from(periods.saturating_sub(1)).ok();
        let max_start = last_offset.and_then(|offset| i32::MAX.checked_sub(offset));
        match max_start {
            Some(max) if self.start_year <= max => Ok(()),
            _ => Err(DcfError::OutOfRange {
                field: "start_year".to_string(),
                value: f64::from(self.start_year),
                min: f64::from(i32::MIN),
                max: max_start.map_or(f64::from(i32::MIN), f64::from),
            }),
        }
    }
}

pub(crate) fn ensure_finite(field: &str, value: f64) -> DcfResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DcfError::NonFiniteInput {
            field: field.to_string(),
            value,
        })
    }
}
