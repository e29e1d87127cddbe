//! Input form fields and the bounds the form accepts for them
//!
//! The bounds are form constraints, not formula constraints: the calculator
//! itself is defined for any finite rates with `growth < discount`.

use crate::error::{DcfError, DcfResult};

/// Slider step for both rates.
pub const RATE_STEP: f64 = 0.01;

/// A bounded numeric field of the valuation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    StartYear,
    Years,
    DiscountRate,
    GrowthRate,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::StartYear,
        FormField::Years,
        FormField::DiscountRate,
        FormField::GrowthRate,
    ];

    /// Config/JSON key of the field.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::StartYear => "start_year",
            FormField::Years => "years",
            FormField::DiscountRate => "discount_rate",
            FormField::GrowthRate => "growth_rate",
        }
    }

    /// Prompt label shown by the interactive form.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::StartYear => "Start year",
            FormField::Years => "Number of projection years",
            FormField::DiscountRate => "Discount rate (WACC)",
            FormField::GrowthRate => "Long-term growth rate (g)",
        }
    }

    /// Inclusive `(min, max)` accepted by the form.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            FormField::StartYear => (2000.0, 2100.0),
            FormField::Years => (1.0, 10.0),
            FormField::DiscountRate => (0.01, 0.20),
            FormField::GrowthRate => (0.00, 0.10),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let (min, max) = self.bounds();
        value >= min && value <= max
    }

    pub fn check(&self, value: f64) -> DcfResult<()> {
        if self.contains(value) {
            return Ok(());
        }
        let (min, max) = self.bounds();
        Err(DcfError::OutOfRange {
            field: self.key().to_string(),
            value,
            min,
            max,
        })
    }
}

/// Round a rate to the nearest slider step (0.01).
///
/// The step count is divided by 100 so the result is the correctly rounded
/// double of the two-decimal value.
pub fn snap_rate(rate: f64) -> f64 {
    (rate * 100.0).round() / 100.0
}
