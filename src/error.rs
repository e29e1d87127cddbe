//! Error types for dcfcalc
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dcfcalc operations
pub type DcfResult<T> = Result<T, DcfError>;

/// Main error type for dcfcalc operations
#[derive(Error, Debug)]
pub enum DcfError {
    /// Discount rate equals growth rate, so the terminal value divides by zero
    #[error("discount rate ({rate}) equals growth rate; the terminal value is undefined")]
    RatesEqual { rate: f64 },

    /// Growth rate above the discount rate yields a negative perpetuity
    #[error("growth rate ({growth_rate}) exceeds discount rate ({discount_rate})")]
    GrowthExceedsDiscount {
        discount_rate: f64,
        growth_rate: f64,
    },

    /// No projected cash flows were supplied
    #[error("cash flow projection is empty - at least one year is required")]
    EmptyProjection,

    /// NaN or infinite input
    #[error("{field} must be a finite number (got {value})")]
    NonFiniteInput { field: String, value: f64 },

    /// Value outside the bounds the input form accepts
    #[error("{field} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Config or scenario file failed to parse
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Interactive form was declined by the user
    #[error("valuation aborted by user")]
    Aborted,
}

impl DcfError {
    /// True for errors caused by the valuation inputs themselves.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            DcfError::RatesEqual { .. }
                | DcfError::GrowthExceedsDiscount { .. }
                | DcfError::EmptyProjection
                | DcfError::NonFiniteInput { .. }
        )
    }
}
