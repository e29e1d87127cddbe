//! Valuate Use Case
//!
//! Orchestrates a single DCF valuation.
//!
//! This module handles:
//! - Layering inputs (flags over scenario file over config defaults)
//! - Flagging values outside the form bounds
//! - Running the calculator and bundling the report with its context

mod options;
mod result;
mod use_case;

pub use options::{ValuationOptions, ValuationRequest};
pub use result::ValuationResult;
pub use use_case::ValuateUseCase;
