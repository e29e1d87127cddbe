//! dcfcalc - Discounted Cash Flow valuation calculator
//!
//! Takes a short list of projected free cash flows, a discount rate (WACC)
//! and a long-term growth rate, and produces a per-year breakdown, a
//! Gordon-growth terminal value and the total enterprise value.
//!
//! ## Layers
//!
//! - `domain` - the calculator and its value objects (pure, no I/O)
//! - `application` - the valuate use case
//! - `infrastructure` - scenario files on disk
//! - `presentation` - CLI definitions, use case wiring, JSON payloads
//! - `config` - layered configuration (flags, env, files, defaults)

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{ValuateUseCase, ValuationOptions, ValuationRequest, ValuationResult};
pub use config::{ColorMode, Config};
pub use domain::entities::{ReportRow, TerminalValue, ValuationInputs, ValuationReport, YearlyResult};
pub use domain::services::compute;
pub use domain::value_objects::{CashFlowProjection, FormField, ValuationParameters};
pub use error::{DcfError, DcfResult};
