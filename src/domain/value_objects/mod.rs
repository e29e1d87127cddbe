//! Domain Value Objects
//!
//! Immutable value types describing the valuation inputs.

mod config_warning;
mod form_field;
mod parameters;
mod projection;

pub use config_warning::ConfigWarning;
pub use form_field::{snap_rate, FormField, RATE_STEP};
pub use parameters::ValuationParameters;
pub use projection::{default_cash_flow, CashFlowProjection};
