//! Command handlers for the `dcfcalc` binary.

pub mod compute;
pub mod explain;
pub mod interactive;
