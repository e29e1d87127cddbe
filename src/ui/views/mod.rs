//! Full-screen renderings per command.

pub mod interactive;
pub mod valuation;
