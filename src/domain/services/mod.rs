//! Domain Services
//!
//! Stateless valuation logic. Nothing here performs I/O.

mod dcf;

pub use dcf::{compute, compute_projection, discount_factor, terminal_value};
