//! Terminal UI for the `dcfcalc` binary.
//!
//! Rendering functions return `String`s and take explicit `supports_color` /
//! `supports_unicode` flags so they can be snapshot-tested; only the
//! `print_*` helpers write to the terminal.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
