//! Reusable output blocks composed from widgets.

pub mod error;
pub mod header;
pub mod summary;
