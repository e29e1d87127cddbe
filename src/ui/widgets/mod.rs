//! Composite widgets built from primitives.

pub mod r#box;
pub mod table;
