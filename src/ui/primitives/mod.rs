//! Smallest rendering building blocks: icons, borders, colored text.

pub mod border;
pub mod icon;
pub mod text;
