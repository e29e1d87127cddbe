//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Repository implementations (TOML scenario files)

pub mod repositories;

pub use repositories::TomlScenarioRepository;
