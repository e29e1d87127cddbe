//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod scenario;

pub use scenario::TomlScenarioRepository;
