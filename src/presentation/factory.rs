//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::ValuateUseCase;
use crate::config::DefaultsConfig;
use crate::infrastructure::TomlScenarioRepository;

/// Type alias for the concrete ValuateUseCase reading TOML scenarios
pub type ConcreteValuateUseCase = ValuateUseCase<TomlScenarioRepository>;

/// Create a valuate use case with all dependencies wired up
pub fn create_valuate_use_case(defaults: DefaultsConfig) -> ConcreteValuateUseCase {
    ValuateUseCase::new(TomlScenarioRepository::new(), defaults)
}
