//! Domain Ports
//!
//! Interfaces the domain needs from the outside world, implemented in
//! `infrastructure`.

pub mod scenario_repository;

pub use scenario_repository::{LoadedScenario, ScenarioRepository};
