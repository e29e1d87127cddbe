//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ValuateUseCase` - Resolves inputs and computes the DCF report

pub mod valuate;

pub use valuate::{ValuateUseCase, ValuationOptions, ValuationRequest, ValuationResult};
