//! Domain Layer
//!
//! This is the core of dcfcalc - pure valuation logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable inputs (ValuationParameters, CashFlowProjection, FormField)
//! - `entities/` - Gathered inputs and the computation output (ValuationReport)
//! - `services/` - The discounting formula itself
//! - `ports/` - Interfaces for input sources (ScenarioRepository)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or terminal
//! 2. **Pure Functions** - Identical inputs give bit-identical reports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
