//! Core data models for the R&D credit engine.
//!
//! This module contains all the domain models used throughout the engine.

mod asc_result;
mod calculation_result;
mod input;
mod pricing_tier;
mod qre_breakdown;

pub use asc_result::{AscMethod, AscResult};
pub use calculation_result::{CalculationResult, Roi};
pub use input::CalculationInput;
pub use pricing_tier::PricingTier;
pub use qre_breakdown::{QreBreakdown, QreCalculations};
