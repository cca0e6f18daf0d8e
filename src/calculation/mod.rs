//! Calculation logic for the R&D credit engine.
//!
//! This module contains all the calculation functions for estimating a
//! federal R&D credit: input validation, Qualified Research Expense
//! categorisation, the Alternative Simplified Credit, pricing tier lookup
//! and ROI, plus the [`calculate`] entry point that runs them in order.

mod asc;
mod engine;
mod pricing;
mod qre;
mod roi;
mod rounding;
mod validation;

pub use asc::{compute_asc, lookback_window};
pub use engine::calculate;
pub use pricing::map_to_pricing_tier;
pub use qre::compute_qre;
pub use roi::{DAYS_PER_YEAR, compute_roi};
pub use rounding::{format_currency, format_rate, round_currency, round_to_tenths};
pub use validation::{
    ALLOCATION_OUT_OF_RANGE, AMOUNTS_TOO_LARGE, CUSTOM_GPT_ACTIVITY, HIGH_ALLOCATION_THRESHOLD,
    HIGH_SALARY_THRESHOLD, LOW_ALLOCATION_THRESHOLD, LOW_SALARY_THRESHOLD, NO_QUALIFYING_EXPENSES,
    TECHNICAL_EXCEEDS_TOTAL, ValidationReport, validate_input,
};
