//! Configuration loading and management for the R&D credit engine.
//!
//! This module holds the regulatory rate constants and the service pricing
//! table, either as built-in defaults or loaded from a directory of YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use rd_credit_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap().into_config();
//! println!("Tiers: {}", config.pricing().tiers().len());
//! ```

mod defaults;
mod loader;
mod types;

pub use defaults::{
    BASE_AMOUNT_PERCENTAGE, CONTRACTOR_QUALIFICATION_RATE, FIRST_TIME_CREDIT_RATE, LOOKBACK_YEARS,
    REPEAT_CREDIT_RATE, default_pricing_tiers,
};
pub use loader::ConfigLoader;
pub use types::{CreditRates, EngineConfig, PricingTable};
