//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::PricingTier;

use super::types::{CreditRates, EngineConfig, PricingTable};

/// Layout of `pricing.yaml`.
#[derive(Debug, Deserialize)]
struct PricingFile {
    tiers: Vec<PricingTier>,
}

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates them into an [`EngineConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── credit.yaml    # ASC and QRE rate constants
/// └── pricing.yaml   # Service pricing tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use rd_credit_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Repeat-filer rate: {}", loader.config().rates().repeat_rate);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The rates or pricing table fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates = Self::load_yaml::<CreditRates>(&path.join("credit.yaml"))?;
        let pricing_file = Self::load_yaml::<PricingFile>(&path.join("pricing.yaml"))?;
        let pricing = PricingTable::new(pricing_file.tiers)?;

        let config = EngineConfig::new(rates, pricing)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader, returning the engine configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}
