//! Configuration types for credit estimation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, along with the checks
//! that keep a loaded configuration internally consistent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::PricingTier;

use super::defaults::{
    BASE_AMOUNT_PERCENTAGE, CONTRACTOR_QUALIFICATION_RATE, FIRST_TIME_CREDIT_RATE, LOOKBACK_YEARS,
    REPEAT_CREDIT_RATE, default_pricing_tiers,
};

/// Rate constants for the QRE and ASC calculations.
///
/// Deserialized from `credit.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditRates {
    /// Credit rate when there is no usable prior-year history.
    pub first_time_rate: Decimal,
    /// Credit rate on QREs above the base amount.
    pub repeat_rate: Decimal,
    /// Fraction of the prior-year average used as the base amount.
    pub base_percentage: Decimal,
    /// Fraction of contractor costs that qualifies.
    pub contractor_limitation: Decimal,
    /// Number of most recent prior years averaged for the base amount.
    pub lookback_years: usize,
}

impl Default for CreditRates {
    fn default() -> Self {
        Self {
            first_time_rate: FIRST_TIME_CREDIT_RATE,
            repeat_rate: REPEAT_CREDIT_RATE,
            base_percentage: BASE_AMOUNT_PERCENTAGE,
            contractor_limitation: CONTRACTOR_QUALIFICATION_RATE,
            lookback_years: LOOKBACK_YEARS,
        }
    }
}

impl CreditRates {
    /// Checks that every rate is a fraction in `[0, 1]` and the lookback
    /// window covers at least one year.
    pub fn validate(&self) -> EngineResult<()> {
        let fractions = [
            ("first_time_rate", self.first_time_rate),
            ("repeat_rate", self.repeat_rate),
            ("base_percentage", self.base_percentage),
            ("contractor_limitation", self.contractor_limitation),
        ];

        for (name, value) in fractions {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(EngineError::InvalidConfig {
                    message: format!("{} must be between 0 and 1, got {}", name, value),
                });
            }
        }

        if self.lookback_years == 0 {
            return Err(EngineError::InvalidConfig {
                message: "lookback_years must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

/// An ascending table of pricing tiers covering $0 to unbounded.
///
/// Only constructed through [`PricingTable::new`] or `Default`, so a table
/// is always non-empty and contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingTable {
    tiers: Vec<PricingTier>,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            tiers: default_pricing_tiers(),
        }
    }
}

impl PricingTable {
    /// Creates a pricing table after checking it covers $0 to unbounded
    /// without gaps or overlaps.
    pub fn new(tiers: Vec<PricingTier>) -> EngineResult<Self> {
        let table = Self { tiers };
        table.validate()?;
        Ok(table)
    }

    /// Returns the tiers in ascending order.
    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    /// Returns the highest tier.
    pub fn last_tier(&self) -> &PricingTier {
        // non-empty by construction
        &self.tiers[self.tiers.len() - 1]
    }

    /// Checks the table is non-empty, starts at zero, is contiguous and
    /// ends with an unbounded tier.
    fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| Err(EngineError::InvalidConfig { message });

        let Some(first) = self.tiers.first() else {
            return invalid("pricing table is empty".to_string());
        };
        if first.min_credit != Decimal::ZERO {
            return invalid(format!(
                "first pricing tier must start at 0, got {}",
                first.min_credit
            ));
        }

        for (index, tier) in self.tiers.iter().enumerate() {
            if tier.price < Decimal::ZERO {
                return invalid(format!("tier '{}' has a negative price", tier.name));
            }

            let next = self.tiers.get(index + 1);
            match (tier.max_credit, next) {
                (Some(max), _) if max <= tier.min_credit => {
                    return invalid(format!("tier '{}' has an empty credit range", tier.name));
                }
                (Some(max), Some(next)) if max != next.min_credit => {
                    return invalid(format!(
                        "tier '{}' ends at {} but tier '{}' starts at {}",
                        tier.name, max, next.name, next.min_credit
                    ));
                }
                (Some(_), None) => {
                    return invalid(format!("last tier '{}' must be unbounded", tier.name));
                }
                (None, Some(_)) => {
                    return invalid(format!(
                        "only the last tier may be unbounded, but '{}' is not last",
                        tier.name
                    ));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// The complete engine configuration.
///
/// Immutable once built; the engine only ever reads it.
///
/// # Example
///
/// ```
/// use rd_credit_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.pricing().tiers().len(), 7);
/// assert_eq!(config.rates().lookback_years, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    rates: CreditRates,
    pricing: PricingTable,
}

impl EngineConfig {
    /// Creates an EngineConfig from its component parts.
    pub fn new(rates: CreditRates, pricing: PricingTable) -> EngineResult<Self> {
        rates.validate()?;
        Ok(Self { rates, pricing })
    }

    /// Returns the credit rate constants.
    pub fn rates(&self) -> &CreditRates {
        &self.rates
    }

    /// Returns the pricing table.
    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tier(n: u8, min: i64, max: Option<i64>) -> PricingTier {
        PricingTier {
            tier: n,
            name: format!("Tier {}", n),
            min_credit: Decimal::from(min),
            max_credit: max.map(Decimal::from),
            price: Decimal::from(100 * i64::from(n)),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.rates().validate().is_ok());
        assert!(PricingTable::new(config.pricing().tiers().to_vec()).is_ok());
    }

    #[test]
    fn test_rates_reject_value_above_one() {
        let rates = CreditRates {
            repeat_rate: dec("1.4"),
            ..CreditRates::default()
        };
        let err = rates.validate().unwrap_err();
        assert!(err.to_string().contains("repeat_rate"));
    }

    #[test]
    fn test_rates_reject_zero_lookback() {
        let rates = CreditRates {
            lookback_years: 0,
            ..CreditRates::default()
        };
        assert!(matches!(
            rates.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_pricing_rejects_empty_table() {
        let result = PricingTable::new(vec![]);
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_pricing_rejects_nonzero_start() {
        let result = PricingTable::new(vec![tier(1, 100, None)]);
        assert!(result.unwrap_err().to_string().contains("start at 0"));
    }

    #[test]
    fn test_pricing_rejects_gap() {
        let result = PricingTable::new(vec![tier(1, 0, Some(5_000)), tier(2, 6_000, None)]);
        assert!(result.unwrap_err().to_string().contains("ends at 5000"));
    }

    #[test]
    fn test_pricing_rejects_bounded_last_tier() {
        let result = PricingTable::new(vec![tier(1, 0, Some(5_000))]);
        assert!(result.unwrap_err().to_string().contains("must be unbounded"));
    }

    #[test]
    fn test_pricing_rejects_unbounded_middle_tier() {
        let result = PricingTable::new(vec![tier(1, 0, None), tier(2, 5_000, None)]);
        assert!(result.unwrap_err().to_string().contains("only the last tier"));
    }

    #[test]
    fn test_pricing_rejects_empty_range() {
        let result = PricingTable::new(vec![tier(1, 0, Some(0)), tier(2, 0, None)]);
        assert!(result.unwrap_err().to_string().contains("empty credit range"));
    }

    #[test]
    fn test_pricing_accepts_single_unbounded_tier() {
        let table = PricingTable::new(vec![tier(1, 0, None)]).unwrap();
        assert_eq!(table.tiers().len(), 1);
        assert_eq!(table.last_tier().tier, 1);
    }

    #[test]
    fn test_default_last_tier_is_unbounded() {
        let table = PricingTable::default();
        assert_eq!(table.last_tier().tier, 7);
        assert_eq!(table.last_tier().max_credit, None);
    }

    #[test]
    fn test_engine_config_new_validates_parts() {
        let rates = CreditRates {
            first_time_rate: dec("-0.01"),
            ..CreditRates::default()
        };
        assert!(EngineConfig::new(rates, PricingTable::default()).is_err());
    }
}
