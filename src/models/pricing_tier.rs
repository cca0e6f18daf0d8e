//! Service pricing tier model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A flat-fee service tier covering a half-open range of federal credit.
///
/// A tier contains a credit amount when `min_credit <= amount` and, if
/// `max_credit` is set, `amount < max_credit`. An unset `max_credit` means
/// the tier is unbounded above.
///
/// # Example
///
/// ```
/// use rd_credit_engine::models::PricingTier;
/// use rust_decimal::Decimal;
///
/// let starter = PricingTier {
///     tier: 1,
///     name: "Starter".to_string(),
///     min_credit: Decimal::ZERO,
///     max_credit: Some(Decimal::from(5_000)),
///     price: Decimal::from(750),
/// };
/// assert!(starter.contains(Decimal::from(4_999)));
/// assert!(!starter.contains(Decimal::from(5_000)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Tier number, starting at 1.
    pub tier: u8,
    /// Display name of the tier.
    pub name: String,
    /// Inclusive lower bound of the credit range.
    pub min_credit: Decimal,
    /// Exclusive upper bound of the credit range, if bounded.
    #[serde(default)]
    pub max_credit: Option<Decimal>,
    /// Flat service fee for this tier.
    pub price: Decimal,
}

impl PricingTier {
    /// Returns true if the credit amount falls inside this tier's range.
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.min_credit && self.max_credit.is_none_or(|max| amount < max)
    }
}
