//! Pricing tier lookup.
//!
//! Maps an estimated federal credit to the flat-fee service tier whose
//! half-open credit range contains it.

use rust_decimal::Decimal;

use crate::config::PricingTable;
use crate::models::PricingTier;

/// Returns the pricing tier for a federal credit amount.
///
/// Tiers are scanned in ascending order and the first whose
/// `[min_credit, max_credit)` range contains the credit is returned. If
/// none matches, the last tier is returned; a validated table always ends
/// with an unbounded tier so this only matters for negative amounts.
///
/// # Examples
///
/// ```
/// use rd_credit_engine::calculation::map_to_pricing_tier;
/// use rd_credit_engine::config::PricingTable;
/// use rust_decimal::Decimal;
///
/// let table = PricingTable::default();
/// assert_eq!(map_to_pricing_tier(Decimal::from(4_999), &table).name, "Starter");
/// assert_eq!(map_to_pricing_tier(Decimal::from(5_000), &table).name, "Growth");
/// ```
pub fn map_to_pricing_tier(federal_credit: Decimal, table: &PricingTable) -> PricingTier {
    table
        .tiers()
        .iter()
        .find(|tier| tier.contains(federal_credit))
        .unwrap_or_else(|| table.last_tier())
        .clone()
}
