//! Built-in regulatory constants and pricing bands.
//!
//! These mirror the shipped `config/default` directory. Legislative changes
//! to the ASC rates belong here and in that directory, nowhere else.

use rust_decimal::Decimal;

use crate::models::PricingTier;

/// ASC rate for filers without usable prior-year QREs (6%).
///
/// IRC §41(c)(4)(B).
pub const FIRST_TIME_CREDIT_RATE: Decimal = Decimal::from_parts(6, 0, 0, false, 2);

/// ASC rate on QREs above the base amount (14%).
///
/// IRC §41(c)(4)(A).
pub const REPEAT_CREDIT_RATE: Decimal = Decimal::from_parts(14, 0, 0, false, 2);

/// Share of the prior-year average that forms the base amount (50%).
pub const BASE_AMOUNT_PERCENTAGE: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Share of contract research expenses that qualifies (65%).
///
/// IRC §41(b)(3)(A).
pub const CONTRACTOR_QUALIFICATION_RATE: Decimal = Decimal::from_parts(65, 0, 0, false, 2);

/// Number of prior years averaged by the repeat-filer branch.
pub const LOOKBACK_YEARS: usize = 3;

/// `(tier, name, min_credit, max_credit, price)` for the built-in table.
const PRICING_BANDS: [(u8, &str, i64, Option<i64>, i64); 7] = [
    (1, "Starter", 0, Some(5_000), 750),
    (2, "Growth", 5_000, Some(15_000), 1_500),
    (3, "Professional", 15_000, Some(30_000), 2_500),
    (4, "Advanced", 30_000, Some(50_000), 3_500),
    (5, "Premium", 50_000, Some(100_000), 5_000),
    (6, "Enterprise", 100_000, Some(150_000), 7_500),
    (7, "Enterprise Plus", 150_000, None, 10_000),
];

/// Returns the built-in pricing tiers in ascending order.
pub fn default_pricing_tiers() -> Vec<PricingTier> {
    PRICING_BANDS
        .iter()
        .map(|&(tier, name, min, max, price)| PricingTier {
            tier,
            name: name.to_string(),
            min_credit: Decimal::from(min),
            max_credit: max.map(Decimal::from),
            price: Decimal::from(price),
        })
        .collect()
}
