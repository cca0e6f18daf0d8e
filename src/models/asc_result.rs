//! Alternative Simplified Credit result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which branch of the ASC formula produced a credit.
///
/// # Example
///
/// ```
/// use rd_credit_engine::models::AscMethod;
///
/// let json = serde_json::to_string(&AscMethod::FirstTime).unwrap();
/// assert_eq!(json, "\"first_time\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AscMethod {
    /// Flat rate on all current-year QREs; no usable prior-year history.
    FirstTime,
    /// Rate on QREs above half the prior-year average.
    Repeat,
}

impl AscMethod {
    /// Returns the label used in audit strings and assumptions.
    pub fn label(&self) -> &'static str {
        match self {
            AscMethod::FirstTime => "first-time",
            AscMethod::Repeat => "repeat",
        }
    }
}

/// The outcome of applying the ASC method to current-year QREs.
///
/// All currency fields are already rounded to whole units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AscResult {
    /// The branch that was applied.
    pub method: AscMethod,
    /// Total QREs for the year being claimed.
    pub current_year_qre: Decimal,
    /// Rounded mean of the prior-year QREs in the lookback window.
    pub prior_year_average: Decimal,
    /// Number of prior-year entries that entered the average.
    pub prior_years_used: usize,
    /// The base amount QREs must exceed to earn the repeat rate.
    pub base_amount: Decimal,
    /// Current-year QREs above the base amount, never negative.
    pub excess_qre: Decimal,
    /// The credit rate applied to the excess.
    pub credit_rate: Decimal,
    /// The resulting federal credit.
    pub federal_credit: Decimal,
    /// Human-readable working for the credit.
    pub calculation: String,
}
