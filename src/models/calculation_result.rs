//! Calculation result models for the R&D credit engine.
//!
//! This module contains the [`CalculationResult`] type and the [`Roi`]
//! metrics that capture every output of a credit estimate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AscResult, PricingTier, QreBreakdown};

/// Return-on-investment metrics for the service fee.
///
/// # Example
///
/// ```
/// use rd_credit_engine::models::Roi;
/// use rust_decimal::Decimal;
///
/// let roi = Roi {
///     net_benefit: Decimal::from(19_200),
///     roi_multiple: Decimal::new(87, 1),
///     payback_days: Some(Decimal::from(42)),
/// };
/// assert!(roi.payback_days.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roi {
    /// Credit minus service cost. Negative when the fee exceeds the credit.
    pub net_benefit: Decimal,
    /// Credit divided by service cost, to one decimal place.
    pub roi_multiple: Decimal,
    /// Days of credit needed to recover the fee.
    ///
    /// `None` when the multiple rounds to zero and no finite payback exists.
    pub payback_days: Option<Decimal>,
}

/// The complete result of a credit estimate.
///
/// Captures the QRE breakdown, the ASC working, the chosen pricing tier,
/// ROI metrics and the warnings and assumptions to present to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Qualified Research Expenses by category.
    pub qre_breakdown: QreBreakdown,
    /// Working for the Alternative Simplified Credit.
    pub asc: AscResult,
    /// The estimated federal credit.
    pub federal_credit: Decimal,
    /// State credit. Always zero; only the federal credit is estimated.
    pub state_credit: Decimal,
    /// Federal plus state credit.
    pub total_benefit: Decimal,
    /// The service tier matching the federal credit.
    pub pricing_tier: PricingTier,
    /// ROI of the tier price against the federal credit.
    pub roi: Roi,
    /// Non-fatal input concerns, in the order they were detected.
    pub warnings: Vec<String>,
    /// Assumptions the estimate rests on, in presentation order.
    pub assumptions: Vec<String>,
}
