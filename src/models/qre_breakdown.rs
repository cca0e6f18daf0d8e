//! Qualified Research Expense breakdown model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Human-readable working for each QRE subtotal.
///
/// These strings form the audit trail shown to the user and handed to
/// document generation. They never feed back into the math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QreCalculations {
    /// How qualified wages were derived.
    pub wages: String,
    /// How qualified contractor costs were derived.
    pub contractors: String,
    /// How qualified supplies were derived.
    pub supplies: String,
    /// How qualified cloud and software costs were derived.
    pub cloud_and_software: String,
}

/// Qualified Research Expenses split by IRS category.
///
/// Every subtotal is rounded to whole currency units independently and
/// `total` is the sum of the rounded subtotals.
///
/// # Example
///
/// ```
/// use rd_credit_engine::models::{QreBreakdown, QreCalculations};
/// use rust_decimal::Decimal;
///
/// let breakdown = QreBreakdown {
///     wages: Decimal::from(150_000),
///     contractors: Decimal::from(65_000),
///     supplies: Decimal::from(5_000),
///     cloud_and_software: Decimal::from(12_000),
///     total: Decimal::from(232_000),
///     calculations: QreCalculations {
///         wages: String::new(),
///         contractors: String::new(),
///         supplies: String::new(),
///         cloud_and_software: String::new(),
///     },
/// };
/// assert_eq!(breakdown.subtotal_sum(), breakdown.total);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QreBreakdown {
    /// Qualified wages of technical staff.
    pub wages: Decimal,
    /// Qualified contract research expenses.
    pub contractors: Decimal,
    /// Qualified supplies.
    pub supplies: Decimal,
    /// Qualified cloud computing and software costs.
    pub cloud_and_software: Decimal,
    /// Sum of the four subtotals.
    pub total: Decimal,
    /// Audit trail for each subtotal.
    pub calculations: QreCalculations,
}

impl QreBreakdown {
    /// Returns the sum of the four category subtotals.
    pub fn subtotal_sum(&self) -> Decimal {
        self.wages + self.contractors + self.supplies + self.cloud_and_software
    }
}
