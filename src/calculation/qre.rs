//! Qualified Research Expense calculation.
//!
//! This module converts raw wage, contractor, supply, software and cloud
//! figures into QRE categories under IRC §41(b).

use rust_decimal::Decimal;

use crate::config::CreditRates;
use crate::models::{CalculationInput, QreBreakdown, QreCalculations};

use super::rounding::{format_currency, format_rate, round_currency};

/// Computes the QRE breakdown for a validated input.
///
/// Each category is rounded to whole currency units on its own, and the
/// total is the sum of the rounded categories:
///
/// - wages: technical employees x average salary x allocation / 100
/// - contractors: contractor costs x the contractor limitation (65%)
/// - supplies: supplies costs, in full
/// - cloud and software: cloud costs + software costs, in full
///
/// Amounts beyond the representable range saturate rather than panic;
/// [`validate_input`](super::validate_input) rejects such inputs first.
///
/// # Examples
///
/// ```
/// use rd_credit_engine::calculation::compute_qre;
/// use rd_credit_engine::config::CreditRates;
/// use rd_credit_engine::models::CalculationInput;
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     business_type: "software".to_string(),
///     total_employees: 10,
///     technical_employees: 3,
///     average_technical_salary: Decimal::from(100_000),
///     rd_allocation_percentage: Decimal::from(50),
///     contractor_costs: Decimal::from(100_000),
///     supplies_costs: Decimal::from(5_000),
///     software_costs: Decimal::from(2_000),
///     cloud_costs: Decimal::from(10_000),
///     prior_year_qres: vec![],
///     is_first_time_filer: true,
///     qualifying_activities: vec![],
/// };
///
/// let qre = compute_qre(&input, &CreditRates::default());
/// assert_eq!(qre.wages, Decimal::from(150_000));
/// assert_eq!(qre.contractors, Decimal::from(65_000));
/// assert_eq!(qre.total, Decimal::from(232_000));
/// ```
pub fn compute_qre(input: &CalculationInput, rates: &CreditRates) -> QreBreakdown {
    let allocation = input.rd_allocation_percentage;
    let wages = round_currency(
        Decimal::from(input.technical_employees)
            .saturating_mul(input.average_technical_salary)
            .saturating_mul(allocation)
            / Decimal::ONE_HUNDRED,
    );
    let contractors =
        round_currency(input.contractor_costs.saturating_mul(rates.contractor_limitation));
    let supplies = round_currency(input.supplies_costs);
    let cloud_and_software =
        round_currency(input.cloud_costs.saturating_add(input.software_costs));

    let total = wages
        .saturating_add(contractors)
        .saturating_add(supplies)
        .saturating_add(cloud_and_software);

    let calculations = QreCalculations {
        wages: format!(
            "{} technical employees x {} average salary x {}% R&D allocation = {}",
            input.technical_employees,
            format_currency(input.average_technical_salary),
            allocation.normalize(),
            format_currency(wages)
        ),
        contractors: format!(
            "{} contractor costs x {} qualified = {}",
            format_currency(input.contractor_costs),
            format_rate(rates.contractor_limitation),
            format_currency(contractors)
        ),
        supplies: format!(
            "{} supplies costs (100% qualified) = {}",
            format_currency(input.supplies_costs),
            format_currency(supplies)
        ),
        cloud_and_software: format!(
            "{} cloud costs + {} software costs (100% qualified) = {}",
            format_currency(input.cloud_costs),
            format_currency(input.software_costs),
            format_currency(cloud_and_software)
        ),
    };

    QreBreakdown {
        wages,
        contractors,
        supplies,
        cloud_and_software,
        total,
        calculations,
    }
}
