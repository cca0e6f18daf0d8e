//! Input validation for credit estimates.
//!
//! This module checks the structural and business-rule sanity of a
//! [`CalculationInput`]. Hard errors abort the estimate; soft warnings are
//! carried into the result for the user to review.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CalculationInput;

/// Activity identifier for custom GPT / LLM application development.
pub const CUSTOM_GPT_ACTIVITY: &str = "custom_gpt";

/// Allocation above this percentage is flagged as unusually high.
pub const HIGH_ALLOCATION_THRESHOLD: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Allocation below this percentage is flagged as possibly incomplete.
pub const LOW_ALLOCATION_THRESHOLD: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Average technical salaries below this amount are flagged as low.
pub const LOW_SALARY_THRESHOLD: Decimal = Decimal::from_parts(40_000, 0, 0, false, 0);

/// Average technical salaries above this amount are flagged for verification.
pub const HIGH_SALARY_THRESHOLD: Decimal = Decimal::from_parts(200_000, 0, 0, false, 0);

/// Error text when more technical than total employees are reported.
pub const TECHNICAL_EXCEEDS_TOTAL: &str = "Technical employees cannot exceed total employees";

/// Error text when the R&D allocation is outside 0 to 100.
pub const ALLOCATION_OUT_OF_RANGE: &str = "R&D allocation percentage must be between 0 and 100";

/// Error text when amounts would overflow the calculation.
pub const AMOUNTS_TOO_LARGE: &str = "Amounts are too large to calculate";

/// Error text when no expense could qualify.
pub const NO_QUALIFYING_EXPENSES: &str = "At least one qualifying expense is required: technical wages, contractor, supplies, software or cloud costs";

/// The outcome of validating a calculation input.
///
/// # Example
///
/// ```
/// use rd_credit_engine::calculation::ValidationReport;
///
/// let report = ValidationReport::default();
/// assert!(report.is_valid);
/// assert!(report.errors.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when there are no hard errors.
    pub is_valid: bool,
    /// Hard errors, in the order checked.
    pub errors: Vec<String>,
    /// Soft warnings, in the order checked.
    pub warnings: Vec<String>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Validates a calculation input.
///
/// Every check runs regardless of earlier failures, so the report lists all
/// hard errors and all warnings together.
///
/// # Hard errors
///
/// - More technical employees than total employees.
/// - R&D allocation outside 0 to 100.
/// - A negative salary, cost or prior-year QRE.
/// - Amounts so large that the calculation would overflow.
/// - No qualifying basis: no technical wages and no other expenses.
///
/// # Warnings (in order)
///
/// 1. Allocation above 80%.
/// 2. Allocation below 20% with technical staff present.
/// 3. Average salary above zero but below $40,000.
/// 4. Average salary above $200,000.
/// 5. Contractor costs above total technical wages.
/// 6. Custom GPT work selected with no cloud costs.
/// 7. No qualifying activities selected.
///
/// # Examples
///
/// ```
/// use rd_credit_engine::calculation::validate_input;
/// use rd_credit_engine::models::CalculationInput;
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     business_type: "software".to_string(),
///     total_employees: 3,
///     technical_employees: 5,
///     average_technical_salary: Decimal::from(90_000),
///     rd_allocation_percentage: Decimal::from(50),
///     contractor_costs: Decimal::ZERO,
///     supplies_costs: Decimal::ZERO,
///     software_costs: Decimal::ZERO,
///     cloud_costs: Decimal::ZERO,
///     prior_year_qres: vec![],
///     is_first_time_filer: true,
///     qualifying_activities: vec!["prototyping".to_string()],
/// };
///
/// let report = validate_input(&input);
/// assert!(!report.is_valid);
/// assert_eq!(report.errors, vec!["Technical employees cannot exceed total employees"]);
/// ```
pub fn validate_input(input: &CalculationInput) -> ValidationReport {
    let errors = collect_errors(input);
    let warnings = collect_warnings(input);

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn collect_errors(input: &CalculationInput) -> Vec<String> {
    let mut errors = Vec::new();

    if input.technical_employees > input.total_employees {
        errors.push(TECHNICAL_EXCEEDS_TOTAL.to_string());
    }

    let allocation = input.rd_allocation_percentage;
    if allocation < Decimal::ZERO || allocation > Decimal::ONE_HUNDRED {
        errors.push(ALLOCATION_OUT_OF_RANGE.to_string());
    }

    let amounts = [
        ("Average technical salary", input.average_technical_salary),
        ("Contractor costs", input.contractor_costs),
        ("Supplies costs", input.supplies_costs),
        ("Software costs", input.software_costs),
        ("Cloud costs", input.cloud_costs),
    ];
    for (label, amount) in amounts {
        if amount < Decimal::ZERO {
            errors.push(format!("{} cannot be negative", label));
        }
    }
    if input.prior_year_qres.iter().any(|qre| *qre < Decimal::ZERO) {
        errors.push("Prior-year QREs cannot be negative".to_string());
    }

    if checked_totals(input).is_none() {
        errors.push(AMOUNTS_TOO_LARGE.to_string());
    }

    let no_wage_basis = input.technical_employees == 0
        || input.average_technical_salary == Decimal::ZERO;
    let no_other_expenses = input.contractor_costs == Decimal::ZERO
        && input.supplies_costs == Decimal::ZERO
        && input.cloud_costs == Decimal::ZERO
        && input.software_costs == Decimal::ZERO;
    if no_wage_basis && no_other_expenses {
        errors.push(NO_QUALIFYING_EXPENSES.to_string());
    }

    errors
}

/// Sums the amounts the calculation combines, at full value, with checked
/// arithmetic. Returns the QRE ceiling and the prior-year total, or `None`
/// if any intermediate would overflow.
fn checked_totals(input: &CalculationInput) -> Option<(Decimal, Decimal)> {
    let wages = input
        .technical_wage_base()?
        .checked_mul(input.rd_allocation_percentage)?
        / Decimal::ONE_HUNDRED;

    // Each of the four rounded categories may gain at most half a unit.
    let qre_ceiling = wages
        .checked_add(input.contractor_costs)?
        .checked_add(input.supplies_costs)?
        .checked_add(input.cloud_costs)?
        .checked_add(input.software_costs)?
        .checked_add(Decimal::TWO)?;

    let prior_total = input
        .prior_year_qres
        .iter()
        .try_fold(Decimal::ZERO, |acc, qre| acc.checked_add(*qre))?;

    Some((qre_ceiling, prior_total))
}

fn collect_warnings(input: &CalculationInput) -> Vec<String> {
    let mut warnings = Vec::new();
    let allocation = input.rd_allocation_percentage;
    let salary = input.average_technical_salary;

    if allocation > HIGH_ALLOCATION_THRESHOLD {
        warnings.push(format!(
            "R&D allocation of {}% is unusually high. Make sure time records support it, as high allocations draw IRS scrutiny.",
            allocation.normalize()
        ));
    }

    if allocation < LOW_ALLOCATION_THRESHOLD && input.technical_employees > 0 {
        warnings.push(format!(
            "R&D allocation of {}% is low. Check that all qualifying activities of your technical staff are included.",
            allocation.normalize()
        ));
    }

    if salary > Decimal::ZERO && salary < LOW_SALARY_THRESHOLD {
        warnings.push(
            "Average technical salary seems low for R&D staff. Verify it reflects annual pay."
                .to_string(),
        );
    }

    if salary > HIGH_SALARY_THRESHOLD {
        warnings.push(
            "Average technical salary is high. Verify it reflects W-2 wages only.".to_string(),
        );
    }

    if input
        .technical_wage_base()
        .is_some_and(|wages| input.contractor_costs > wages)
    {
        warnings.push(
            "Contractor costs exceed total technical wages. High contractor costs need contracts showing you bear the research risk and keep rights to the results."
                .to_string(),
        );
    }

    if input.has_activity(CUSTOM_GPT_ACTIVITY) && input.cloud_costs == Decimal::ZERO {
        warnings.push(
            "Custom GPT development typically involves cloud computing costs. Add any model hosting, training or API spend."
                .to_string(),
        );
    }

    if input.qualifying_activities.is_empty() {
        warnings.push(
            "No qualifying activities selected. Select the R&D activities your business performs to support the claim."
                .to_string(),
        );
    }

    warnings
}
