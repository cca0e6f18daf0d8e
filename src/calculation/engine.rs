//! End-to-end credit estimation.
//!
//! Runs validation, QRE, ASC, pricing and ROI in order and assembles the
//! [`CalculationResult`]. Either the full result is produced or the call
//! fails before any calculation runs.

use rust_decimal::Decimal;

use crate::config::{CreditRates, EngineConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{AscMethod, AscResult, CalculationInput, CalculationResult};

use super::asc::compute_asc;
use super::pricing::map_to_pricing_tier;
use super::qre::compute_qre;
use super::roi::compute_roi;
use super::rounding::format_rate;
use super::validation::validate_input;

/// Estimates the federal R&D credit for an input.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] carrying every hard validation error
/// when the input is rejected. No partial result is produced.
///
/// # Examples
///
/// ```
/// use rd_credit_engine::calculation::calculate;
/// use rd_credit_engine::config::EngineConfig;
/// use rd_credit_engine::models::CalculationInput;
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     business_type: "software".to_string(),
///     total_employees: 10,
///     technical_employees: 4,
///     average_technical_salary: Decimal::from(100_000),
///     rd_allocation_percentage: Decimal::from(50),
///     contractor_costs: Decimal::ZERO,
///     supplies_costs: Decimal::ZERO,
///     software_costs: Decimal::ZERO,
///     cloud_costs: Decimal::ZERO,
///     prior_year_qres: vec![],
///     is_first_time_filer: true,
///     qualifying_activities: vec!["new_product_development".to_string()],
/// };
///
/// let result = calculate(&input, &EngineConfig::default())?;
/// assert_eq!(result.qre_breakdown.total, Decimal::from(200_000));
/// assert_eq!(result.federal_credit, Decimal::from(12_000));
/// assert_eq!(result.pricing_tier.name, "Growth");
/// # Ok::<(), rd_credit_engine::error::EngineError>(())
/// ```
pub fn calculate(input: &CalculationInput, config: &EngineConfig) -> EngineResult<CalculationResult> {
    let report = validate_input(input);
    if !report.is_valid {
        return Err(EngineError::Validation {
            errors: report.errors,
        });
    }

    let rates = config.rates();
    let qre_breakdown = compute_qre(input, rates);
    let asc = compute_asc(qre_breakdown.total, input, rates);
    let federal_credit = asc.federal_credit;
    let pricing_tier = map_to_pricing_tier(federal_credit, config.pricing());
    let roi = compute_roi(federal_credit, pricing_tier.price);

    let state_credit = Decimal::ZERO;
    let assumptions = build_assumptions(input, &asc, rates);

    Ok(CalculationResult {
        qre_breakdown,
        asc,
        federal_credit,
        state_credit,
        total_benefit: federal_credit + state_credit,
        pricing_tier,
        roi,
        warnings: report.warnings,
        assumptions,
    })
}

/// Builds the assumptions list shown alongside an estimate.
fn build_assumptions(input: &CalculationInput, asc: &AscResult, rates: &CreditRates) -> Vec<String> {
    let mut assumptions = Vec::new();

    match asc.method {
        AscMethod::FirstTime => {
            let reason = if input.is_first_time_filer {
                "as this is the first year the business is claiming the credit"
            } else {
                "as no prior-year QREs were available"
            };
            assumptions.push(format!(
                "Alternative Simplified Credit (ASC), first-time filer method: {} of current-year QREs, {}",
                format_rate(asc.credit_rate),
                reason
            ));
        }
        AscMethod::Repeat => assumptions.push(format!(
            "Alternative Simplified Credit (ASC), repeat filer method: {} of QREs above {} of the {}-year prior average",
            format_rate(asc.credit_rate),
            format_rate(rates.base_percentage),
            asc.prior_years_used
        )),
    }

    assumptions.push(
        "Wages reflect the stated share of technical staff time spent on qualified research"
            .to_string(),
    );
    assumptions.push(format!(
        "Contract research expenses are limited to {} under IRC Section 41(b)(3)",
        format_rate(rates.contractor_limitation)
    ));

    if input.has_cloud_or_software_costs() {
        assumptions.push(
            "Cloud computing and software costs are included in full, assuming they were used directly in qualified research"
                .to_string(),
        );
    }

    assumptions.push(
        "Federal credit only; state R&D credits are not included in this estimate".to_string(),
    );
    assumptions.push(
        "Estimate is based on self-reported figures and should be reviewed by a CPA before filing"
            .to_string(),
    );

    assumptions
}
