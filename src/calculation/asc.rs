//! Alternative Simplified Credit calculation.
//!
//! This module applies the two-branch ASC formula of IRC §41(c)(4) to the
//! current-year QRE total.

use rust_decimal::Decimal;

use crate::config::CreditRates;
use crate::models::{AscMethod, AscResult, CalculationInput};

use super::rounding::{format_currency, format_rate, round_currency};

/// Returns the prior-year QREs that fall inside the lookback window.
///
/// The input lists prior years oldest first, so the window is the tail of
/// the list.
pub fn lookback_window<'a>(input: &'a CalculationInput, rates: &CreditRates) -> &'a [Decimal] {
    let qres = &input.prior_year_qres;
    &qres[qres.len().saturating_sub(rates.lookback_years)..]
}

/// Computes the federal credit for the current-year QREs.
///
/// # First-time branch
///
/// Used when the business is a first-time filer or the lookback window is
/// empty or all zero: the credit is 6% of the current-year QREs.
///
/// # Repeat branch
///
/// Otherwise the base amount is 50% of the average of up to three most
/// recent prior years, and the credit is 14% of the QREs above it. Every
/// intermediate is rounded to whole units before it is used.
///
/// # Examples
///
/// ```
/// use rd_credit_engine::calculation::compute_asc;
/// use rd_credit_engine::config::CreditRates;
/// use rd_credit_engine::models::{AscMethod, CalculationInput};
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
///     prior_year_qres: vec![
///         Decimal::from(80_000),
///         Decimal::from(90_000),
///         Decimal::from(100_000),
///     ],
///     is_first_time_filer: false,
///     qualifying_activities: vec![],
/// };
///
/// let asc = compute_asc(Decimal::from(200_000), &input, &CreditRates::default());
/// assert_eq!(asc.method, AscMethod::Repeat);
/// assert_eq!(asc.base_amount, Decimal::from(45_000));
/// assert_eq!(asc.federal_credit, Decimal::from(21_700));
/// ```
pub fn compute_asc(
    current_year_qre: Decimal,
    input: &CalculationInput,
    rates: &CreditRates,
) -> AscResult {
    let window = lookback_window(input, rates);
    let has_history = window.iter().any(|qre| !qre.is_zero());

    if input.is_first_time_filer || !has_history {
        first_time_credit(current_year_qre, rates)
    } else {
        repeat_credit(current_year_qre, window, rates)
    }
}

fn first_time_credit(current_year_qre: Decimal, rates: &CreditRates) -> AscResult {
    let credit_rate = rates.first_time_rate;
    let federal_credit = round_currency(current_year_qre * credit_rate);

    AscResult {
        method: AscMethod::FirstTime,
        current_year_qre,
        prior_year_average: Decimal::ZERO,
        prior_years_used: 0,
        base_amount: Decimal::ZERO,
        excess_qre: current_year_qre,
        credit_rate,
        federal_credit,
        calculation: format!(
            "{} current-year QREs x {} = {}",
            format_currency(current_year_qre),
            format_rate(credit_rate),
            format_currency(federal_credit)
        ),
    }
}

fn repeat_credit(current_year_qre: Decimal, window: &[Decimal], rates: &CreditRates) -> AscResult {
    let sum = window.iter().fold(Decimal::ZERO, |acc, qre| acc.saturating_add(*qre));
    let prior_year_average = round_currency(sum / Decimal::from(window.len()));
    let base_amount = round_currency(prior_year_average * rates.base_percentage);
    let excess_qre = round_currency((current_year_qre - base_amount).max(Decimal::ZERO));
    let credit_rate = rates.repeat_rate;
    let federal_credit = round_currency(excess_qre * credit_rate);

    AscResult {
        method: AscMethod::Repeat,
        current_year_qre,
        prior_year_average,
        prior_years_used: window.len(),
        base_amount,
        excess_qre,
        credit_rate,
        federal_credit,
        calculation: format!(
            "({} current-year QREs - {} x {} {}-year average) x {} = {}",
            format_currency(current_year_qre),
            format_rate(rates.base_percentage),
            format_currency(prior_year_average),
            window.len(),
            format_rate(credit_rate),
            format_currency(federal_credit)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_input(is_first_time_filer: bool, prior: &[&str]) -> CalculationInput {
        CalculationInput {
            business_type: "software".to_string(),
            total_employees: 10,
            technical_employees: 4,
            average_technical_salary: dec("100000"),
            rd_allocation_percentage: dec("50"),
            contractor_costs: dec("0"),
            supplies_costs: dec("0"),
            software_costs: dec("0"),
            cloud_costs: dec("0"),
            prior_year_qres: prior.iter().map(|s| dec(s)).collect(),
            is_first_time_filer,
            qualifying_activities: vec![],
        }
    }

    fn asc(current: &str, input: &CalculationInput) -> AscResult {
        compute_asc(dec(current), input, &CreditRates::default())
    }

    // ==========================================================================
    // First-time branch
    // ==========================================================================

    #[test]
    fn test_first_time_filer_gets_6_percent() {
        let input = create_test_input(true, &[]);
        let result = asc("200000", &input);

        assert_eq!(result.method, AscMethod::FirstTime);
        assert_eq!(result.credit_rate, dec("0.06"));
        assert_eq!(result.base_amount, dec("0"));
        assert_eq!(result.prior_year_average, dec("0"));
        assert_eq!(result.excess_qre, dec("200000"));
        assert_eq!(result.federal_credit, dec("12000"));
    }

    #[test]
    fn test_first_time_flag_ignores_prior_history() {
        let input = create_test_input(true, &["80000", "90000", "100000"]);
        let result = asc("200000", &input);

        assert_eq!(result.method, AscMethod::FirstTime);
        assert_eq!(result.credit_rate, dec("0.06"));
        assert_eq!(result.base_amount, dec("0"));
        assert_eq!(result.prior_years_used, 0);
    }

    #[test]
    fn test_repeat_filer_without_history_uses_first_time_branch() {
        let input = create_test_input(false, &[]);
        let result = asc("100000", &input);

        assert_eq!(result.method, AscMethod::FirstTime);
        assert_eq!(result.federal_credit, dec("6000"));
    }

    #[test]
    fn test_all_zero_history_uses_first_time_branch() {
        let input = create_test_input(false, &["0", "0", "0"]);
        let result = asc("100000", &input);

        assert_eq!(result.method, AscMethod::FirstTime);
        assert_eq!(result.credit_rate, dec("0.06"));
    }

    #[test]
    fn test_zero_window_with_older_history_uses_first_time_branch() {
        let input = create_test_input(false, &["500000", "0", "0", "0"]);
        let result = asc("100000", &input);

        assert_eq!(result.method, AscMethod::FirstTime);
    }

    #[test]
    fn test_first_time_credit_rounds_half_up() {
        // 12,345 x 6% = 740.70 -> 741
        let input = create_test_input(true, &[]);
        assert_eq!(asc("12345", &input).federal_credit, dec("741"));
        // 25 x 6% = 1.50 -> 2
        assert_eq!(asc("25", &input).federal_credit, dec("2"));
    }

    // ==========================================================================
    // Repeat branch
    // ==========================================================================

    #[test]
    fn test_repeat_filer_three_year_example() {
        let input = create_test_input(false, &["80000", "90000", "100000"]);
        let result = asc("200000", &input);

        assert_eq!(result.method, AscMethod::Repeat);
        assert_eq!(result.prior_year_average, dec("90000"));
        assert_eq!(result.prior_years_used, 3);
        assert_eq!(result.base_amount, dec("45000"));
        assert_eq!(result.excess_qre, dec("155000"));
        assert_eq!(result.credit_rate, dec("0.14"));
        assert_eq!(result.federal_credit, dec("21700"));
    }

    #[test]
    fn test_repeat_filer_uses_most_recent_three_years() {
        let input = create_test_input(false, &["1000000", "80000", "90000", "100000"]);
        let result = asc("200000", &input);

        assert_eq!(result.prior_year_average, dec("90000"));
        assert_eq!(result.prior_years_used, 3);
        assert_eq!(result.federal_credit, dec("21700"));
    }

    #[test]
    fn test_repeat_filer_with_fewer_than_three_years() {
        // Average 50,000 -> base 25,000 -> excess 75,000 -> 10,500
        let input = create_test_input(false, &["40000", "60000"]);
        let result = asc("100000", &input);

        assert_eq!(result.method, AscMethod::Repeat);
        assert_eq!(result.prior_years_used, 2);
        assert_eq!(result.prior_year_average, dec("50000"));
        assert_eq!(result.base_amount, dec("25000"));
        assert_eq!(result.excess_qre, dec("75000"));
        assert_eq!(result.federal_credit, dec("10500"));
    }

    #[test]
    fn test_zeros_inside_window_count_toward_average() {
        // (0 + 0 + 90,000) / 3 = 30,000 -> base 15,000
        let input = create_test_input(false, &["0", "0", "90000"]);
        let result = asc("100000", &input);

        assert_eq!(result.method, AscMethod::Repeat);
        assert_eq!(result.prior_year_average, dec("30000"));
        assert_eq!(result.base_amount, dec("15000"));
    }

    #[test]
    fn test_excess_never_negative() {
        let input = create_test_input(false, &["500000", "500000", "500000"]);
        let result = asc("100000", &input);

        assert_eq!(result.base_amount, dec("250000"));
        assert_eq!(result.excess_qre, dec("0"));
        assert_eq!(result.federal_credit, dec("0"));
    }

    #[test]
    fn test_repeat_rounds_each_intermediate() {
        // Average of 100,001 and 100,002 = 100,001.5 -> 100,002
        // Base 100,002 x 50% = 50,001
        // Excess 60,000.4 - 50,001 = 9,999.4 -> 9,999
        // Credit 9,999 x 14% = 1,399.86 -> 1,400
        let input = create_test_input(false, &["100001", "100002"]);
        let result = asc("60000.4", &input);

        assert_eq!(result.prior_year_average, dec("100002"));
        assert_eq!(result.base_amount, dec("50001"));
        assert_eq!(result.excess_qre, dec("9999"));
        assert_eq!(result.federal_credit, dec("1400"));
    }

    #[test]
    fn test_base_amount_rounds_half_up() {
        // Average 90,001 x 50% = 45,000.5 -> 45,001
        let input = create_test_input(false, &["90001"]);
        let result = asc("100000", &input);

        assert_eq!(result.base_amount, dec("45001"));
        assert_eq!(result.excess_qre, dec("54999"));
    }

    #[test]
    fn test_custom_lookback_window() {
        let rates = CreditRates {
            lookback_years: 1,
            ..CreditRates::default()
        };
        let input = create_test_input(false, &["10000", "100000"]);
        let result = compute_asc(dec("200000"), &input, &rates);

        assert_eq!(result.prior_years_used, 1);
        assert_eq!(result.prior_year_average, dec("100000"));
    }

    #[test]
    fn test_lookback_window_takes_tail() {
        let input = create_test_input(false, &["1", "2", "3", "4", "5"]);
        let window = lookback_window(&input, &CreditRates::default());
        assert_eq!(window, &[dec("3"), dec("4"), dec("5")]);

        let input = create_test_input(false, &["7"]);
        let window = lookback_window(&input, &CreditRates::default());
        assert_eq!(window, &[dec("7")]);
    }

    #[test]
    fn test_calculation_strings() {
        let input = create_test_input(false, &["80000", "90000", "100000"]);
        assert_eq!(
            asc("200000", &input).calculation,
            "($200,000 current-year QREs - 50% x $90,000 3-year average) x 14% = $21,700"
        );

        let input = create_test_input(true, &[]);
        assert_eq!(
            asc("200000", &input).calculation,
            "$200,000 current-year QREs x 6% = $12,000"
        );
    }
}
