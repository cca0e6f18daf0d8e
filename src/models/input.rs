//! Calculation input model.
//!
//! This module defines [`CalculationInput`], the self-reported business and
//! expense figures a credit estimate is computed from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The raw business and expense inputs for a credit estimate.
///
/// The input is immutable once constructed; the engine never mutates it.
/// Field presence and types are assumed to be coerced by the caller, while
/// business-rule sanity is checked by
/// [`validate_input`](crate::calculation::validate_input).
///
/// # Example
///
/// ```
/// use rd_credit_engine::models::CalculationInput;
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     business_type: "software".to_string(),
///     total_employees: 12,
///     technical_employees: 5,
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
/// assert_eq!(input.technical_wage_base(), Some(Decimal::from(500_000)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Free-form business category, carried through for documentation only.
    pub business_type: String,
    /// Headcount across the whole business.
    pub total_employees: u32,
    /// Headcount of engineers, scientists and other technical staff.
    pub technical_employees: u32,
    /// Average annual salary of the technical staff.
    pub average_technical_salary: Decimal,
    /// Share of technical staff time spent on qualifying R&D, 0 to 100.
    pub rd_allocation_percentage: Decimal,
    /// Amounts paid to outside contractors for qualifying research.
    pub contractor_costs: Decimal,
    /// Supplies consumed in qualifying research.
    pub supplies_costs: Decimal,
    /// Software licences used in qualifying research.
    pub software_costs: Decimal,
    /// Cloud computing spend used in qualifying research.
    pub cloud_costs: Decimal,
    /// Prior-year QRE totals, oldest first and most recent last.
    #[serde(default)]
    pub prior_year_qres: Vec<Decimal>,
    /// Whether this is the first year the business claims the credit.
    #[serde(default)]
    pub is_first_time_filer: bool,
    /// Identifiers of the qualifying activities the business performs.
    #[serde(default)]
    pub qualifying_activities: Vec<String>,
}

impl CalculationInput {
    /// Returns the technical payroll before the R&D allocation is applied,
    /// or `None` if it is too large to represent.
    pub fn technical_wage_base(&self) -> Option<Decimal> {
        Decimal::from(self.technical_employees).checked_mul(self.average_technical_salary)
    }

    /// Returns true if any cloud or software spend was reported.
    pub fn has_cloud_or_software_costs(&self) -> bool {
        self.cloud_costs > Decimal::ZERO || self.software_costs > Decimal::ZERO
    }

    /// Returns true if the given activity identifier was selected.
    pub fn has_activity(&self, activity: &str) -> bool {
        self.qualifying_activities.iter().any(|a| a == activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_input() -> CalculationInput {
        CalculationInput {
            business_type: "software".to_string(),
            total_employees: 10,
            technical_employees: 4,
            average_technical_salary: dec("95000"),
            rd_allocation_percentage: dec("60"),
            contractor_costs: dec("0"),
            supplies_costs: dec("0"),
            software_costs: dec("0"),
            cloud_costs: dec("0"),
            prior_year_qres: vec![],
            is_first_time_filer: true,
            qualifying_activities: vec![],
        }
    }

    #[test]
    fn test_deserialize_minimal_input_defaults_optional_fields() {
        let json = r#"{
            "business_type": "biotech",
            "total_employees": 20,
            "technical_employees": 8,
            "average_technical_salary": "120000",
            "rd_allocation_percentage": "75",
            "contractor_costs": "10000",
            "supplies_costs": "5000",
            "software_costs": "2500",
            "cloud_costs": "0"
        }"#;

        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.business_type, "biotech");
        assert_eq!(input.technical_employees, 8);
        assert_eq!(input.average_technical_salary, dec("120000"));
        assert!(input.prior_year_qres.is_empty());
        assert!(!input.is_first_time_filer);
        assert!(input.qualifying_activities.is_empty());
    }

    #[test]
    fn test_deserialize_accepts_numeric_amounts() {
        let json = r#"{
            "business_type": "software",
            "total_employees": 5,
            "technical_employees": 3,
            "average_technical_salary": 85000.50,
            "rd_allocation_percentage": 40,
            "contractor_costs": 0,
            "supplies_costs": 0,
            "software_costs": 0,
            "cloud_costs": 1200,
            "prior_year_qres": [80000, 90000, 100000],
            "is_first_time_filer": false,
            "qualifying_activities": ["custom_gpt"]
        }"#;

        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.average_technical_salary, dec("85000.50"));
        assert_eq!(
            input.prior_year_qres,
            vec![dec("80000"), dec("90000"), dec("100000")]
        );
        assert!(input.has_activity("custom_gpt"));
    }

    #[test]
    fn test_deserialize_rejects_negative_employee_count() {
        let json = r#"{
            "business_type": "software",
            "total_employees": -1,
            "technical_employees": 0,
            "average_technical_salary": "0",
            "rd_allocation_percentage": "0",
            "contractor_costs": "0",
            "supplies_costs": "0",
            "software_costs": "0",
            "cloud_costs": "0"
        }"#;

        assert!(serde_json::from_str::<CalculationInput>(json).is_err());
    }

    #[test]
    fn test_technical_wage_base() {
        let input = create_test_input();
        assert_eq!(input.technical_wage_base(), Some(dec("380000")));
    }

    #[test]
    fn test_technical_wage_base_overflow_is_none() {
        let mut input = create_test_input();
        input.technical_employees = u32::MAX;
        input.average_technical_salary = dec("100000000000000000000");
        assert_eq!(input.technical_wage_base(), None);
    }

    #[test]
    fn test_has_cloud_or_software_costs() {
        let mut input = create_test_input();
        assert!(!input.has_cloud_or_software_costs());

        input.software_costs = dec("1");
        assert!(input.has_cloud_or_software_costs());

        input.software_costs = dec("0");
        input.cloud_costs = dec("0.01");
        assert!(input.has_cloud_or_software_costs());
    }

    #[test]
    fn test_has_activity_is_exact_match() {
        let mut input = create_test_input();
        input.qualifying_activities = vec!["custom_gpt_training".to_string()];
        assert!(!input.has_activity("custom_gpt"));
        assert!(input.has_activity("custom_gpt_training"));
    }
}
