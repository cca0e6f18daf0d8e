//! Request types for the R&D credit engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CalculationInput;

/// Request body for the `/calculate` endpoint.
///
/// Mirrors [`CalculationInput`]; amounts may be sent as JSON numbers or
/// strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Free-form business category.
    pub business_type: String,
    /// Headcount across the whole business.
    pub total_employees: u32,
    /// Headcount of technical staff.
    pub technical_employees: u32,
    /// Average annual salary of the technical staff.
    pub average_technical_salary: Decimal,
    /// Share of technical staff time spent on R&D, 0 to 100.
    pub rd_allocation_percentage: Decimal,
    /// Contract research costs.
    #[serde(default)]
    pub contractor_costs: Decimal,
    /// Research supplies costs.
    #[serde(default)]
    pub supplies_costs: Decimal,
    /// Research software costs.
    #[serde(default)]
    pub software_costs: Decimal,
    /// Research cloud computing costs.
    #[serde(default)]
    pub cloud_costs: Decimal,
    /// Prior-year QRE totals, oldest first.
    #[serde(default)]
    pub prior_year_qres: Vec<Decimal>,
    /// Whether this is the first year claiming the credit.
    #[serde(default)]
    pub is_first_time_filer: bool,
    /// Selected qualifying activity identifiers.
    #[serde(default)]
    pub qualifying_activities: Vec<String>,
}

impl From<CalculationRequest> for CalculationInput {
    fn from(req: CalculationRequest) -> Self {
        CalculationInput {
            business_type: req.business_type,
            total_employees: req.total_employees,
            technical_employees: req.technical_employees,
            average_technical_salary: req.average_technical_salary,
            rd_allocation_percentage: req.rd_allocation_percentage,
            contractor_costs: req.contractor_costs,
            supplies_costs: req.supplies_costs,
            software_costs: req.software_costs,
            cloud_costs: req.cloud_costs,
            prior_year_qres: req.prior_year_qres,
            is_first_time_filer: req.is_first_time_filer,
            qualifying_activities: req.qualifying_activities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_full_request() {
        let json = r#"{
            "business_type": "software",
            "total_employees": 12,
            "technical_employees": 6,
            "average_technical_salary": 115000,
            "rd_allocation_percentage": "65",
            "contractor_costs": 40000,
            "supplies_costs": 2000,
            "software_costs": 8000,
            "cloud_costs": 15000,
            "prior_year_qres": [300000, 350000],
            "is_first_time_filer": false,
            "qualifying_activities": ["custom_gpt", "prototyping"]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        let input: CalculationInput = request.into();

        assert_eq!(input.technical_employees, 6);
        assert_eq!(input.average_technical_salary, dec("115000"));
        assert_eq!(input.rd_allocation_percentage, dec("65"));
        assert_eq!(input.prior_year_qres.len(), 2);
        assert!(!input.is_first_time_filer);
        assert_eq!(input.qualifying_activities.len(), 2);
    }

    #[test]
    fn test_cost_fields_default_to_zero() {
        let json = r#"{
            "business_type": "manufacturing",
            "total_employees": 40,
            "technical_employees": 10,
            "average_technical_salary": "90000",
            "rd_allocation_percentage": "30"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.contractor_costs, Decimal::ZERO);
        assert_eq!(request.cloud_costs, Decimal::ZERO);
        assert!(request.prior_year_qres.is_empty());
        assert!(request.qualifying_activities.is_empty());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json = r#"{
            "business_type": "software",
            "total_employees": 5,
            "average_technical_salary": "90000",
            "rd_allocation_percentage": "30"
        }"#;

        let err = serde_json::from_str::<CalculationRequest>(json).unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }
}
