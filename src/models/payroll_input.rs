//! Decoded payroll input.
//!
//! This module contains the [`PayrollInput`] type produced by the input
//! parser and consumed by the payroll aggregator.

use serde::{Deserialize, Serialize};

use super::Employee;

/// The fully decoded payroll input for one period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, PayrollInput, SalaryType};
///
/// let input = PayrollInput {
///     working_days: 21,
///     employees: vec![Employee {
///         id: 1,
///         salary_type: SalaryType::Hourly,
///         salary_rate: 15,
///         working_hours: 144,
///         is_fired: false,
///     }],
///     unmatched_fired_ids: vec![],
/// };
///
/// assert_eq!(input.employees[0].id, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Number of working days in the month, shared by all employees.
    pub working_days: i64,
    /// Employees in roster order.
    pub employees: Vec<Employee>,
    /// Fired ids that matched no roster employee.
    #[serde(default)]
    pub unmatched_fired_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalaryType;

    fn sample_input() -> PayrollInput {
        PayrollInput {
            working_days: 20,
            employees: vec![
                Employee {
                    id: 4,
                    salary_type: SalaryType::Daily,
                    salary_rate: 100,
                    working_hours: 80,
                    is_fired: true,
                },
                Employee {
                    id: 9,
                    salary_type: SalaryType::Hourly,
                    salary_rate: 10,
                    working_hours: 0,
                    is_fired: false,
                },
            ],
            unmatched_fired_ids: vec![42],
        }
    }

    #[test]
    fn test_serialize_round_trip_keeps_roster_order() {
        let input = sample_input();
        let json = serde_json::to_string(&input).unwrap();
        let decoded: PayrollInput = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, input);
        assert_eq!(decoded.employees[1].id, 9);
    }

    #[test]
    fn test_deserialize_without_unmatched_fired_ids() {
        let json = r#"{"working_days": 21, "employees": []}"#;
        let input: PayrollInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.working_days, 21);
        assert!(input.employees.is_empty());
        assert!(input.unmatched_fired_ids.is_empty());
    }
}
