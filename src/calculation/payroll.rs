//! Payroll aggregation across a roster.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Employee, PayrollInput, PayrollResult, PayrollTotals,
    SalaryResult,
};

use super::{calculate_employee_salary, calculate_salary};

/// The engine version recorded on every payroll result.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sums the final salaries of all employees in roster order.
///
/// An empty roster totals zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::total_salary;
/// use payroll_engine::parser::parse_input;
/// use rust_decimal::Decimal;
///
/// let input = parse_input("1 1 15 2 1 17 3 2 150 -1 21 -1 1 144 2 184 3 163 -1 2 -1").unwrap();
///
/// assert_eq!(total_salary(&input.employees, input.working_days), Decimal::from(10260));
/// assert_eq!(total_salary(&[], 21), Decimal::ZERO);
/// ```
pub fn total_salary(employees: &[Employee], working_days: i64) -> Decimal {
    employees
        .iter()
        .map(|employee| calculate_salary(employee, working_days))
        .sum()
}

/// Runs payroll for a parsed input, producing per-employee salaries,
/// totals and the audit trace.
pub fn calculate_payroll(input: &PayrollInput) -> PayrollResult {
    let start_time = Instant::now();
    let calculation_id = Uuid::new_v4();
    let mut step_number: u32 = 1;

    let mut salaries: Vec<SalaryResult> = Vec::with_capacity(input.employees.len());
    let mut steps: Vec<AuditStep> = Vec::new();

    for employee in &input.employees {
        let result = calculate_employee_salary(employee, input.working_days, step_number);
        step_number += result.audit_steps.len() as u32;
        steps.extend(result.audit_steps.iter().cloned());
        salaries.push(result);
    }

    let warnings: Vec<AuditWarning> = input
        .unmatched_fired_ids
        .iter()
        .map(|id| AuditWarning {
            code: "UNKNOWN_FIRED_ID".to_string(),
            message: format!("Fired id {} matches no roster employee", id),
            severity: "low".to_string(),
        })
        .collect();

    let totals = PayrollTotals {
        gross_pay: salaries.iter().map(|s| s.salary).sum(),
        severance_total: salaries.iter().map(|s| s.severance_bonus).sum(),
        employee_count: salaries.len(),
        fired_count: input.employees.iter().filter(|e| e.is_fired).count(),
    };

    let duration = start_time.elapsed();
    info!(
        calculation_id = %calculation_id,
        employees = totals.employee_count,
        fired = totals.fired_count,
        working_days = input.working_days,
        gross_pay = %totals.gross_pay,
        duration_us = duration.as_micros(),
        "Payroll calculated"
    );

    PayrollResult {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        working_days: input.working_days,
        salaries,
        totals,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: duration.as_micros() as u64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalaryType;

    fn canonical_input() -> PayrollInput {
        PayrollInput {
            working_days: 21,
            employees: vec![
                Employee {
                    id: 1,
                    salary_type: SalaryType::Hourly,
                    salary_rate: 15,
                    working_hours: 144,
                    is_fired: false,
                },
                Employee {
                    id: 2,
                    salary_type: SalaryType::Hourly,
                    salary_rate: 17,
                    working_hours: 184,
                    is_fired: true,
                },
                Employee {
                    id: 3,
                    salary_type: SalaryType::Daily,
                    salary_rate: 150,
                    working_hours: 163,
                    is_fired: false,
                },
            ],
            unmatched_fired_ids: vec![],
        }
    }

    #[test]
    fn test_canonical_total() {
        let result = calculate_payroll(&canonical_input());

        assert_eq!(result.total(), Decimal::from(10260));
        assert_eq!(result.totals.severance_total, Decimal::from(1700));
        assert_eq!(result.totals.employee_count, 3);
        assert_eq!(result.totals.fired_count, 1);
    }

    #[test]
    fn test_salaries_in_roster_order() {
        let result = calculate_payroll(&canonical_input());

        let ids: Vec<i64> = result.salaries.iter().map(|s| s.employee_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(result.salaries[0].salary, Decimal::from(2160));
        assert_eq!(result.salaries[1].salary, Decimal::from(5100));
        assert_eq!(result.salaries[2].salary, Decimal::from(3000));
    }

    #[test]
    fn test_audit_steps_numbered_sequentially() {
        let result = calculate_payroll(&canonical_input());

        let numbers: Vec<u32> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_roster_totals_zero() {
        let input = PayrollInput {
            working_days: 21,
            employees: vec![],
            unmatched_fired_ids: vec![],
        };
        let result = calculate_payroll(&input);

        assert_eq!(result.total(), Decimal::ZERO);
        assert!(result.salaries.is_empty());
        assert!(result.audit_trace.steps.is_empty());
    }

    #[test]
    fn test_unmatched_fired_ids_become_warnings() {
        let mut input = canonical_input();
        input.unmatched_fired_ids = vec![8, 9];
        let result = calculate_payroll(&input);

        assert_eq!(result.audit_trace.warnings.len(), 2);
        assert_eq!(result.audit_trace.warnings[0].code, "UNKNOWN_FIRED_ID");
        assert!(result.audit_trace.warnings[1].message.contains('9'));
    }

    #[test]
    fn test_total_salary_matches_calculate_payroll() {
        let input = canonical_input();
        assert_eq!(
            total_salary(&input.employees, input.working_days),
            calculate_payroll(&input).total()
        );
    }

    #[test]
    fn test_engine_version_recorded() {
        let result = calculate_payroll(&canonical_input());
        assert_eq!(result.engine_version, ENGINE_VERSION);
        assert_eq!(result.working_days, 21);
    }
}
