//! Per-employee salary calculation.
//!
//! Dispatches on the employee's pay scheme, then applies the severance
//! adjustment for fired employees.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AuditStep, Employee, SalaryResult, SalaryType};

use super::{apply_severance, calculate_daily_salary, calculate_hourly_salary};

/// Calculates an employee's salary with a full audit trail.
///
/// Audit steps are numbered from `step_number_start`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_employee_salary;
/// use payroll_engine::models::{Employee, SalaryType};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 2,
///     salary_type: SalaryType::Hourly,
///     salary_rate: 17,
///     working_hours: 184,
///     is_fired: true,
/// };
///
/// let result = calculate_employee_salary(&employee, 21, 1);
///
/// assert_eq!(result.base_salary, Decimal::from(3400));
/// assert_eq!(result.severance_bonus, Decimal::from(1700));
/// assert_eq!(result.salary, Decimal::from(5100));
/// assert_eq!(result.audit_steps.len(), 2);
/// ```
pub fn calculate_employee_salary(
    employee: &Employee,
    working_days: i64,
    step_number_start: u32,
) -> SalaryResult {
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut step_number = step_number_start;

    let base_salary = match employee.salary_type {
        SalaryType::Hourly => {
            let hourly = calculate_hourly_salary(
                employee.working_hours,
                employee.salary_rate,
                working_days,
                step_number,
            );
            audit_steps.push(hourly.audit_step);
            hourly.salary
        }
        SalaryType::Daily => {
            let daily =
                calculate_daily_salary(employee.working_hours, employee.salary_rate, step_number);
            audit_steps.push(daily.audit_step);
            daily.salary
        }
    };
    step_number += 1;

    let (severance_bonus, salary) = if employee.is_fired {
        let severance = apply_severance(base_salary, step_number);
        audit_steps.push(severance.audit_step);
        (severance.bonus, severance.salary)
    } else {
        (Decimal::ZERO, base_salary)
    };

    debug!(
        employee_id = employee.id,
        salary_type = ?employee.salary_type,
        working_hours = employee.working_hours,
        is_fired = employee.is_fired,
        salary = %salary,
        "Calculated employee salary"
    );

    SalaryResult {
        employee_id: employee.id,
        salary_type: employee.salary_type,
        working_hours: employee.working_hours,
        base_salary,
        severance_bonus,
        salary,
        audit_steps,
    }
}

/// Calculates an employee's final salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_salary;
/// use payroll_engine::models::{Employee, SalaryType};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 3,
///     salary_type: SalaryType::Daily,
///     salary_rate: 150,
///     working_hours: 163,
///     is_fired: false,
/// };
///
/// assert_eq!(calculate_salary(&employee, 21), Decimal::from(3000));
/// ```
pub fn calculate_salary(employee: &Employee, working_days: i64) -> Decimal {
    calculate_employee_salary(employee, working_days, 1).salary
}
