//! Daily salary calculation.
//!
//! Daily employees are paid per whole 8-hour day. Worked hours are divided
//! by 8 with truncation toward zero, so a partial day earns nothing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

use super::HOURS_IN_WORKING_DAY;

/// The result of a daily salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySalaryResult {
    /// Whole days paid.
    pub days: i64,
    /// Hours left over after whole days, which are not paid.
    pub unpaid_hours: i64,
    /// The salary before any severance adjustment.
    pub salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the salary of a daily employee for the month.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_daily_salary;
/// use rust_decimal::Decimal;
///
/// let result = calculate_daily_salary(163, 150, 1);
///
/// assert_eq!(result.days, 20);
/// assert_eq!(result.unpaid_hours, 3);
/// assert_eq!(result.salary, Decimal::from(3000));
/// ```
pub fn calculate_daily_salary(
    working_hours: i64,
    salary_rate: i64,
    step_number: u32,
) -> DailySalaryResult {
    let days = working_hours / HOURS_IN_WORKING_DAY;
    let unpaid_hours = working_hours % HOURS_IN_WORKING_DAY;
    let salary = Decimal::from(days) * Decimal::from(salary_rate);

    let reasoning = if unpaid_hours != 0 {
        format!(
            "{} hours worked is {} whole days of {} hours ({} hours dropped): {} days × ${} = ${}",
            working_hours,
            days,
            HOURS_IN_WORKING_DAY,
            unpaid_hours,
            days,
            salary_rate,
            salary.normalize()
        )
    } else {
        format!(
            "{} hours worked is {} whole days of {} hours: {} days × ${} = ${}",
            working_hours,
            days,
            HOURS_IN_WORKING_DAY,
            days,
            salary_rate,
            salary.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_salary".to_string(),
        rule_name: "Daily Salary".to_string(),
        input: serde_json::json!({
            "working_hours": working_hours,
            "salary_rate": salary_rate
        }),
        output: serde_json::json!({
            "days": days,
            "unpaid_hours": unpaid_hours,
            "salary": salary.normalize().to_string()
        }),
        reasoning,
    };

    DailySalaryResult {
        days,
        unpaid_hours,
        salary,
        audit_step,
    }
}
