//! Hourly salary calculation.
//!
//! Hourly employees are paid their rate for every hour up to the monthly
//! threshold (`8 × working_days`). Once they work past the threshold, the
//! regular portion is capped at the threshold and each hour beyond it is
//! paid at double rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

use super::{OVERTIME_MULTIPLIER, monthly_hours_threshold};

/// The result of an hourly salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlySalaryResult {
    /// The monthly threshold in hours that overtime is measured against.
    pub threshold_hours: i64,
    /// Hours paid at the regular rate (capped at the threshold).
    pub regular_hours: i64,
    /// Hours paid at double rate (zero if the threshold was not exceeded).
    pub overtime_hours: i64,
    /// The salary before any severance adjustment.
    pub salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the salary of an hourly employee for the month.
///
/// # Arguments
///
/// * `working_hours` - Total hours worked in the month
/// * `salary_rate` - Pay per hour
/// * `working_days` - Working days in the month, used for the overtime threshold
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ## Under the threshold
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_salary;
/// use rust_decimal::Decimal;
///
/// // 21 working days gives a 168 hour threshold.
/// let result = calculate_hourly_salary(144, 15, 21, 1);
///
/// assert_eq!(result.overtime_hours, 0);
/// assert_eq!(result.salary, Decimal::from(2160));
/// ```
///
/// ## With overtime
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_salary;
/// use rust_decimal::Decimal;
///
/// let result = calculate_hourly_salary(184, 17, 21, 1);
///
/// assert_eq!(result.regular_hours, 168);
/// assert_eq!(result.overtime_hours, 16);
/// assert_eq!(result.salary, Decimal::from(168 * 17 + 16 * 2 * 17));
/// ```
pub fn calculate_hourly_salary(
    working_hours: i64,
    salary_rate: i64,
    working_days: i64,
    step_number: u32,
) -> HourlySalaryResult {
    let threshold_hours = monthly_hours_threshold(working_days);
    let rate = Decimal::from(salary_rate);

    let (regular_hours, overtime_hours, salary) = if working_hours > threshold_hours {
        let overtime_hours = working_hours - threshold_hours;
        let salary = Decimal::from(threshold_hours) * rate
            + Decimal::from(overtime_hours) * OVERTIME_MULTIPLIER * rate;
        (threshold_hours, overtime_hours, salary)
    } else {
        (working_hours, 0, Decimal::from(working_hours) * rate)
    };

    let reasoning = if overtime_hours > 0 {
        format!(
            "{} hours worked exceeds {} hour threshold by {} hours: {} hours × ${} + {} hours × ${} × {} = ${}",
            working_hours,
            threshold_hours,
            overtime_hours,
            regular_hours,
            salary_rate,
            overtime_hours,
            salary_rate,
            OVERTIME_MULTIPLIER,
            salary.normalize()
        )
    } else {
        format!(
            "{} hours worked is within {} hour threshold, no overtime: {} hours × ${} = ${}",
            working_hours,
            threshold_hours,
            working_hours,
            salary_rate,
            salary.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_salary".to_string(),
        rule_name: "Hourly Salary".to_string(),
        input: serde_json::json!({
            "working_hours": working_hours,
            "salary_rate": salary_rate,
            "working_days": working_days,
            "threshold_hours": threshold_hours
        }),
        output: serde_json::json!({
            "regular_hours": regular_hours,
            "overtime_hours": overtime_hours,
            "salary": salary.normalize().to_string()
        }),
        reasoning,
    };

    HourlySalaryResult {
        threshold_hours,
        regular_hours,
        overtime_hours,
        salary,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_under_threshold_paid_at_rate() {
        let result = calculate_hourly_salary(144, 15, 21, 1);

        assert_eq!(result.threshold_hours, 168);
        assert_eq!(result.regular_hours, 144);
        assert_eq!(result.overtime_hours, 0);
        assert_eq!(result.salary, Decimal::from(2160));
    }

    #[test]
    fn test_hours_exactly_at_threshold_no_overtime() {
        let result = calculate_hourly_salary(168, 10, 21, 1);

        assert_eq!(result.overtime_hours, 0);
        assert_eq!(result.salary, Decimal::from(1680));
        assert!(result.audit_step.reasoning.contains("no overtime"));
    }

    #[test]
    fn test_one_hour_over_threshold() {
        let result = calculate_hourly_salary(169, 10, 21, 1);

        assert_eq!(result.regular_hours, 168);
        assert_eq!(result.overtime_hours, 1);
        assert_eq!(result.salary, Decimal::from(1680 + 20));
    }

    #[test]
    fn test_overtime_canonical_employee() {
        let result = calculate_hourly_salary(184, 17, 21, 1);

        assert_eq!(result.salary, Decimal::from(3400));
        assert!(result.audit_step.reasoning.contains("exceeds"));
    }

    #[test]
    fn test_zero_working_days_makes_every_hour_overtime() {
        let result = calculate_hourly_salary(10, 5, 0, 1);

        assert_eq!(result.threshold_hours, 0);
        assert_eq!(result.regular_hours, 0);
        assert_eq!(result.overtime_hours, 10);
        assert_eq!(result.salary, Decimal::from(100));
    }

    #[test]
    fn test_zero_hours_zero_salary() {
        let result = calculate_hourly_salary(0, 25, 21, 1);
        assert_eq!(result.salary, Decimal::ZERO);
    }

    #[test]
    fn test_negative_rate_propagates_sign() {
        let result = calculate_hourly_salary(10, -3, 21, 1);
        assert_eq!(result.salary, Decimal::from(-30));
    }

    #[test]
    fn test_audit_step_contents() {
        let result = calculate_hourly_salary(184, 17, 21, 4);

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "hourly_salary");
        assert_eq!(result.audit_step.rule_name, "Hourly Salary");
        assert_eq!(result.audit_step.input["threshold_hours"], 168);
        assert_eq!(result.audit_step.output["overtime_hours"], 16);
        assert_eq!(result.audit_step.output["salary"].as_str().unwrap(), "3400");
    }
}
