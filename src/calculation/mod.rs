//! Calculation logic for the Payroll Engine.
//!
//! This module contains the salary rules: hourly pay with double-rate
//! overtime past the monthly threshold, daily pay truncated to whole
//! 8-hour days, the severance adjustment for fired employees, and the
//! aggregation of salaries across a roster.

mod daily;
mod hourly;
mod payroll;
mod salary;
mod severance;

use rust_decimal::Decimal;

pub use daily::{DailySalaryResult, calculate_daily_salary};
pub use hourly::{HourlySalaryResult, calculate_hourly_salary};
pub use payroll::{ENGINE_VERSION, calculate_payroll, total_salary};
pub use salary::{calculate_employee_salary, calculate_salary};
pub use severance::{SEVERANCE_RATE, SeveranceResult, apply_severance};

/// Hours in one working day.
pub const HOURS_IN_WORKING_DAY: i64 = 8;

/// Rate multiplier for hourly overtime.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Returns the number of hours an hourly employee may work in the month
/// before overtime applies.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::monthly_hours_threshold;
///
/// assert_eq!(monthly_hours_threshold(21), 168);
/// assert_eq!(monthly_hours_threshold(0), 0);
/// ```
pub fn monthly_hours_threshold(working_days: i64) -> i64 {
    HOURS_IN_WORKING_DAY * working_days
}
