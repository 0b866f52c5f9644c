//! Payroll Engine
//!
//! This crate parses a compact `-1`-delimited payroll encoding (roster,
//! working days, worked hours, fired ids) and calculates each employee's
//! monthly salary under an hourly or daily pay scheme, including overtime
//! and severance, then totals the payroll.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod report;

use config::PayrollConfig;
use error::EngineResult;
use models::PayrollResult;

/// Parses raw input and runs payroll on it in one step.
///
/// # Examples
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::run_payroll;
/// use rust_decimal::Decimal;
///
/// let result = run_payroll(
///     "1 1 15 2 1 17 3 2 150 -1 21 -1 1 144 2 184 3 163 -1 2 -1",
///     &PayrollConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.total(), Decimal::from(10260));
/// ```
pub fn run_payroll(input: &str, config: &PayrollConfig) -> EngineResult<PayrollResult> {
    let payroll_input = parser::parse_input_with(input, &config.validation)?;
    Ok(calculation::calculate_payroll(&payroll_input))
}
