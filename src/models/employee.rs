//! Employee model and related types.
//!
//! This module defines the Employee struct and SalaryType enum
//! for representing workers on a payroll roster.

use serde::{Deserialize, Serialize};

/// Represents the pay scheme an employee is paid under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// Paid per hour worked, with double rate for overtime hours.
    Hourly,
    /// Paid per whole 8-hour day worked.
    Daily,
}

impl SalaryType {
    /// Decodes a roster salary type code.
    ///
    /// Code `1` is hourly; every other value is daily.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::SalaryType;
    ///
    /// assert_eq!(SalaryType::from_code(1), SalaryType::Hourly);
    /// assert_eq!(SalaryType::from_code(2), SalaryType::Daily);
    /// assert_eq!(SalaryType::from_code(7), SalaryType::Daily);
    /// ```
    pub fn from_code(code: i64) -> Self {
        if code == 1 {
            SalaryType::Hourly
        } else {
            SalaryType::Daily
        }
    }
}

/// Represents an employee on the payroll roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee within the roster.
    pub id: i64,
    /// The pay scheme the employee is paid under.
    pub salary_type: SalaryType,
    /// Currency units per hour (hourly) or per day (daily).
    pub salary_rate: i64,
    /// Total hours worked in the period, summed over all hour entries.
    pub working_hours: i64,
    /// Whether the employee was fired during the period.
    #[serde(default)]
    pub is_fired: bool,
}
