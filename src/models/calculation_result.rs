//! Calculation result models for the Payroll Engine.
//!
//! This module contains the [`PayrollResult`] type and its associated structures
//! that capture all outputs from a payroll run, including per-employee salaries,
//! totals, and audit traces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SalaryType;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate input oddities that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a payroll run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The salary computed for a single employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// The employee this salary belongs to.
    pub employee_id: i64,
    /// The pay scheme used.
    pub salary_type: SalaryType,
    /// Hours worked in the period.
    pub working_hours: i64,
    /// Salary from the pay scheme alone, before any severance.
    pub base_salary: Decimal,
    /// Severance bonus added for fired employees (zero otherwise).
    pub severance_bonus: Decimal,
    /// Final salary (base salary plus severance bonus).
    pub salary: Decimal,
    /// Audit steps recording how the salary was derived.
    pub audit_steps: Vec<AuditStep>,
}

/// Aggregated totals for a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of all final salaries.
    pub gross_pay: Decimal,
    /// Sum of all severance bonuses included in `gross_pay`.
    pub severance_total: Decimal,
    /// Number of employees paid.
    pub employee_count: usize,
    /// Number of fired employees paid.
    pub fired_count: usize,
}

/// The complete result of a payroll run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AuditTrace, PayrollResult, PayrollTotals};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = PayrollResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     working_days: 21,
///     salaries: vec![],
///     totals: PayrollTotals {
///         gross_pay: Decimal::ZERO,
///         severance_total: Decimal::ZERO,
///         employee_count: 0,
///         fired_count: 0,
///     },
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// assert_eq!(result.total(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this run.
    pub calculation_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// Working days in the month.
    pub working_days: i64,
    /// Per-employee salaries in roster order.
    pub salaries: Vec<SalaryResult>,
    /// Aggregated totals.
    pub totals: PayrollTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl PayrollResult {
    /// Returns the total amount payable across the roster.
    pub fn total(&self) -> Decimal {
        self.totals.gross_pay
    }

    /// Looks up the salary computed for an employee.
    pub fn salary_for(&self, employee_id: i64) -> Option<&SalaryResult> {
        self.salaries.iter().find(|s| s.employee_id == employee_id)
    }
}
