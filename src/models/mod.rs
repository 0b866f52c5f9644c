//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod payroll_input;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, PayrollResult, PayrollTotals, SalaryResult,
};
pub use employee::{Employee, SalaryType};
pub use payroll_input::PayrollInput;
