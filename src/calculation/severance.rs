//! Severance adjustment for fired employees.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Share of the computed salary paid as a severance bonus (50%).
pub const SEVERANCE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// The result of applying the severance adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceResult {
    /// The bonus added on top of the computed salary.
    pub bonus: Decimal,
    /// The adjusted salary (computed salary plus bonus).
    pub salary: Decimal,
    /// The audit step recording this adjustment.
    pub audit_step: AuditStep,
}

/// Applies the severance bonus to a fired employee's computed salary.
///
/// The bonus is half the computed salary, regardless of pay scheme, so the
/// final salary is 150% of the computed one.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::apply_severance;
/// use rust_decimal::Decimal;
///
/// let result = apply_severance(Decimal::from(3400), 3);
///
/// assert_eq!(result.bonus, Decimal::from(1700));
/// assert_eq!(result.salary, Decimal::from(5100));
/// ```
pub fn apply_severance(salary: Decimal, step_number: u32) -> SeveranceResult {
    let bonus = salary * SEVERANCE_RATE;
    let adjusted = salary + bonus;

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance_adjustment".to_string(),
        rule_name: "Severance Adjustment".to_string(),
        input: serde_json::json!({
            "salary": salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "bonus": bonus.normalize().to_string(),
            "salary": adjusted.normalize().to_string()
        }),
        reasoning: format!(
            "Employee was fired: ${} + ${} / 2 = ${}",
            salary.normalize(),
            salary.normalize(),
            adjusted.normalize()
        ),
    };

    SeveranceResult {
        bonus,
        salary: adjusted,
        audit_step,
    }
}
