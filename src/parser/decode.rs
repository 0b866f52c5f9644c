//! Per-segment decoders.
//!
//! Each decoder turns the raw tokens of one segment into typed entries and
//! applies the validation policy from [`ValidationConfig`].

use std::collections::HashSet;

use tracing::debug;

use crate::config::ValidationConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::SalaryType;

use super::segments::{Segment, parse_integer, parse_integers};

/// One `(id, salary_type_code, salary_rate)` triple from the roster segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry {
    /// Employee id.
    pub id: i64,
    /// Decoded salary type.
    pub salary_type: SalaryType,
    /// Rate per hour or per day.
    pub salary_rate: i64,
}

/// One `(id, hours)` pair from the hours segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursEntry {
    /// Employee id the hours belong to.
    pub id: i64,
    /// Hours worked in this entry.
    pub hours: i64,
}

fn check_group_size(segment: Segment, numbers: &[i64], size: usize) -> EngineResult<()> {
    let remainder = numbers.len() % size;
    if remainder != 0 {
        let trailing: Vec<String> = numbers[numbers.len() - remainder..]
            .iter()
            .map(ToString::to_string)
            .collect();
        return Err(EngineError::malformed(
            segment.name(),
            format!(
                "expected groups of {} integers, found trailing unmatched token(s) '{}'",
                size,
                trailing.join(" ")
            ),
        ));
    }
    Ok(())
}

fn check_non_negative(
    segment: Segment,
    what: &str,
    value: i64,
    validation: &ValidationConfig,
) -> EngineResult<()> {
    if validation.reject_negative_values && value < 0 {
        return Err(EngineError::malformed(
            segment.name(),
            format!("{} must not be negative, got {}", what, value),
        ));
    }
    Ok(())
}

fn check_employee_id(id: i64, validation: &ValidationConfig) -> EngineResult<()> {
    if validation.reject_negative_values && id <= 0 {
        return Err(EngineError::malformed(
            Segment::Roster.name(),
            format!("employee id must be positive, got {}", id),
        ));
    }
    Ok(())
}

/// Decodes the roster segment into entries in input order.
///
/// An empty segment yields an empty roster. Duplicate ids are rejected, as
/// are non-positive ids unless the policy allows negative values.
///
/// # Examples
///
/// ```
/// use payroll_engine::config::ValidationConfig;
/// use payroll_engine::models::SalaryType;
/// use payroll_engine::parser::parse_roster;
///
/// let roster = parse_roster(&["1", "1", "15", "3", "2", "150"], &ValidationConfig::default()).unwrap();
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster[1].salary_type, SalaryType::Daily);
/// assert_eq!(roster[1].salary_rate, 150);
/// ```
pub fn parse_roster(
    tokens: &[&str],
    validation: &ValidationConfig,
) -> EngineResult<Vec<RosterEntry>> {
    let numbers = parse_integers(Segment::Roster, tokens)?;
    check_group_size(Segment::Roster, &numbers, 3)?;

    let mut seen = HashSet::new();
    let mut roster = Vec::with_capacity(numbers.len() / 3);
    for triple in numbers.chunks_exact(3) {
        let (id, code, salary_rate) = (triple[0], triple[1], triple[2]);
        check_employee_id(id, validation)?;
        if !seen.insert(id) {
            return Err(EngineError::DuplicateEmployee { id });
        }
        check_non_negative(
            Segment::Roster,
            &format!("salary rate of employee {}", id),
            salary_rate,
            validation,
        )?;
        roster.push(RosterEntry {
            id,
            salary_type: SalaryType::from_code(code),
            salary_rate,
        });
    }

    debug!(employees = roster.len(), "Parsed roster segment");
    Ok(roster)
}

/// Decodes the working-days segment, which must hold exactly one integer.
pub fn parse_working_days(tokens: &[&str], validation: &ValidationConfig) -> EngineResult<i64> {
    let token = match tokens {
        [token] => *token,
        [] => {
            return Err(EngineError::malformed(
                Segment::WorkingDays.name(),
                "expected one integer, found none",
            ));
        }
        _ => {
            return Err(EngineError::malformed(
                Segment::WorkingDays.name(),
                format!("expected one integer, found '{}'", tokens.join(" ")),
            ));
        }
    };

    let working_days = parse_integer(Segment::WorkingDays, token)?;
    check_non_negative(Segment::WorkingDays, "working days", working_days, validation)?;

    debug!(working_days, "Parsed working days segment");
    Ok(working_days)
}

/// Decodes the hours segment into entries in input order.
///
/// The same id may appear any number of times; each entry is one shift.
pub fn parse_hours(tokens: &[&str], validation: &ValidationConfig) -> EngineResult<Vec<HoursEntry>> {
    let numbers = parse_integers(Segment::Hours, tokens)?;
    check_group_size(Segment::Hours, &numbers, 2)?;

    let entries = numbers
        .chunks_exact(2)
        .map(|pair| -> EngineResult<HoursEntry> {
            let entry = HoursEntry {
                id: pair[0],
                hours: pair[1],
            };
            check_non_negative(
                Segment::Hours,
                &format!("hours of employee {}", entry.id),
                entry.hours,
                validation,
            )?;
            Ok(entry)
        })
        .collect::<EngineResult<Vec<_>>>()?;

    debug!(entries = entries.len(), "Parsed hours segment");
    Ok(entries)
}

/// Decodes the fired segment into a list of ids.
pub fn parse_fired(tokens: &[&str]) -> EngineResult<Vec<i64>> {
    let ids = parse_integers(Segment::Fired, tokens)?;
    debug!(fired = ids.len(), "Parsed fired segment");
    Ok(ids)
}
