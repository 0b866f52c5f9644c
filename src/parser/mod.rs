//! Input parsing for the Payroll Engine.
//!
//! Payroll input is a single string of four segments separated by a
//! standalone `-1` token:
//!
//! ```text
//! <id> <type> <rate> ... -1 <working_days> -1 <id> <hours> ... -1 <fired_id> ... -1
//! ```
//!
//! Because `-1` is the separator, it can never be used as a data value.
//! Hours for the same id are summed (one entry per shift), and fired ids
//! with no roster match are recorded but otherwise ignored.

mod decode;
mod segments;

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::config::ValidationConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PayrollInput};

pub use decode::{
    HoursEntry, RosterEntry, parse_fired, parse_hours, parse_roster, parse_working_days,
};
pub use segments::{
    RawSegments, SEGMENT_COUNT, SEGMENT_SEPARATOR, Segment, parse_integer, parse_integers,
    split_segments,
};

/// Parses payroll input using the default validation policy.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::SalaryType;
/// use payroll_engine::parser::parse_input;
///
/// let input = parse_input("1 1 15 2 1 17 3 2 150 -1 21 -1 1 144 2 184 3 163 -1 2 -1").unwrap();
///
/// assert_eq!(input.working_days, 21);
/// assert_eq!(input.employees.len(), 3);
/// assert_eq!(input.employees[2].salary_type, SalaryType::Daily);
/// assert!(input.employees[1].is_fired);
/// ```
pub fn parse_input(input: &str) -> EngineResult<PayrollInput> {
    parse_input_with(input, &ValidationConfig::default())
}

/// Parses payroll input using the given validation policy.
pub fn parse_input_with(input: &str, validation: &ValidationConfig) -> EngineResult<PayrollInput> {
    let segments = split_segments(input)?;

    let roster = parse_roster(&segments.roster, validation)?;
    let working_days = parse_working_days(&segments.working_days, validation)?;
    let hours = parse_hours(&segments.hours, validation)?;
    let fired = parse_fired(&segments.fired)?;

    let hours_by_id = accumulate_hours(&hours)?;
    let roster_ids: HashSet<i64> = roster.iter().map(|entry| entry.id).collect();
    let fired_ids: HashSet<i64> = fired.iter().copied().collect();

    let employees: Vec<Employee> = roster
        .iter()
        .map(|entry| Employee {
            id: entry.id,
            salary_type: entry.salary_type,
            salary_rate: entry.salary_rate,
            working_hours: hours_by_id.get(&entry.id).copied().unwrap_or(0),
            is_fired: fired_ids.contains(&entry.id),
        })
        .collect();

    for entry in hours.iter().filter(|h| !roster_ids.contains(&h.id)) {
        debug!(id = entry.id, hours = entry.hours, "Hours entry matches no roster employee");
    }

    let mut unmatched_fired_ids: Vec<i64> = Vec::new();
    for &id in &fired {
        if roster_ids.contains(&id) || unmatched_fired_ids.contains(&id) {
            continue;
        }
        if validation.reject_unknown_fired_ids {
            return Err(EngineError::malformed(
                Segment::Fired.name(),
                format!("fired id {} matches no roster employee", id),
            ));
        }
        warn!(id, "Fired id matches no roster employee");
        unmatched_fired_ids.push(id);
    }

    Ok(PayrollInput {
        working_days,
        employees,
        unmatched_fired_ids,
    })
}

/// Sums hour entries per employee id.
fn accumulate_hours(entries: &[HoursEntry]) -> EngineResult<HashMap<i64, i64>> {
    let mut totals: HashMap<i64, i64> = HashMap::new();
    for entry in entries {
        let total = totals.entry(entry.id).or_insert(0);
        *total = total.checked_add(entry.hours).ok_or_else(|| {
            EngineError::malformed(
                Segment::Hours.name(),
                format!("total hours of employee {} overflow", entry.id),
            )
        })?;
    }
    Ok(totals)
}
