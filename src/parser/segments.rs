//! Segment splitting for the payroll input format.
//!
//! The input is a flat whitespace-separated token stream. A standalone `-1`
//! token ends a segment, so `-1` can never appear as a data value in any
//! segment. Four segments are expected, in order: roster, working days,
//! hours and fired ids.

use std::fmt;

use crate::error::{EngineError, EngineResult};

/// The token that separates input segments.
pub const SEGMENT_SEPARATOR: &str = "-1";

/// The number of segments a payroll input must contain.
pub const SEGMENT_COUNT: usize = 4;

/// Identifies one of the four input segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// `(id, salary_type_code, salary_rate)` triples.
    Roster,
    /// A single working-days count.
    WorkingDays,
    /// `(id, hours)` pairs.
    Hours,
    /// Fired employee ids.
    Fired,
}

impl Segment {
    /// Returns the name used for this segment in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Segment::Roster => "roster",
            Segment::WorkingDays => "working_days",
            Segment::Hours => "hours",
            Segment::Fired => "fired",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The raw tokens of each input segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegments<'a> {
    /// Tokens of the roster segment.
    pub roster: Vec<&'a str>,
    /// Tokens of the working-days segment.
    pub working_days: Vec<&'a str>,
    /// Tokens of the hours segment.
    pub hours: Vec<&'a str>,
    /// Tokens of the fired segment.
    pub fired: Vec<&'a str>,
}

/// Splits raw input into its four segments of tokens.
///
/// A trailing separator after the fourth segment is allowed (the canonical
/// form ends with `-1`), but any tokens after it are rejected.
///
/// # Examples
///
/// ```
/// use payroll_engine::parser::split_segments;
///
/// let segments = split_segments("1 1 15 -1 21 -1 1 144 -1 -1").unwrap();
/// assert_eq!(segments.roster, vec!["1", "1", "15"]);
/// assert_eq!(segments.working_days, vec!["21"]);
/// assert_eq!(segments.hours, vec!["1", "144"]);
/// assert!(segments.fired.is_empty());
///
/// assert!(split_segments("1 1 15 -1 21 -1 1 144").is_err());
/// ```
pub fn split_segments(input: &str) -> EngineResult<RawSegments<'_>> {
    let mut parts: Vec<Vec<&str>> = vec![Vec::new()];
    for token in input.split_whitespace() {
        if token == SEGMENT_SEPARATOR {
            parts.push(Vec::new());
        } else if let Some(current) = parts.last_mut() {
            current.push(token);
        }
    }

    if parts.len() < SEGMENT_COUNT {
        return Err(EngineError::malformed(
            "input",
            format!(
                "expected {} segments separated by '{}', found {}",
                SEGMENT_COUNT,
                SEGMENT_SEPARATOR,
                parts.len()
            ),
        ));
    }

    if let Some(extra) = parts[SEGMENT_COUNT..].iter().find(|p| !p.is_empty()) {
        return Err(EngineError::malformed(
            "input",
            format!(
                "unexpected content after the fourth segment: '{}'",
                extra.join(" ")
            ),
        ));
    }

    let mut parts = parts.into_iter();
    let mut next = || parts.next().unwrap_or_default();
    Ok(RawSegments {
        roster: next(),
        working_days: next(),
        hours: next(),
        fired: next(),
    })
}

/// Parses one token as a base-10 integer.
///
/// Values must fit in 32 bits, which keeps every salary product well inside
/// the range of [`rust_decimal::Decimal`].
pub fn parse_integer(segment: Segment, token: &str) -> EngineResult<i64> {
    let value = token.parse::<i64>().map_err(|_| {
        EngineError::malformed(segment.name(), format!("'{}' is not an integer", token))
    })?;
    i32::try_from(value).map(i64::from).map_err(|_| {
        EngineError::malformed(
            segment.name(),
            format!("'{}' is out of the 32-bit integer range", token),
        )
    })
}

/// Parses every token of a segment as an integer.
pub fn parse_integers(segment: Segment, tokens: &[&str]) -> EngineResult<Vec<i64>> {
    tokens.iter().map(|t| parse_integer(segment, t)).collect()
}
