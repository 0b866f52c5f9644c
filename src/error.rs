//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while parsing payroll input,
//! loading configuration, or calculating salaries.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::MalformedInput {
///     segment: "roster".to_string(),
///     message: "'abc' is not an integer".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Malformed input in roster segment: 'abc' is not an integer"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The payroll input could not be decoded.
    #[error("Malformed input in {segment} segment: {message}")]
    MalformedInput {
        /// The segment that failed (e.g. "roster", "hours").
        segment: String,
        /// A description of what was wrong.
        message: String,
    },

    /// An employee id was listed more than once in the roster.
    #[error("Malformed input in roster segment: duplicate employee id {id}")]
    DuplicateEmployee {
        /// The repeated employee id.
        id: i64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Creates a [`EngineError::MalformedInput`] for the given segment.
    pub fn malformed(segment: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            segment: segment.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error was caused by bad payroll input rather
    /// than by the environment (configuration).
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedInput { .. } | Self::DuplicateEmployee { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_displays_segment_and_message() {
        let error = EngineError::malformed("hours", "trailing unmatched token '7'");
        assert_eq!(
            error.to_string(),
            "Malformed input in hours segment: trailing unmatched token '7'"
        );
    }

    #[test]
    fn test_duplicate_employee_displays_id() {
        let error = EngineError::DuplicateEmployee { id: 3 };
        assert_eq!(
            error.to_string(),
            "Malformed input in roster segment: duplicate employee id 3"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/payroll.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/payroll.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_is_malformed_input_classification() {
        assert!(EngineError::malformed("input", "x").is_malformed_input());
        assert!(EngineError::DuplicateEmployee { id: 1 }.is_malformed_input());
        assert!(
            !EngineError::ConfigNotFound {
                path: "x".to_string()
            }
            .is_malformed_input()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_malformed() -> EngineResult<()> {
            Err(EngineError::malformed("input", "missing separator"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_malformed()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
