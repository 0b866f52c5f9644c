//! Configuration types for payroll runs.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

/// Input validation policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject non-positive employee ids and negative salary rates, hour
    /// entries and working days.
    pub reject_negative_values: bool,
    /// Reject fired ids that match no roster employee.
    pub reject_unknown_fired_ids: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            reject_negative_values: true,
            reject_unknown_fired_ids: false,
        }
    }
}

/// The complete payroll configuration loaded from YAML.
///
/// Every field has a default, so an empty document is a valid configuration.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
///
/// let config = PayrollConfig::default();
/// assert!(config.validation.reject_negative_values);
/// assert!(!config.validation.reject_unknown_fired_ids);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Input validation policy.
    pub validation: ValidationConfig,
}

impl PayrollConfig {
    /// Returns a configuration that accepts negative values and lets their
    /// sign propagate into the calculation.
    pub fn permissive() -> Self {
        Self {
            validation: ValidationConfig {
                reject_negative_values: false,
                reject_unknown_fired_ids: false,
            },
        }
    }
}
