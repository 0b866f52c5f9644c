//! Configuration loading and management for the Payroll Engine.
//!
//! This module loads the optional run configuration from a YAML file. The
//! payroll rules themselves (8-hour working day, double overtime rate,
//! 50% severance) are fixed and are not part of the configuration.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("{:?}", loader.config());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, ValidationConfig};
