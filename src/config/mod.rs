//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module provides functionality to load payroll configuration from YAML
//! files, including pay multipliers, the flat tax rate, rate normalization
//! divisors and the holiday calendar.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Flat tax rate: {}", loader.config().tax.flat_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HolidayCalendarFile, NightShiftConfig, NormalizationConfig, OvertimeConfig, PayMultipliers,
    PayrollConfig, TaxConfig,
};
