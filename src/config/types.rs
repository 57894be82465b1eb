//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every field has a default,
//! so an empty `payroll.yaml` yields the standard multipliers and divisors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Holiday;

/// Premium multipliers applied over the hourly rate for each hour bucket.
///
/// Regular hours are always paid at 1.0 and are not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayMultipliers {
    /// Multiplier for hours above the daily overtime threshold.
    pub overtime: Decimal,
    /// Multiplier for night-differential hours.
    pub night_differential: Decimal,
    /// Multiplier for hours worked on a holiday.
    pub holiday: Decimal,
}

impl Default for PayMultipliers {
    fn default() -> Self {
        Self {
            overtime: Decimal::new(125, 2),
            night_differential: Decimal::new(11, 1),
            holiday: Decimal::new(2, 0),
        }
    }
}

/// Tax withholding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxConfig {
    /// Flat withholding rate applied to gross pay when a request does not
    /// supply its own.
    pub flat_rate: Decimal,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            flat_rate: Decimal::new(15, 2),
        }
    }
}

/// Divisors used to normalize daily and monthly rates to an hourly figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Paid hours in one working day.
    pub hours_per_day: Decimal,
    /// Working days assumed in one month.
    pub working_days_per_month: Decimal,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            hours_per_day: Decimal::new(8, 0),
            working_days_per_month: Decimal::new(22, 0),
        }
    }
}

impl NormalizationConfig {
    /// Hours in one working month (`working_days_per_month * hours_per_day`).
    pub fn hours_per_month(&self) -> Decimal {
        self.working_days_per_month * self.hours_per_day
    }
}

/// Overtime detection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimeConfig {
    /// Hours per attendance entry credited as regular before overtime starts.
    pub daily_threshold_hours: Decimal,
}

impl Default for OvertimeConfig {
    fn default() -> Self {
        Self {
            daily_threshold_hours: Decimal::new(8, 0),
        }
    }
}

/// Night window used when night shifts are inferred from clock-in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightShiftConfig {
    /// Hour of day (0-23) at which the night window opens.
    pub start_hour: u32,
    /// Hour of day (0-23) at which the night window closes.
    pub end_hour: u32,
    /// When true, an unflagged entry clocking in inside the window counts as
    /// a night shift.
    pub infer_from_clock: bool,
}

impl Default for NightShiftConfig {
    fn default() -> Self {
        Self {
            start_hour: 22,
            end_hour: 6,
            infer_from_clock: false,
        }
    }
}

/// The complete payroll configuration loaded from `payroll.yaml`.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.multipliers.overtime, Decimal::new(125, 2));
/// assert_eq!(config.normalization.hours_per_month(), Decimal::new(176, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Premium multipliers per hour bucket.
    pub multipliers: PayMultipliers,
    /// Tax withholding settings.
    pub tax: TaxConfig,
    /// Rate normalization divisors.
    pub normalization: NormalizationConfig,
    /// Overtime detection settings.
    pub overtime: OvertimeConfig,
    /// Night window settings.
    pub night_shift: NightShiftConfig,
    /// Decimal places money amounts are rounded to.
    pub currency_scale: u32,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            multipliers: PayMultipliers::default(),
            tax: TaxConfig::default(),
            normalization: NormalizationConfig::default(),
            overtime: OvertimeConfig::default(),
            night_shift: NightShiftConfig::default(),
            currency_scale: 2,
        }
    }
}

impl PayrollConfig {
    /// Checks that every value is usable by the engine.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        let multipliers = [
            ("multipliers.overtime", self.multipliers.overtime),
            (
                "multipliers.night_differential",
                self.multipliers.night_differential,
            ),
            ("multipliers.holiday", self.multipliers.holiday),
        ];
        for (field, value) in multipliers {
            if value < Decimal::ZERO {
                return Err(invalid(field, "must not be negative"));
            }
            if value > MAX_MULTIPLIER {
                return Err(invalid(field, "must be at most 100"));
            }
        }

        if self.tax.flat_rate < Decimal::ZERO || self.tax.flat_rate > Decimal::ONE {
            return Err(invalid("tax.flat_rate", "must be between 0 and 1"));
        }

        let divisors = [
            (
                "normalization.hours_per_day",
                self.normalization.hours_per_day,
            ),
            (
                "normalization.working_days_per_month",
                self.normalization.working_days_per_month,
            ),
        ];
        for (field, value) in divisors {
            if value <= Decimal::ZERO {
                return Err(invalid(field, "must be greater than zero"));
            }
        }

        if self.overtime.daily_threshold_hours < Decimal::ZERO {
            return Err(invalid(
                "overtime.daily_threshold_hours",
                "must not be negative",
            ));
        }

        if self.night_shift.start_hour > 23 || self.night_shift.end_hour > 23 {
            return Err(invalid("night_shift", "hours must be between 0 and 23"));
        }

        if self.currency_scale > 10 {
            return Err(invalid("currency_scale", "must be at most 10"));
        }

        Ok(())
    }
}

const MAX_MULTIPLIER: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Holiday calendar file structure (`holidays/*.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendarFile {
    /// Holidays declared in this file.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_defaults_match_standard_values() {
        let config = PayrollConfig::default();
        assert_eq!(config.multipliers.overtime, dec("1.25"));
        assert_eq!(config.multipliers.night_differential, dec("1.1"));
        assert_eq!(config.multipliers.holiday, dec("2.0"));
        assert_eq!(config.tax.flat_rate, dec("0.15"));
        assert_eq!(config.normalization.hours_per_day, dec("8"));
        assert_eq!(config.normalization.working_days_per_month, dec("22"));
        assert_eq!(config.overtime.daily_threshold_hours, dec("8"));
        assert_eq!(config.currency_scale, 2);
        assert!(!config.night_shift.infer_from_clock);
    }

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let config: PayrollConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, PayrollConfig::default());
    }

    #[test]
    fn test_partial_yaml_overrides_only_given_fields() {
        let yaml = r#"
multipliers:
  overtime: "1.5"
tax:
  flat_rate: "0.20"
"#;
        let config: PayrollConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.multipliers.overtime, dec("1.5"));
        assert_eq!(config.multipliers.holiday, dec("2.0"));
        assert_eq!(config.tax.flat_rate, dec("0.20"));
        assert_eq!(config.normalization.hours_per_month(), dec("176"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(PayrollConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_divisor_is_rejected() {
        let mut config = PayrollConfig::default();
        config.normalization.hours_per_day = Decimal::ZERO;

        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "normalization.hours_per_day");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_tax_rate_above_one_is_rejected() {
        let mut config = PayrollConfig::default();
        config.tax.flat_rate = dec("1.5");

        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "tax.flat_rate");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_multiplier_is_rejected() {
        let mut config = PayrollConfig::default();
        config.multipliers.holiday = dec("-2");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_multiplier_is_rejected() {
        let mut config = PayrollConfig::default();
        config.multipliers.overtime = dec("100");
        assert!(config.validate().is_ok());

        config.multipliers.overtime = dec("100.01");
        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "multipliers.overtime");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_night_hour_out_of_range_is_rejected() {
        let mut config = PayrollConfig::default();
        config.night_shift.start_hour = 24;
        assert!(config.validate().is_err());
    }
}
