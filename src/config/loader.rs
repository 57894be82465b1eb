//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration and the holiday calendar from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Holiday;

use super::types::{HolidayCalendarFile, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides the engine configuration plus the holiday calendar.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml        # Multipliers, tax, normalization divisors
/// └── holidays/           # Optional holiday calendar
///     └── 2026.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Overtime multiplier: {}", loader.config().multipliers.overtime);
///
/// let start = NaiveDate::from_ymd_opt(2026, 12, 16).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
/// for holiday in loader.holidays_between(start, end) {
///     println!("{}: {}", holiday.date, holiday.name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
    holidays: Vec<Holiday>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `payroll.yaml` is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - A configured value is unusable (`InvalidConfig`)
    ///
    /// The `holidays/` directory is optional; when absent the calendar is empty.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let config = Self::load_yaml::<PayrollConfig>(&path.join("payroll.yaml"))?;
        config.validate()?;

        let holidays = Self::load_holidays(&path.join("holidays"))?;

        Ok(Self { config, holidays })
    }

    /// Builds a loader from an in-memory configuration with an empty calendar.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self {
            config,
            holidays: Vec::new(),
        }
    }

    /// Replaces the holiday calendar.
    pub fn with_holidays(mut self, mut holidays: Vec<Holiday>) -> Self {
        holidays.sort_by_key(|h| h.date);
        self.holidays = holidays;
        self
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all calendar files from the holidays directory, sorted by date.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<Holiday>> {
        if !holidays_dir.exists() {
            return Ok(Vec::new());
        }

        let holidays_dir_str = holidays_dir.display().to_string();
        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut holidays = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let calendar = Self::load_yaml::<HolidayCalendarFile>(&path)?;
                holidays.extend(calendar.holidays);
            }
        }

        holidays.sort_by_key(|h| h.date);
        Ok(holidays)
    }

    /// Returns the payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the full holiday calendar, sorted by date.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the calendar holidays falling within `start..=end`.
    pub fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<Holiday> {
        self.holidays
            .iter()
            .filter(|h| h.date >= start && h.date <= end)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().multipliers.overtime, dec("1.25"));
        assert_eq!(loader.config().multipliers.night_differential, dec("1.1"));
        assert_eq!(loader.config().multipliers.holiday, dec("2.0"));
        assert_eq!(loader.config().tax.flat_rate, dec("0.15"));
    }

    #[test]
    fn test_normalization_divisors_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config().normalization.hours_per_day, dec("8"));
        assert_eq!(
            loader.config().normalization.working_days_per_month,
            dec("22")
        );
    }

    #[test]
    fn test_holidays_loaded_and_sorted() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let holidays = loader.holidays();

        assert!(!holidays.is_empty());
        assert!(holidays.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_holidays_between_filters_inclusive_range() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let december = loader.holidays_between(date(2026, 12, 25), date(2026, 12, 31));
        assert!(december.iter().any(|h| h.date == date(2026, 12, 25)));
        assert!(december.iter().all(|h| h.date >= date(2026, 12, 25)));
        assert!(december.iter().all(|h| h.date <= date(2026, 12, 31)));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_from_config_has_empty_calendar() {
        let loader = ConfigLoader::from_config(PayrollConfig::default());
        assert!(loader.holidays().is_empty());
        assert!(
            loader
                .holidays_between(date(2026, 1, 1), date(2026, 12, 31))
                .is_empty()
        );
    }

    #[test]
    fn test_with_holidays_sorts_calendar() {
        let loader = ConfigLoader::from_config(PayrollConfig::default()).with_holidays(vec![
            Holiday::new(date(2026, 12, 30), "Rizal Day"),
            Holiday::new(date(2026, 1, 1), "New Year's Day"),
        ]);

        assert_eq!(loader.holidays()[0].date, date(2026, 1, 1));
        assert_eq!(loader.holidays()[1].date, date(2026, 12, 30));
    }
}
