//! Pay period and holiday models.
//!
//! This module contains the [`PayPeriod`] and [`Holiday`] types that define
//! the window a payroll calculation covers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of holiday declared on the calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    /// A regular (statutory) holiday.
    #[default]
    Regular,
    /// A special non-working day.
    Special,
}

/// A holiday on the calendar.
///
/// Hours worked on a holiday date are paid at the holiday multiplier.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Holiday, HolidayType};
/// use chrono::NaiveDate;
///
/// let holiday = Holiday::new(NaiveDate::from_ymd_opt(2026, 6, 12).unwrap(), "Independence Day");
/// assert_eq!(holiday.holiday_type, HolidayType::Regular);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    #[serde(default)]
    pub name: String,
    /// The kind of holiday.
    #[serde(default)]
    pub holiday_type: HolidayType,
}

impl Holiday {
    /// Creates a regular holiday.
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            holiday_type: HolidayType::Regular,
        }
    }
}

/// Represents a pay period with its date range and the holidays inside it.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Holiday, PayPeriod};
/// use chrono::NaiveDate;
///
/// let pay_period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
///     holidays: vec![Holiday::new(
///         NaiveDate::from_ymd_opt(2026, 6, 12).unwrap(),
///         "Independence Day",
///     )],
/// };
///
/// assert!(pay_period.contains_date(NaiveDate::from_ymd_opt(2026, 6, 3).unwrap()));
/// assert!(pay_period.is_holiday(NaiveDate::from_ymd_opt(2026, 6, 12).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// Holidays that fall within this pay period.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl PayPeriod {
    /// Returns true if the period's start is not after its end.
    pub fn is_valid(&self) -> bool {
        self.start_date <= self.end_date
    }

    /// Checks if a given date falls within this pay period (inclusive).
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
    ///     holidays: vec![],
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 6, 15).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 5, 31).unwrap())); // before
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 6, 16).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks if a given date matches any holiday in this pay period.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    /// Adds holidays not already present (matched by date).
    pub fn merge_holidays(&mut self, holidays: impl IntoIterator<Item = Holiday>) {
        for holiday in holidays {
            if !self.is_holiday(holiday.date) {
                self.holidays.push(holiday);
            }
        }
        self.holidays.sort_by_key(|h| h.date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_pay_period_with_holiday() -> PayPeriod {
        PayPeriod {
            start_date: date(2026, 6, 1),
            end_date: date(2026, 6, 15),
            holidays: vec![Holiday::new(date(2026, 6, 12), "Independence Day")],
        }
    }

    fn create_pay_period_no_holidays() -> PayPeriod {
        PayPeriod {
            start_date: date(2026, 6, 1),
            end_date: date(2026, 6, 15),
            holidays: vec![],
        }
    }

    #[test]
    fn test_contains_date_within_period() {
        let period = create_pay_period_no_holidays();
        assert!(period.contains_date(date(2026, 6, 7)));
    }

    #[test]
    fn test_contains_date_outside_period() {
        let period = create_pay_period_no_holidays();
        assert!(!period.contains_date(date(2026, 6, 16)));
    }

    #[test]
    fn test_contains_date_on_boundaries() {
        let period = create_pay_period_no_holidays();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
    }

    #[test]
    fn test_is_holiday_returns_true() {
        let period = create_pay_period_with_holiday();
        assert!(period.is_holiday(date(2026, 6, 12)));
    }

    #[test]
    fn test_is_holiday_returns_false() {
        let period = create_pay_period_with_holiday();
        assert!(!period.is_holiday(date(2026, 6, 11)));
    }

    #[test]
    fn test_is_valid() {
        assert!(create_pay_period_no_holidays().is_valid());

        let single_day = PayPeriod {
            start_date: date(2026, 6, 1),
            end_date: date(2026, 6, 1),
            holidays: vec![],
        };
        assert!(single_day.is_valid());

        let reversed = PayPeriod {
            start_date: date(2026, 6, 15),
            end_date: date(2026, 6, 1),
            holidays: vec![],
        };
        assert!(!reversed.is_valid());
    }

    #[test]
    fn test_merge_holidays_skips_duplicate_dates() {
        let mut period = create_pay_period_with_holiday();
        period.merge_holidays(vec![
            Holiday::new(date(2026, 6, 12), "Duplicate"),
            Holiday::new(date(2026, 6, 5), "Company Foundation Day"),
        ]);

        assert_eq!(period.holidays.len(), 2);
        assert_eq!(period.holidays[0].date, date(2026, 6, 5));
        assert_eq!(period.holidays[1].name, "Independence Day");
    }

    #[test]
    fn test_deserialize_pay_period() {
        let json = r#"{
            "start_date": "2026-06-01",
            "end_date": "2026-06-15",
            "holidays": [
                { "date": "2026-06-12", "name": "Independence Day" }
            ]
        }"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period.start_date, date(2026, 6, 1));
        assert_eq!(period.holidays.len(), 1);
        assert_eq!(period.holidays[0].holiday_type, HolidayType::Regular);
    }

    #[test]
    fn test_deserialize_pay_period_without_holidays() {
        let json = r#"{ "start_date": "2026-06-01", "end_date": "2026-06-15" }"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert!(period.holidays.is_empty());
    }

    #[test]
    fn test_serialize_special_holiday() {
        let holiday = Holiday {
            date: date(2026, 8, 21),
            name: "Ninoy Aquino Day".to_string(),
            holiday_type: HolidayType::Special,
        };
        let json = serde_json::to_string(&holiday).unwrap();
        assert!(json.contains("\"date\":\"2026-08-21\""));
        assert!(json.contains("\"holiday_type\":\"special\""));
    }
}
