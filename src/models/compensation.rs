//! Compensation rate model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The unit a compensation amount is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateType {
    /// Amount is paid per hour.
    Hourly,
    /// Amount is paid per working day.
    Daily,
    /// Amount is paid per month.
    Monthly,
}

impl RateType {
    /// Returns the snake_case name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RateType::Hourly => "hourly",
            RateType::Daily => "daily",
            RateType::Monthly => "monthly",
        }
    }
}

/// A compensation rate record for an employee.
///
/// An employee may have several records over time; the one in force for a
/// period is the latest active record effective on or before the period start.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CompensationRate, RateType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rate = CompensationRate {
///     amount: Decimal::new(17600, 0),
///     rate_type: RateType::Monthly,
///     effective_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     is_active: true,
/// };
/// assert!(rate.is_effective_on(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationRate {
    /// The rate amount in currency units per `rate_type`.
    pub amount: Decimal,
    /// The unit the amount is quoted in.
    pub rate_type: RateType,
    /// The first date the rate applies to.
    pub effective_date: NaiveDate,
    /// Whether the record is currently active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CompensationRate {
    /// Returns true if the rate is active and already effective on `date`.
    pub fn is_effective_on(&self, date: NaiveDate) -> bool {
        self.is_active && self.effective_date <= date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(effective: &str, is_active: bool) -> CompensationRate {
        CompensationRate {
            amount: Decimal::new(100, 0),
            rate_type: RateType::Hourly,
            effective_date: NaiveDate::parse_from_str(effective, "%Y-%m-%d").unwrap(),
            is_active,
        }
    }

    #[test]
    fn test_effective_on_same_day() {
        let rate = rate("2026-03-01", true);
        assert!(rate.is_effective_on(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
    }

    #[test]
    fn test_not_effective_before_effective_date() {
        let rate = rate("2026-03-01", true);
        assert!(!rate.is_effective_on(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()));
    }

    #[test]
    fn test_inactive_rate_is_never_effective() {
        let rate = rate("2026-01-01", false);
        assert!(!rate.is_effective_on(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()));
    }

    #[test]
    fn test_deserialize_rate_defaults_to_active() {
        let json = r#"{
            "amount": "650.00",
            "rate_type": "daily",
            "effective_date": "2026-01-01"
        }"#;

        let rate: CompensationRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.rate_type, RateType::Daily);
        assert_eq!(rate.amount, Decimal::new(65000, 2));
        assert!(rate.is_active);
    }

    #[test]
    fn test_rate_type_serialization() {
        assert_eq!(
            serde_json::to_string(&RateType::Hourly).unwrap(),
            "\"hourly\""
        );
        assert_eq!(
            serde_json::to_string(&RateType::Monthly).unwrap(),
            "\"monthly\""
        );
        assert_eq!(RateType::Daily.as_str(), "daily");
    }
}
