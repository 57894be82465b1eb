//! Attendance entry model and worked-hours derivation.
//!
//! This module defines the [`AttendanceEntry`] struct recorded by the time
//! clock, and the pure helpers used to turn clock times into hours.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Attendance status recorded for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee worked. Only present entries contribute hours.
    Present,
    /// The employee did not report.
    Absent,
    /// The employee reported late.
    Late,
    /// The employee worked half a day.
    HalfDay,
    /// The employee was on approved leave.
    OnLeave,
}

/// A single attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The working date of the entry.
    pub date: NaiveDate,
    /// Clock-in timestamp, if recorded.
    #[serde(default)]
    pub time_in: Option<NaiveDateTime>,
    /// Clock-out timestamp, if recorded.
    #[serde(default)]
    pub time_out: Option<NaiveDateTime>,
    /// Hours recorded by the time-keeping system, if already computed.
    #[serde(default)]
    pub total_hours: Option<Decimal>,
    /// Unpaid break minutes subtracted when hours are derived from clock times.
    #[serde(default)]
    pub break_minutes: u32,
    /// Whether the entry belongs to a night shift.
    #[serde(default)]
    pub is_night_shift: bool,
    /// The attendance status of the entry.
    pub status: AttendanceStatus,
}

impl AttendanceEntry {
    /// Returns true if both clock-in and clock-out are recorded.
    pub fn has_clock_times(&self) -> bool {
        self.time_in.is_some() && self.time_out.is_some()
    }

    /// Returns true if the entry is present with both clock times set.
    pub fn is_countable(&self) -> bool {
        self.status == AttendanceStatus::Present && self.has_clock_times()
    }
}

/// Calculates hours worked between two timestamps, less an unpaid break.
///
/// Seconds on the punches count toward the total.
///
/// The result is floored at zero: a clock-out before clock-in, or a break
/// longer than the interval, yields zero hours rather than a negative figure.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::calculate_hours_worked;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let fmt = "%Y-%m-%d %H:%M:%S";
/// let time_in = NaiveDateTime::parse_from_str("2026-03-02 08:00:00", fmt).unwrap();
/// let time_out = NaiveDateTime::parse_from_str("2026-03-02 17:00:00", fmt).unwrap();
///
/// assert_eq!(calculate_hours_worked(time_in, time_out, 60), Decimal::new(8, 0));
/// assert_eq!(calculate_hours_worked(time_out, time_in, 0), Decimal::ZERO);
/// ```
pub fn calculate_hours_worked(
    time_in: NaiveDateTime,
    time_out: NaiveDateTime,
    break_minutes: u32,
) -> Decimal {
    let worked_seconds = (time_out - time_in).num_seconds() - i64::from(break_minutes) * 60;

    if worked_seconds <= 0 {
        return Decimal::ZERO;
    }

    Decimal::new(worked_seconds, 0) / Decimal::new(3600, 0)
}

/// Returns true if `time` falls in the night window `[start_hour, end_hour)`.
///
/// The window wraps past midnight when `start_hour > end_hour` (22 → 6 covers
/// 22:00 through 05:59).
pub fn is_night_shift_time(time: NaiveDateTime, start_hour: u32, end_hour: u32) -> bool {
    let hour = time.hour();
    if start_hour > end_hour {
        hour >= start_hour || hour < end_hour
    } else {
        hour >= start_hour && hour < end_hour
    }
}
