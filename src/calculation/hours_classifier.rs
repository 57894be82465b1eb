//! Attendance hours classification.
//!
//! This module turns a period's attendance entries into the four hour
//! buckets paid by the aggregator: regular, overtime, night differential
//! and holiday.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculation::split_daily_hours;
use crate::config::PayrollConfig;
use crate::models::{
    AttendanceEntry, AuditStep, AuditWarning, HoursSummary, PayPeriod, calculate_hours_worked,
    is_night_shift_time,
};

/// Warning code for entries whose clock times or recorded hours are invalid.
pub const MALFORMED_ATTENDANCE: &str = "MALFORMED_ATTENDANCE";

/// The classified hours for a period, with the audit step and warnings.
#[derive(Debug, Clone)]
pub struct HoursClassification {
    /// The hour buckets and entry counts.
    pub summary: HoursSummary,
    /// Warnings for entries that were malformed.
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

/// Classifies attendance entries into hour buckets.
///
/// Only entries dated inside `period`, with status `present` and both clock
/// times set, contribute hours. For each of them:
///
/// - hours are `total_hours` when recorded, otherwise derived from the clock
///   times less the unpaid break;
/// - on a holiday, all hours go to the holiday bucket;
/// - otherwise hours up to the daily threshold are regular and the rest
///   overtime;
/// - night-shift entries additionally add their full hours to the
///   night-differential bucket.
///
/// Entries with clock-out before clock-in, or a negative recorded total,
/// contribute zero hours and produce a `MALFORMED_ATTENDANCE` warning.
///
/// # Arguments
///
/// * `entries` - The attendance entries to classify
/// * `period` - The pay period, including its holidays
/// * `config` - The payroll configuration (threshold and night window)
/// * `step_number` - The step number for audit trail sequencing
pub fn classify_hours(
    entries: &[AttendanceEntry],
    period: &PayPeriod,
    config: &PayrollConfig,
    step_number: u32,
) -> HoursClassification {
    let threshold = config.overtime.daily_threshold_hours;
    let mut summary = HoursSummary::default();
    let mut warnings = Vec::new();
    let mut breakdown = Vec::new();

    for entry in entries {
        if !period.contains_date(entry.date) || !entry.is_countable() {
            debug!(date = %entry.date, status = ?entry.status, "Skipping attendance entry");
            summary.entries_skipped += 1;
            continue;
        }

        let Some(hours) = entry_hours(entry, &mut warnings) else {
            summary.entries_skipped += 1;
            continue;
        };

        let is_night = is_night_entry(entry, config);
        if is_night {
            summary.night_differential_hours += hours;
        }

        if period.is_holiday(entry.date) {
            summary.holiday_hours += hours;
            breakdown.push(serde_json::json!({
                "date": entry.date.to_string(),
                "hours": hours.normalize().to_string(),
                "bucket": "holiday",
                "night_shift": is_night
            }));
        } else {
            let split = split_daily_hours(hours, threshold, step_number);
            summary.regular_hours += split.regular_hours;
            summary.overtime_hours += split.overtime_hours;
            breakdown.push(serde_json::json!({
                "date": entry.date.to_string(),
                "hours": hours.normalize().to_string(),
                "bucket": "daily",
                "night_shift": is_night,
                "split": split.audit_step.reasoning
            }));
        }

        summary.entries_counted += 1;
    }

    debug!(
        regular_hours = %summary.regular_hours,
        overtime_hours = %summary.overtime_hours,
        night_differential_hours = %summary.night_differential_hours,
        holiday_hours = %summary.holiday_hours,
        "Classified attendance hours"
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "hours_classification".to_string(),
        rule_name: "Attendance Hours Classification".to_string(),
        input: serde_json::json!({
            "entries": entries.len(),
            "period_start": period.start_date.to_string(),
            "period_end": period.end_date.to_string(),
            "holidays": period.holidays.iter().map(|h| h.date.to_string()).collect::<Vec<_>>(),
            "daily_threshold": threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_hours": summary.regular_hours.normalize().to_string(),
            "overtime_hours": summary.overtime_hours.normalize().to_string(),
            "night_differential_hours": summary.night_differential_hours.normalize().to_string(),
            "holiday_hours": summary.holiday_hours.normalize().to_string(),
            "entries": breakdown
        }),
        reasoning: format!(
            "{} of {} entries counted ({} skipped): {} regular, {} overtime, {} night differential, {} holiday hours",
            summary.entries_counted,
            entries.len(),
            summary.entries_skipped,
            summary.regular_hours.normalize(),
            summary.overtime_hours.normalize(),
            summary.night_differential_hours.normalize(),
            summary.holiday_hours.normalize()
        ),
    };

    HoursClassification {
        summary,
        warnings,
        audit_step,
    }
}

/// Returns the hours an entry contributes, or `None` if it is malformed.
fn entry_hours(entry: &AttendanceEntry, warnings: &mut Vec<AuditWarning>) -> Option<Decimal> {
    let (time_in, time_out) = (entry.time_in?, entry.time_out?);

    if time_out < time_in {
        warn!(date = %entry.date, %time_in, %time_out, "Clock-out precedes clock-in");
        warnings.push(malformed_warning(format!(
            "Entry on {} clocks out ({}) before clocking in ({}); counted as zero hours",
            entry.date, time_out, time_in
        )));
        return None;
    }

    match entry.total_hours {
        Some(total) if total < Decimal::ZERO => {
            warn!(date = %entry.date, total_hours = %total, "Negative recorded hours");
            warnings.push(malformed_warning(format!(
                "Entry on {} records negative total hours ({}); counted as zero hours",
                entry.date, total
            )));
            None
        }
        Some(total) => Some(total),
        None => Some(calculate_hours_worked(time_in, time_out, entry.break_minutes)),
    }
}

fn is_night_entry(entry: &AttendanceEntry, config: &PayrollConfig) -> bool {
    if entry.is_night_shift {
        return true;
    }
    let night = &config.night_shift;
    night.infer_from_clock
        && entry
            .time_in
            .is_some_and(|t| is_night_shift_time(t, night.start_hour, night.end_hour))
}

fn malformed_warning(message: String) -> AuditWarning {
    AuditWarning {
        code: MALFORMED_ATTENDANCE.to_string(),
        message,
        severity: "medium".to_string(),
    }
}
