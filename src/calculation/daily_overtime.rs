//! Daily overtime split.
//!
//! This module splits the hours of a single attendance entry into regular
//! hours (up to the daily threshold) and overtime hours (the remainder).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// The result of splitting one entry's hours at the daily threshold.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{DEFAULT_DAILY_OVERTIME_THRESHOLD, split_daily_hours};
/// use rust_decimal::Decimal;
///
/// let split = split_daily_hours(Decimal::new(10, 0), DEFAULT_DAILY_OVERTIME_THRESHOLD, 1);
/// assert_eq!(split.regular_hours, Decimal::new(8, 0));
/// assert_eq!(split.overtime_hours, Decimal::new(2, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySplit {
    /// Hours up to the threshold.
    pub regular_hours: Decimal,
    /// Hours exceeding the threshold (can be zero).
    pub overtime_hours: Decimal,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Default daily overtime threshold in hours.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Splits an entry's worked hours at the daily overtime threshold.
///
/// `regular_hours + overtime_hours` always equals `worked_hours` for
/// non-negative input.
///
/// # Arguments
///
/// * `worked_hours` - The hours credited for one attendance entry
/// * `threshold` - The daily overtime threshold (typically 8 hours)
/// * `step_number` - The step number for audit trail sequencing
pub fn split_daily_hours(
    worked_hours: Decimal,
    threshold: Decimal,
    step_number: u32,
) -> DailySplit {
    let regular_hours = worked_hours.min(threshold);
    let overtime_hours = (worked_hours - threshold).max(Decimal::ZERO);

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{} hours worked exceeds {} hour threshold by {} hours",
            worked_hours.normalize(),
            threshold.normalize(),
            overtime_hours.normalize()
        )
    } else {
        format!(
            "{} hours worked is within {} hour threshold, no overtime",
            worked_hours.normalize(),
            threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_overtime_split".to_string(),
        rule_name: "Daily Overtime Split".to_string(),
        input: serde_json::json!({
            "worked_hours": worked_hours.normalize().to_string(),
            "threshold": threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_hours": regular_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string()
        }),
        reasoning,
    };

    DailySplit {
        regular_hours,
        overtime_hours,
        audit_step,
    }
}
