//! Compensation rate resolution.
//!
//! This module selects the compensation rate in force for a pay period and
//! normalizes it to an hourly figure.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{NormalizationConfig, PayrollConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, CompensationRate, RateType};

/// The result of resolving an employee's rate, including the audit step.
#[derive(Debug, Clone)]
pub struct RateResolution {
    /// The normalized hourly rate.
    pub hourly_rate: Decimal,
    /// The rate record that was selected.
    pub rate: CompensationRate,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Normalizes a rate record to an hourly amount.
///
/// - hourly: unchanged
/// - daily: `amount / hours_per_day`
/// - monthly: `amount / (working_days_per_month * hours_per_day)`
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::normalize_to_hourly;
/// use payroll_engine::config::NormalizationConfig;
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
/// assert_eq!(
///     normalize_to_hourly(&rate, &NormalizationConfig::default()),
///     Decimal::new(100, 0)
/// );
/// ```
pub fn normalize_to_hourly(
    rate: &CompensationRate,
    normalization: &NormalizationConfig,
) -> Decimal {
    match rate.rate_type {
        RateType::Hourly => rate.amount,
        RateType::Daily => rate.amount / normalization.hours_per_day,
        RateType::Monthly => rate.amount / normalization.hours_per_month(),
    }
}

/// Resolves the compensation rate in force on `as_of` and normalizes it.
///
/// Among active records effective on or before `as_of`, the one with the
/// latest `effective_date` wins; when two share that date, the later record
/// in `rates` wins.
///
/// # Arguments
///
/// * `employee_id` - The employee the rates belong to (used in errors)
/// * `rates` - The employee's rate records
/// * `as_of` - The date the rate must be effective on (the period start)
/// * `config` - The payroll configuration holding the normalization divisors
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// - `RateNotFound` if no active record is effective on `as_of`
/// - `InvalidRate` if the selected record's amount is not positive
pub fn resolve_rate(
    employee_id: &str,
    rates: &[CompensationRate],
    as_of: NaiveDate,
    config: &PayrollConfig,
    step_number: u32,
) -> EngineResult<RateResolution> {
    let rate = rates
        .iter()
        .filter(|r| r.is_effective_on(as_of))
        .max_by_key(|r| r.effective_date)
        .ok_or_else(|| EngineError::RateNotFound {
            employee_id: employee_id.to_string(),
            date: as_of,
        })?;

    if rate.amount <= Decimal::ZERO {
        return Err(EngineError::InvalidRate {
            amount: rate.amount,
        });
    }

    let hourly_rate = normalize_to_hourly(rate, &config.normalization);

    let divisor = match rate.rate_type {
        RateType::Hourly => Decimal::ONE,
        RateType::Daily => config.normalization.hours_per_day,
        RateType::Monthly => config.normalization.hours_per_month(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "rate_resolution".to_string(),
        rule_name: "Compensation Rate Resolution".to_string(),
        input: serde_json::json!({
            "employee_id": employee_id,
            "as_of": as_of.to_string(),
            "candidate_rates": rates.len()
        }),
        output: serde_json::json!({
            "amount": rate.amount.to_string(),
            "rate_type": rate.rate_type.as_str(),
            "rate_effective_date": rate.effective_date.to_string(),
            "divisor": divisor.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string()
        }),
        reasoning: format!(
            "Selected {} rate ${} effective {}; {} / {} = ${} per hour",
            rate.rate_type.as_str(),
            rate.amount.normalize(),
            rate.effective_date,
            rate.amount.normalize(),
            divisor.normalize(),
            hourly_rate.normalize()
        ),
    };

    Ok(RateResolution {
        hourly_rate,
        rate: rate.clone(),
        audit_step,
    })
}
