//! Payroll calculation entry points.
//!
//! [`calculate_payroll`] prices pre-bucketed hours and nets them into a
//! [`PayrollCalculationResult`]. [`calculate_employee_payroll`] runs the
//! full pipeline from raw records: rate resolution, hours classification,
//! aggregation and netting, wrapped in a [`Payslip`] with an audit trace.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{
    FlatRateTax, GrossPay, NettedPay, TaxPolicy, aggregate_pay, classify_hours, net_pay,
    resolve_rate,
};
use crate::config::{ConfigLoader, PayrollConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditTrace, EmployeePayrollRequest, PayrollCalculationInput, PayrollCalculationResult, Payslip,
};

/// Calculates gross-to-net pay for pre-bucketed hours.
///
/// The flat tax rate is `input.tax_rate` when present, otherwise the
/// configured rate. Every deduction and contribution in `input` is netted;
/// loans are netted only when `active`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::PayrollCalculationInput;
/// use rust_decimal::Decimal;
///
/// let input = PayrollCalculationInput::new(Decimal::new(8, 0), Decimal::new(100, 0));
/// let result = calculate_payroll(&input, &PayrollConfig::default());
///
/// assert_eq!(result.gross_pay, Decimal::new(800, 0));
/// assert_eq!(result.tax_withheld, Decimal::new(120, 0));
/// assert_eq!(result.net_pay, Decimal::new(680, 0));
/// ```
///
/// # Panics
///
/// Values outside the bounds checked by [`PayrollCalculationInput::validate`]
/// can overflow `Decimal` arithmetic. Untrusted input must be validated first.
pub fn calculate_payroll(
    input: &PayrollCalculationInput,
    config: &PayrollConfig,
) -> PayrollCalculationResult {
    let policy = flat_rate_policy(input, config);
    calculate_payroll_with_policy(input, config, &policy)
}

/// Calculates gross-to-net pay with an explicit tax policy.
///
/// `input.tax_rate` is ignored; `tax_policy` alone decides withholding.
pub fn calculate_payroll_with_policy(
    input: &PayrollCalculationInput,
    config: &PayrollConfig,
    tax_policy: &dyn TaxPolicy,
) -> PayrollCalculationResult {
    let (gross, netted) = price_and_net(input, config, tax_policy);
    build_result(&gross, &netted)
}

/// Runs the full payroll pipeline for one employee and period.
///
/// 1. Reject a period whose start is after its end.
/// 2. Resolve the rate in force on the period start.
/// 3. Classify attendance hours, with the loader's holiday calendar merged
///    into the period's holidays.
/// 4. Drop inactive deductions and contributions.
/// 5. Aggregate gross pay and net it, applying active loans once.
///
/// # Errors
///
/// - `InvalidPeriod` if `start_date > end_date`
/// - `RateNotFound` if no active rate is effective on the period start
/// - `InvalidRate` if the resolved rate is not positive
/// - `InvalidInput` if an amount, the tax override or a classified hour
///   bucket is out of range
pub fn calculate_employee_payroll(
    request: &EmployeePayrollRequest,
    loader: &ConfigLoader,
) -> EngineResult<Payslip> {
    let start_time = Instant::now();
    let config = loader.config();

    if !request.pay_period.is_valid() {
        return Err(EngineError::InvalidPeriod {
            start: request.pay_period.start_date,
            end: request.pay_period.end_date,
        });
    }
    request.validate()?;

    let mut pay_period = request.pay_period.clone();
    pay_period.merge_holidays(loader.holidays_between(pay_period.start_date, pay_period.end_date));

    let mut step_number: u32 = 1;

    let resolution = resolve_rate(
        &request.employee_id,
        &request.rates,
        pay_period.start_date,
        config,
        step_number,
    )?;
    step_number += 1;
    debug!(
        employee_id = %request.employee_id,
        hourly_rate = %resolution.hourly_rate,
        rate_type = resolution.rate.rate_type.as_str(),
        "Resolved compensation rate"
    );

    let classification = classify_hours(&request.attendance, &pay_period, config, step_number);
    step_number += 1;

    let input = PayrollCalculationInput {
        regular_hours: classification.summary.regular_hours,
        hourly_rate: resolution.hourly_rate,
        overtime_hours: classification.summary.overtime_hours,
        night_differential_hours: classification.summary.night_differential_hours,
        holiday_hours: classification.summary.holiday_hours,
        allowance_amount: request.allowance_amount,
        bonus_amount: request.bonus_amount,
        deductions: request
            .deductions
            .iter()
            .filter(|d| d.is_active)
            .cloned()
            .collect(),
        contributions: request
            .contributions
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect(),
        loans: request.loans.clone(),
        tax_rate: request.tax_rate,
    };
    input.validate()?;

    let policy = flat_rate_policy(&input, config);
    let (gross, netted) = price_and_net(&input, config, &policy);
    let aggregation_step = gross.audit_step(input.hourly_rate, step_number);
    step_number += 1;
    let netting_step = netted.audit_step(step_number);

    let result = build_result(&gross, &netted);
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        employee_id = %request.employee_id,
        gross_pay = %result.gross_pay,
        net_pay = %result.net_pay,
        warnings = classification.warnings.len(),
        duration_us,
        "Payroll calculated"
    );

    Ok(Payslip {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: request.employee_id.clone(),
        pay_period,
        hourly_rate: resolution.hourly_rate,
        rate_type: resolution.rate.rate_type,
        hours: classification.summary,
        pay_lines: gross.pay_lines,
        result,
        audit_trace: AuditTrace {
            steps: vec![
                resolution.audit_step,
                classification.audit_step,
                aggregation_step,
                netting_step,
            ],
            warnings: classification.warnings,
            duration_us,
        },
    })
}

fn flat_rate_policy(input: &PayrollCalculationInput, config: &PayrollConfig) -> FlatRateTax {
    FlatRateTax::new(input.tax_rate.unwrap_or(config.tax.flat_rate))
}

fn price_and_net(
    input: &PayrollCalculationInput,
    config: &PayrollConfig,
    tax_policy: &dyn TaxPolicy,
) -> (GrossPay, NettedPay) {
    let gross = aggregate_pay(input, &config.multipliers, config.currency_scale);
    let netted = net_pay(
        gross.gross_pay,
        &input.deductions,
        &input.contributions,
        tax_policy,
        config.currency_scale,
    )
    .apply_loans(&input.loans);
    (gross, netted)
}

fn build_result(gross: &GrossPay, netted: &NettedPay) -> PayrollCalculationResult {
    PayrollCalculationResult {
        regular_pay: gross.regular_pay,
        overtime_pay: gross.overtime_pay,
        night_differential_pay: gross.night_differential_pay,
        holiday_pay: gross.holiday_pay,
        allowance_amount: gross.allowance_amount,
        bonus_amount: gross.bonus_amount,
        gross_pay: gross.gross_pay,
        total_deductions: netted.total_deductions,
        total_contributions: netted.total_contributions,
        tax_withheld: netted.tax_withheld,
        loan_payments: netted.loan_payments,
        net_pay: netted.net_pay,
    }
}
