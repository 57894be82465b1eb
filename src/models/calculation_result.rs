//! Calculation input and result models for the Payroll Calculation Engine.
//!
//! This module contains the [`PayrollCalculationInput`] consumed by the pay
//! aggregator, the [`PayrollCalculationResult`] it produces, and the
//! [`Payslip`] wrapper returned by the full pipeline together with its
//! audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ContributionItem, DeductionItem, LoanObligation, PayPeriod, RateType};
use crate::error::{EngineError, EngineResult};

/// Largest hour count accepted for any single bucket or attendance entry.
pub const MAX_HOURS: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Largest money amount (rate, allowance, obligation) accepted in a request.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Pre-bucketed hours, rate and obligations for one employee and period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollCalculationInput;
/// use rust_decimal::Decimal;
///
/// let mut input = PayrollCalculationInput::new(Decimal::new(8, 0), Decimal::new(100, 0));
/// input.overtime_hours = Decimal::new(2, 0);
/// assert!(input.tax_rate.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculationInput {
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// The normalized hourly rate.
    pub hourly_rate: Decimal,
    /// Hours paid at the overtime multiplier.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Hours receiving the night-differential premium.
    #[serde(default)]
    pub night_differential_hours: Decimal,
    /// Hours paid at the holiday multiplier.
    #[serde(default)]
    pub holiday_hours: Decimal,
    /// Flat allowance added to gross pay.
    #[serde(default)]
    pub allowance_amount: Decimal,
    /// Flat bonus added to gross pay.
    #[serde(default)]
    pub bonus_amount: Decimal,
    /// Deductions for the period.
    #[serde(default)]
    pub deductions: Vec<DeductionItem>,
    /// Contributions for the period.
    #[serde(default)]
    pub contributions: Vec<ContributionItem>,
    /// Loans whose active installments are netted once.
    #[serde(default)]
    pub loans: Vec<LoanObligation>,
    /// Flat tax rate; the configured rate applies when absent.
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
}

impl PayrollCalculationInput {
    /// Creates an input with only regular hours and an hourly rate.
    pub fn new(regular_hours: Decimal, hourly_rate: Decimal) -> Self {
        Self {
            regular_hours,
            hourly_rate,
            overtime_hours: Decimal::ZERO,
            night_differential_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            allowance_amount: Decimal::ZERO,
            bonus_amount: Decimal::ZERO,
            deductions: Vec::new(),
            contributions: Vec::new(),
            loans: Vec::new(),
            tax_rate: None,
        }
    }

    /// Checks that every value lies in the range the engine prices.
    ///
    /// Hours must be in `[0, MAX_HOURS]`, money amounts in `[0, MAX_AMOUNT]`
    /// and `tax_rate` in `[0, 1]`. Within these bounds, with multipliers of
    /// at most 100, no product or sum can overflow a `Decimal`.
    ///
    /// # Errors
    ///
    /// - `InvalidRate` if `hourly_rate` is not positive
    /// - `InvalidInput` naming the first out-of-range field
    pub fn validate(&self) -> EngineResult<()> {
        if self.hourly_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                amount: self.hourly_rate,
            });
        }
        check_range("hourly_rate", self.hourly_rate, MAX_AMOUNT)?;

        check_range("regular_hours", self.regular_hours, MAX_HOURS)?;
        check_range("overtime_hours", self.overtime_hours, MAX_HOURS)?;
        check_range(
            "night_differential_hours",
            self.night_differential_hours,
            MAX_HOURS,
        )?;
        check_range("holiday_hours", self.holiday_hours, MAX_HOURS)?;

        check_amounts(
            self.allowance_amount,
            self.bonus_amount,
            &self.deductions,
            &self.contributions,
            &self.loans,
        )?;
        check_tax_rate(self.tax_rate)
    }
}

/// Rejects a value that is negative or above `max`.
pub(crate) fn check_range(field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(invalid_input(field, "must not be negative".to_string()));
    }
    if value > max {
        return Err(invalid_input(field, format!("must be at most {}", max)));
    }
    Ok(())
}

/// Range-checks the flat amounts and every obligation.
pub(crate) fn check_amounts(
    allowance_amount: Decimal,
    bonus_amount: Decimal,
    deductions: &[DeductionItem],
    contributions: &[ContributionItem],
    loans: &[LoanObligation],
) -> EngineResult<()> {
    check_range("allowance_amount", allowance_amount, MAX_AMOUNT)?;
    check_range("bonus_amount", bonus_amount, MAX_AMOUNT)?;
    for deduction in deductions {
        check_range("deductions.amount", deduction.amount, MAX_AMOUNT)?;
    }
    for contribution in contributions {
        check_range(
            "contributions.employee_share",
            contribution.employee_share,
            MAX_AMOUNT,
        )?;
        check_range(
            "contributions.employer_share",
            contribution.employer_share,
            MAX_AMOUNT,
        )?;
    }
    for loan in loans {
        check_range("loans.monthly_payment", loan.monthly_payment, MAX_AMOUNT)?;
    }
    Ok(())
}

/// Rejects a tax rate override outside `[0, 1]`.
pub(crate) fn check_tax_rate(tax_rate: Option<Decimal>) -> EngineResult<()> {
    match tax_rate {
        Some(rate) if rate < Decimal::ZERO || rate > Decimal::ONE => Err(invalid_input(
            "tax_rate",
            "must be between 0 and 1".to_string(),
        )),
        _ => Ok(()),
    }
}

fn invalid_input(field: &str, message: String) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

/// Pay component a [`PayLine`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayComponent {
    /// Regular hours at the base rate.
    Regular,
    /// Overtime hours.
    Overtime,
    /// Night-differential premium hours.
    NightDifferential,
    /// Holiday hours.
    Holiday,
    /// Flat allowance.
    Allowance,
    /// Flat bonus.
    Bonus,
}

/// A single earnings line contributing to gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The component this line pays.
    pub component: PayComponent,
    /// Hours paid (zero for flat amounts).
    pub hours: Decimal,
    /// The hourly rate after the multiplier (zero for flat amounts).
    pub rate: Decimal,
    /// The multiplier applied over the hourly rate.
    pub multiplier: Decimal,
    /// The rounded amount for this line.
    pub amount: Decimal,
}

/// The monetary outcome of one payroll calculation.
///
/// `gross_pay` is exactly the sum of the six pay components, and
/// `net_pay = gross_pay - total_deductions - total_contributions - tax_withheld`,
/// where `total_deductions` already includes `loan_payments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculationResult {
    /// Regular hours pay.
    pub regular_pay: Decimal,
    /// Overtime pay.
    pub overtime_pay: Decimal,
    /// Night-differential pay.
    pub night_differential_pay: Decimal,
    /// Holiday pay.
    pub holiday_pay: Decimal,
    /// Flat allowance.
    pub allowance_amount: Decimal,
    /// Flat bonus.
    pub bonus_amount: Decimal,
    /// Sum of the six pay components.
    pub gross_pay: Decimal,
    /// Deductions including active loan installments.
    pub total_deductions: Decimal,
    /// Employee-side contributions.
    pub total_contributions: Decimal,
    /// Tax withheld from gross pay.
    pub tax_withheld: Decimal,
    /// Active loan installments (already included in `total_deductions`).
    pub loan_payments: Decimal,
    /// Take-home pay; may be negative.
    pub net_pay: Decimal,
}

impl PayrollCalculationResult {
    /// Sums the six pay components independently of `gross_pay`.
    pub fn component_total(&self) -> Decimal {
        self.regular_pay
            + self.overtime_pay
            + self.night_differential_pay
            + self.holiday_pay
            + self.allowance_amount
            + self.bonus_amount
    }
}

/// Classified hours for the period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursSummary {
    /// Hours credited as regular.
    pub regular_hours: Decimal,
    /// Hours credited as overtime.
    pub overtime_hours: Decimal,
    /// Hours receiving the night-differential premium.
    pub night_differential_hours: Decimal,
    /// Hours worked on holidays.
    pub holiday_hours: Decimal,
    /// Attendance entries that contributed hours.
    pub entries_counted: u32,
    /// Attendance entries skipped (outside the period, not present, or
    /// missing a clock time).
    pub entries_skipped: u32,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag data-quality issues that did not stop the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The payslip produced by the full payroll pipeline.
///
/// The caller is responsible for persisting or discarding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the payslip is for.
    pub employee_id: String,
    /// The pay period, including the holidays that applied.
    pub pay_period: PayPeriod,
    /// The hourly rate used for every component.
    pub hourly_rate: Decimal,
    /// The unit of the rate record the hourly rate was derived from.
    pub rate_type: RateType,
    /// Classified hours.
    pub hours: HoursSummary,
    /// Earnings lines making up gross pay.
    pub pay_lines: Vec<PayLine>,
    /// The monetary result.
    pub result: PayrollCalculationResult,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
