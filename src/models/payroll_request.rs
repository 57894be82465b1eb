//! Raw per-employee records for one payroll calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculation_result::{MAX_HOURS, check_amounts, check_range, check_tax_rate};
use super::{
    AttendanceEntry, CompensationRate, ContributionItem, DeductionItem, LoanObligation, PayPeriod,
};
use crate::error::EngineResult;

/// Everything the full pipeline needs for one employee and period.
///
/// The records are a consistent snapshot fetched by the caller for exactly
/// this employee and period; the engine never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayrollRequest {
    /// The employee being paid.
    pub employee_id: String,
    /// The pay period and its holidays.
    pub pay_period: PayPeriod,
    /// The employee's compensation rate records.
    pub rates: Vec<CompensationRate>,
    /// Attendance entries for the period.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
    /// Recurring deductions.
    #[serde(default)]
    pub deductions: Vec<DeductionItem>,
    /// Statutory contributions.
    #[serde(default)]
    pub contributions: Vec<ContributionItem>,
    /// Loans repaid through payroll.
    #[serde(default)]
    pub loans: Vec<LoanObligation>,
    /// Flat allowance for the period.
    #[serde(default)]
    pub allowance_amount: Decimal,
    /// Flat bonus for the period.
    #[serde(default)]
    pub bonus_amount: Decimal,
    /// Flat tax rate override.
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
}

impl EmployeePayrollRequest {
    /// Checks the request's amounts, tax override and recorded hours.
    ///
    /// Rates are checked when resolved, and a negative recorded total on an
    /// attendance entry is reported as malformed attendance instead, so
    /// neither is rejected here.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first out-of-range field.
    pub fn validate(&self) -> EngineResult<()> {
        check_amounts(
            self.allowance_amount,
            self.bonus_amount,
            &self.deductions,
            &self.contributions,
            &self.loans,
        )?;
        check_tax_rate(self.tax_rate)?;
        for entry in &self.attendance {
            if let Some(total) = entry.total_hours {
                check_range("attendance.total_hours", total.max(Decimal::ZERO), MAX_HOURS)?;
            }
        }
        Ok(())
    }
}
