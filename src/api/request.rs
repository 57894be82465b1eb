//! Request types for the Payroll Calculation Engine API.
//!
//! This module defines the JSON request structures for the
//! `/payroll/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceEntry, CompensationRate, ContributionItem, DeductionItem, EmployeePayrollRequest,
    Holiday, HolidayType, LoanObligation, PayPeriod,
};

/// Request body for the `/payroll/calculate` endpoint.
///
/// Carries one employee's records for a single pay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee being paid.
    pub employee_id: String,
    /// The pay period for the calculation.
    pub pay_period: PayPeriodRequest,
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

/// Pay period information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// Holidays inside the period in addition to the configured calendar.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
}

/// Holiday information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    #[serde(default)]
    pub name: String,
    /// The kind of holiday.
    #[serde(default)]
    pub holiday_type: HolidayType,
}

impl From<CalculationRequest> for EmployeePayrollRequest {
    fn from(req: CalculationRequest) -> Self {
        EmployeePayrollRequest {
            employee_id: req.employee_id,
            pay_period: req.pay_period.into(),
            rates: req.rates,
            attendance: req.attendance,
            deductions: req.deductions,
            contributions: req.contributions,
            loans: req.loans,
            allowance_amount: req.allowance_amount,
            bonus_amount: req.bonus_amount,
            tax_rate: req.tax_rate,
        }
    }
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
            holidays: req.holidays.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<HolidayRequest> for Holiday {
    fn from(req: HolidayRequest) -> Self {
        Holiday {
            date: req.date,
            name: req.name,
            holiday_type: req.holiday_type,
        }
    }
}
