//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod compensation;
mod obligations;
mod pay_period;
mod payroll_request;

pub use attendance::{
    AttendanceEntry, AttendanceStatus, calculate_hours_worked, is_night_shift_time,
};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, HoursSummary, MAX_AMOUNT, MAX_HOURS, PayComponent,
    PayLine, PayrollCalculationInput, PayrollCalculationResult, Payslip,
};
pub use compensation::{CompensationRate, RateType};
pub use obligations::{ContributionItem, DeductionItem, LoanObligation, LoanStatus};
pub use pay_period::{Holiday, HolidayType, PayPeriod};
pub use payroll_request::EmployeePayrollRequest;
