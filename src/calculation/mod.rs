//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains the pipeline stages that turn an employee's raw
//! records into gross and net pay: compensation rate resolution, attendance
//! hours classification with daily overtime, gross pay aggregation, tax
//! withholding, and deduction/contribution/loan netting.

mod daily_overtime;
mod engine;
mod hours_classifier;
mod netting;
mod pay_aggregator;
mod rate_resolver;
mod tax;

pub use daily_overtime::{DEFAULT_DAILY_OVERTIME_THRESHOLD, DailySplit, split_daily_hours};
pub use engine::{calculate_employee_payroll, calculate_payroll, calculate_payroll_with_policy};
pub use hours_classifier::{HoursClassification, MALFORMED_ATTENDANCE, classify_hours};
pub use netting::{BaseNetting, NettedPay, net_pay};
pub use pay_aggregator::{GrossPay, aggregate_pay, round_currency};
pub use rate_resolver::{RateResolution, normalize_to_hourly, resolve_rate};
pub use tax::{FlatRateTax, TaxPolicy};
