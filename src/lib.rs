//! Payroll Calculation Engine
//!
//! This crate turns an employee's compensation rates, attendance and
//! recurring obligations for a pay period into gross pay, deductions, tax
//! withholding and net pay, with an audit trace of every calculation step.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
