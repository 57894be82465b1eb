//! HTTP API module for the Payroll Calculation Engine.
//!
//! This module provides the REST API endpoints for calculating an
//! employee's payroll from raw records or from pre-bucketed hours.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, HolidayRequest, PayPeriodRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
