//! Recurring deductions, statutory contributions and loan obligations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// A recurring, period-flat deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionItem {
    /// The amount deducted each period.
    pub amount: Decimal,
    /// Optional label (e.g. "uniform", "cash advance").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Inactive deductions are ignored by the payroll pipeline.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl DeductionItem {
    /// Creates an active deduction with no description.
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            description: None,
            is_active: true,
        }
    }
}

/// A statutory contribution split between employee and employer.
///
/// Only the employee share reduces net pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionItem {
    /// The portion borne by the employee.
    pub employee_share: Decimal,
    /// The portion borne by the employer; informational only.
    #[serde(default)]
    pub employer_share: Decimal,
    /// Optional label (e.g. "SSS", "PhilHealth", "Pag-IBIG").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Inactive contributions are ignored by the payroll pipeline.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl ContributionItem {
    /// Creates an active contribution with only an employee share.
    pub fn new(employee_share: Decimal) -> Self {
        Self {
            employee_share,
            employer_share: Decimal::ZERO,
            description: None,
            is_active: true,
        }
    }
}

/// Lifecycle status of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// The loan is being repaid; its installment is deducted each period.
    Active,
    /// The loan is fully repaid.
    Paid,
    /// The loan was cancelled.
    Cancelled,
}

/// A loan repaid through payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanObligation {
    /// The installment deducted each period while the loan is active.
    pub monthly_payment: Decimal,
    /// The loan status.
    pub status: LoanStatus,
}

impl LoanObligation {
    /// Creates an active loan.
    pub fn active(monthly_payment: Decimal) -> Self {
        Self {
            monthly_payment,
            status: LoanStatus::Active,
        }
    }

    /// Returns true if the loan's installment is due this period.
    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_deduction_defaults() {
        let deduction: DeductionItem = serde_json::from_str(r#"{ "amount": "500" }"#).unwrap();
        assert_eq!(deduction.amount, Decimal::new(500, 0));
        assert!(deduction.is_active);
        assert!(deduction.description.is_none());
    }

    #[test]
    fn test_deserialize_contribution_defaults() {
        let contribution: ContributionItem =
            serde_json::from_str(r#"{ "employee_share": "300", "description": "SSS" }"#).unwrap();
        assert_eq!(contribution.employee_share, Decimal::new(300, 0));
        assert_eq!(contribution.employer_share, Decimal::ZERO);
        assert_eq!(contribution.description.as_deref(), Some("SSS"));
        assert!(contribution.is_active);
    }

    #[test]
    fn test_loan_status_gates_activity() {
        assert!(LoanObligation::active(Decimal::new(200, 0)).is_active());

        let paid = LoanObligation {
            monthly_payment: Decimal::new(200, 0),
            status: LoanStatus::Paid,
        };
        assert!(!paid.is_active());
    }

    #[test]
    fn test_loan_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LoanStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        let loan: LoanObligation =
            serde_json::from_str(r#"{ "monthly_payment": "200", "status": "active" }"#).unwrap();
        assert_eq!(loan.status, LoanStatus::Active);
    }

    #[test]
    fn test_description_skipped_when_absent() {
        let json = serde_json::to_string(&DeductionItem::new(Decimal::new(50, 0))).unwrap();
        assert!(!json.contains("description"));
    }
}
