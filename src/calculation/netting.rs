//! Deduction, contribution, tax and loan netting.
//!
//! Netting happens in two stages. [`net_pay`] subtracts deductions,
//! contributions and tax from gross pay, producing a [`BaseNetting`].
//! [`BaseNetting::apply_loans`] consumes that value and subtracts the active
//! loan installments, producing the final [`NettedPay`]. Since the base value
//! is moved, loans are netted exactly once.

use rust_decimal::Decimal;

use crate::calculation::TaxPolicy;
use crate::calculation::pay_aggregator::round_currency;
use crate::models::{AuditStep, ContributionItem, DeductionItem, LoanObligation};

/// Net pay before loan installments are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseNetting {
    gross_pay: Decimal,
    total_deductions: Decimal,
    total_contributions: Decimal,
    tax_withheld: Decimal,
    net_pay: Decimal,
    tax_policy: String,
}

impl BaseNetting {
    /// Gross pay the netting started from.
    pub fn gross_pay(&self) -> Decimal {
        self.gross_pay
    }

    /// Sum of deduction amounts, excluding loans.
    pub fn total_deductions(&self) -> Decimal {
        self.total_deductions
    }

    /// Sum of employee contribution shares.
    pub fn total_contributions(&self) -> Decimal {
        self.total_contributions
    }

    /// Tax withheld, rounded to currency precision.
    pub fn tax_withheld(&self) -> Decimal {
        self.tax_withheld
    }

    /// Net pay before loan installments.
    pub fn net_pay(&self) -> Decimal {
        self.net_pay
    }

    /// Applies the active loan installments and finishes netting.
    ///
    /// Loans with any status other than `active` are ignored. The summed
    /// installments are added into `total_deductions` and subtracted from
    /// net pay. Negative net pay is kept as-is.
    pub fn apply_loans(self, loans: &[LoanObligation]) -> NettedPay {
        let loan_payments: Decimal = loans
            .iter()
            .filter(|loan| loan.is_active())
            .map(|loan| loan.monthly_payment)
            .sum();

        NettedPay {
            gross_pay: self.gross_pay,
            total_deductions: self.total_deductions + loan_payments,
            total_contributions: self.total_contributions,
            tax_withheld: self.tax_withheld,
            loan_payments,
            net_pay: self.net_pay - loan_payments,
            tax_policy: self.tax_policy,
        }
    }
}

/// Fully netted pay for one calculation.
///
/// `net_pay = gross_pay - total_deductions - total_contributions - tax_withheld`,
/// where `total_deductions` includes `loan_payments`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NettedPay {
    /// Gross pay.
    pub gross_pay: Decimal,
    /// Deductions including loan installments.
    pub total_deductions: Decimal,
    /// Employee contribution shares.
    pub total_contributions: Decimal,
    /// Tax withheld.
    pub tax_withheld: Decimal,
    /// Active loan installments (already in `total_deductions`).
    pub loan_payments: Decimal,
    /// Take-home pay; may be negative.
    pub net_pay: Decimal,
    /// Name of the tax policy that was applied.
    pub tax_policy: String,
}

impl NettedPay {
    /// Builds the audit step describing this netting.
    pub fn audit_step(&self, step_number: u32) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: "net_pay".to_string(),
            rule_name: "Deduction, Contribution, Tax and Loan Netting".to_string(),
            input: serde_json::json!({
                "gross_pay": self.gross_pay.to_string(),
                "tax_policy": self.tax_policy
            }),
            output: serde_json::json!({
                "total_deductions": self.total_deductions.to_string(),
                "total_contributions": self.total_contributions.to_string(),
                "tax_withheld": self.tax_withheld.to_string(),
                "loan_payments": self.loan_payments.to_string(),
                "net_pay": self.net_pay.to_string()
            }),
            reasoning: format!(
                "${} gross - ${} deductions (incl. ${} loans) - ${} contributions - ${} tax ({}) = ${} net",
                self.gross_pay,
                self.total_deductions,
                self.loan_payments,
                self.total_contributions,
                self.tax_withheld,
                self.tax_policy,
                self.net_pay
            ),
        }
    }
}

/// Subtracts deductions, contributions and tax from gross pay.
///
/// Every item passed in is summed; filtering out inactive items is the
/// caller's concern. Tax is computed on gross pay by `tax_policy` and rounded
/// to `currency_scale`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{FlatRateTax, net_pay};
/// use payroll_engine::models::{ContributionItem, DeductionItem, LoanObligation};
/// use rust_decimal::Decimal;
///
/// let base = net_pay(
///     Decimal::new(800, 0),
///     &[DeductionItem::new(Decimal::new(500, 0))],
///     &[ContributionItem::new(Decimal::new(300, 0))],
///     &FlatRateTax::new(Decimal::new(15, 2)),
///     2,
/// );
/// let netted = base.apply_loans(&[LoanObligation::active(Decimal::new(200, 0))]);
///
/// assert_eq!(netted.total_deductions, Decimal::new(700, 0));
/// assert_eq!(netted.net_pay, Decimal::new(-320, 0));
/// ```
pub fn net_pay(
    gross_pay: Decimal,
    deductions: &[DeductionItem],
    contributions: &[ContributionItem],
    tax_policy: &dyn TaxPolicy,
    currency_scale: u32,
) -> BaseNetting {
    let total_deductions: Decimal = deductions.iter().map(|d| d.amount).sum();
    let total_contributions: Decimal = contributions.iter().map(|c| c.employee_share).sum();
    let tax_withheld = round_currency(tax_policy.withhold(gross_pay), currency_scale);

    BaseNetting {
        gross_pay,
        total_deductions,
        total_contributions,
        tax_withheld,
        net_pay: gross_pay - total_deductions - total_contributions - tax_withheld,
        tax_policy: tax_policy.name(),
    }
}
