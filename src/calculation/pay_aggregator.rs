//! Gross pay aggregation.
//!
//! This module prices each hour bucket at the hourly rate times its
//! multiplier and adds the flat allowance and bonus to produce gross pay.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PayMultipliers;
use crate::models::{AuditStep, PayComponent, PayLine, PayrollCalculationInput};

/// Gross pay broken down by component.
///
/// `gross_pay` is exactly the sum of the six component amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrossPay {
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
    /// Sum of the components.
    pub gross_pay: Decimal,
    /// One line per non-zero component.
    pub pay_lines: Vec<PayLine>,
}

impl GrossPay {
    /// Builds the audit step describing this aggregation.
    pub fn audit_step(&self, hourly_rate: Decimal, step_number: u32) -> AuditStep {
        let lines: Vec<String> = self
            .pay_lines
            .iter()
            .map(|line| match line.component {
                PayComponent::Allowance | PayComponent::Bonus => {
                    format!("{:?} ${}", line.component, line.amount)
                }
                _ => format!(
                    "{:?} {}h x ${} x {} = ${}",
                    line.component,
                    line.hours.normalize(),
                    hourly_rate.normalize(),
                    line.multiplier.normalize(),
                    line.amount
                ),
            })
            .collect();

        AuditStep {
            step_number,
            rule_id: "gross_pay_aggregation".to_string(),
            rule_name: "Gross Pay Aggregation".to_string(),
            input: serde_json::json!({
                "hourly_rate": hourly_rate.normalize().to_string(),
                "pay_lines": self.pay_lines.len()
            }),
            output: serde_json::json!({
                "regular_pay": self.regular_pay.to_string(),
                "overtime_pay": self.overtime_pay.to_string(),
                "night_differential_pay": self.night_differential_pay.to_string(),
                "holiday_pay": self.holiday_pay.to_string(),
                "allowance_amount": self.allowance_amount.to_string(),
                "bonus_amount": self.bonus_amount.to_string(),
                "gross_pay": self.gross_pay.to_string()
            }),
            reasoning: if lines.is_empty() {
                "No hours or flat amounts to pay; gross is $0".to_string()
            } else {
                format!("{}; gross = ${}", lines.join(", "), self.gross_pay)
            },
        }
    }
}

/// Rounds a money amount to `scale` decimal places, midpoint away from zero.
pub fn round_currency(amount: Decimal, scale: u32) -> Decimal {
    amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}

/// Prices the hour buckets of `input` and sums gross pay.
///
/// | Bucket | Multiplier |
/// |---|---|
/// | regular | 1.0 |
/// | overtime | `multipliers.overtime` |
/// | night differential | `multipliers.night_differential` |
/// | holiday | `multipliers.holiday` |
///
/// Each priced component is rounded to `currency_scale` before summation.
/// Allowance and bonus pass through unchanged.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::aggregate_pay;
/// use payroll_engine::config::PayMultipliers;
/// use payroll_engine::models::PayrollCalculationInput;
/// use rust_decimal::Decimal;
///
/// let mut input = PayrollCalculationInput::new(Decimal::new(8, 0), Decimal::new(100, 0));
/// input.overtime_hours = Decimal::new(2, 0);
///
/// let gross = aggregate_pay(&input, &PayMultipliers::default(), 2);
/// assert_eq!(gross.overtime_pay, Decimal::new(250, 0));
/// assert_eq!(gross.gross_pay, Decimal::new(1050, 0));
/// ```
pub fn aggregate_pay(
    input: &PayrollCalculationInput,
    multipliers: &PayMultipliers,
    currency_scale: u32,
) -> GrossPay {
    let rate = input.hourly_rate;
    let mut pay_lines = Vec::new();

    let mut price = |component: PayComponent, hours: Decimal, multiplier: Decimal| {
        let amount = round_currency(hours * rate * multiplier, currency_scale);
        if hours != Decimal::ZERO {
            pay_lines.push(PayLine {
                component,
                hours,
                rate: rate * multiplier,
                multiplier,
                amount,
            });
        }
        amount
    };

    let regular_pay = price(PayComponent::Regular, input.regular_hours, Decimal::ONE);
    let overtime_pay = price(
        PayComponent::Overtime,
        input.overtime_hours,
        multipliers.overtime,
    );
    let night_differential_pay = price(
        PayComponent::NightDifferential,
        input.night_differential_hours,
        multipliers.night_differential,
    );
    let holiday_pay = price(
        PayComponent::Holiday,
        input.holiday_hours,
        multipliers.holiday,
    );

    for (component, amount) in [
        (PayComponent::Allowance, input.allowance_amount),
        (PayComponent::Bonus, input.bonus_amount),
    ] {
        if amount != Decimal::ZERO {
            pay_lines.push(PayLine {
                component,
                hours: Decimal::ZERO,
                rate: Decimal::ZERO,
                multiplier: Decimal::ONE,
                amount,
            });
        }
    }

    let gross_pay = regular_pay
        + overtime_pay
        + night_differential_pay
        + holiday_pay
        + input.allowance_amount
        + input.bonus_amount;

    GrossPay {
        regular_pay,
        overtime_pay,
        night_differential_pay,
        holiday_pay,
        allowance_amount: input.allowance_amount,
        bonus_amount: input.bonus_amount,
        gross_pay,
        pay_lines,
    }
}
