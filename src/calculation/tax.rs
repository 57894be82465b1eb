//! Tax withholding policies.

use rust_decimal::Decimal;

/// A withholding strategy applied to gross pay.
///
/// Any `Fn(Decimal) -> Decimal` closure is also a policy, which keeps ad-hoc
/// schedules out of the engine's types.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{FlatRateTax, TaxPolicy};
/// use rust_decimal::Decimal;
///
/// let flat = FlatRateTax::new(Decimal::new(15, 2));
/// assert_eq!(flat.withhold(Decimal::new(800, 0)), Decimal::new(120, 0));
///
/// let exempt = |_gross: Decimal| Decimal::ZERO;
/// assert_eq!(exempt.withhold(Decimal::new(800, 0)), Decimal::ZERO);
/// ```
pub trait TaxPolicy: Send + Sync {
    /// Returns the unrounded tax withheld from `gross_pay`.
    fn withhold(&self, gross_pay: Decimal) -> Decimal;

    /// A short description for the audit trace.
    fn name(&self) -> String {
        "custom".to_string()
    }
}

/// Withholds a single flat percentage of gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatRateTax {
    rate: Decimal,
}

impl FlatRateTax {
    /// Creates a flat-rate policy; `rate` is a fraction (0.15 = 15%).
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    /// The withholding rate.
    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl TaxPolicy for FlatRateTax {
    fn withhold(&self, gross_pay: Decimal) -> Decimal {
        gross_pay * self.rate
    }

    fn name(&self) -> String {
        format!("flat_rate({})", self.rate.normalize())
    }
}

impl<F> TaxPolicy for F
where
    F: Fn(Decimal) -> Decimal + Send + Sync,
{
    fn withhold(&self, gross_pay: Decimal) -> Decimal {
        self(gross_pay)
    }
}
