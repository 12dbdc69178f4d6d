//! Pricing

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::prices::Price;

/// Errors that can occur while calculating order totals.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Unit price multiplied by quantity does not fit in a decimal amount.
    #[error("line total overflowed")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates `price * quantity` for a single order line.
///
/// Quantities are not range checked, so zero and negative quantities give zero and
/// negative totals.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the total cannot be represented.
pub fn line_total(price: &Price, quantity: i64) -> Result<Price, PricingError> {
    price
        .amount()
        .checked_mul(Decimal::from(quantity))
        .map(|amount| Money::from_decimal(amount, price.currency()))
        .ok_or(PricingError::Overflow)
}

/// Sums line totals, starting from zero in `currency`.
///
/// # Errors
///
/// - [`PricingError::Overflow`]: a line total could not be calculated.
/// - [`PricingError::Money`]: wrapped money arithmetic or currency mismatch error.
pub fn sum_totals<I>(currency: &'static Currency, totals: I) -> Result<Price, PricingError>
where
    I: IntoIterator<Item = Result<Price, PricingError>>,
{
    totals
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, total| {
            Ok(acc.add(total?)?)
        })
}
