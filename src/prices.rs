//! Prices

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// A monetary amount in one of the ISO currencies.
pub type Price = Money<'static, Currency>;

/// Optional symbol accepted in front of a price literal.
const PRICE_PREFIX: char = '$';

/// Errors raised while parsing a price literal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriceParseError {
    /// Nothing left to parse once the prefix was removed.
    #[error("no price given")]
    Empty,

    /// The remainder is not a decimal number.
    #[error("invalid price: {0:?}")]
    InvalidNumber(String),
}

/// Parse a price literal such as `"5.50"` or `"$5.50"` into a decimal amount.
///
/// Surrounding whitespace is ignored. No sign or range check happens here, that is
/// left to product validation.
///
/// # Errors
///
/// - [`PriceParseError::Empty`]: the input is blank, or only the `$` prefix.
/// - [`PriceParseError::InvalidNumber`]: the remainder is not a decimal number.
pub fn parse_price(input: &str) -> Result<Decimal, PriceParseError> {
    let trimmed = input.trim();
    let amount = trimmed
        .strip_prefix(PRICE_PREFIX)
        .unwrap_or(trimmed)
        .trim_start();

    if amount.is_empty() {
        return Err(PriceParseError::Empty);
    }

    amount
        .parse::<Decimal>()
        .map_err(|_err| PriceParseError::InvalidNumber(input.to_string()))
}

/// Build a [`Price`] holding `amount` exactly, without rounding to minor units.
pub fn price_from_decimal(amount: Decimal, currency: &'static Currency) -> Price {
    Money::from_decimal(amount, currency)
}
