//! Products

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use slotmap::new_key_type;

use crate::{
    errors::{CatalogError, Field},
    prices::{Price, price_from_decimal},
};

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// A product in the inventory.
///
/// Products are validated on construction and never change afterwards; orders refer
/// back to them for their unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: Price,
    quantity: u64,
}

impl Product {
    /// Creates a validated product.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidFormat`]: `name` is empty or not ASCII alphanumeric.
    /// - [`CatalogError::OutOfRange`]: `price` is not positive, or `quantity` is
    ///   negative.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        quantity: i64,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let name = name.into();

        if !is_valid_name(&name) {
            return Err(CatalogError::InvalidFormat(Field::ProductName, name));
        }

        if price <= Decimal::ZERO {
            return Err(CatalogError::OutOfRange(Field::Price, price.to_string()));
        }

        let quantity = u64::try_from(quantity)
            .map_err(|_err| CatalogError::OutOfRange(Field::Quantity, quantity.to_string()))?;

        Ok(Self {
            name,
            price: price_from_decimal(price, currency),
            quantity,
        })
    }

    /// Product name, unique within an inventory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> &Price {
        &self.price
    }

    /// Stock quantity recorded when the product was added.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

/// Product names are one or more ASCII letters or digits.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|byte| byte.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_product_keeps_fields() -> TestResult {
        let product = Product::new("Widget", Decimal::new(999, 2), 100, USD)?;

        assert_eq!(product.name(), "Widget");
        assert_eq!(product.price(), &Money::from_minor(999, USD));
        assert_eq!(product.quantity(), 100);

        Ok(())
    }

    #[test]
    fn zero_stock_is_allowed() -> TestResult {
        let product = Product::new("Gadget2", Decimal::new(1, 0), 0, USD)?;

        assert_eq!(product.quantity(), 0);

        Ok(())
    }

    #[test]
    fn name_must_be_alphanumeric() {
        for name in ["", "Big Widget", "widget!", "wid-get", "caf\u{e9}"] {
            let result = Product::new(name, Decimal::new(1, 0), 1, USD);

            assert_eq!(
                result,
                Err(CatalogError::InvalidFormat(
                    Field::ProductName,
                    name.to_string()
                )),
                "name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn price_must_be_positive() {
        for price in [Decimal::ZERO, Decimal::new(-5, 0), Decimal::new(-1, 3)] {
            let result = Product::new("Widget", price, 1, USD);

            assert_eq!(
                result,
                Err(CatalogError::OutOfRange(Field::Price, price.to_string())),
                "price {price} should be rejected"
            );
        }
    }

    #[test]
    fn sub_cent_price_is_kept_exactly() -> TestResult {
        let product = Product::new("Tiny", Decimal::new(1, 3), 1, USD)?;

        assert_eq!(product.price().amount(), &Decimal::new(1, 3));

        Ok(())
    }

    #[test]
    fn quantity_must_not_be_negative() {
        let result = Product::new("Widget", Decimal::new(1, 0), -1, USD);

        assert_eq!(
            result,
            Err(CatalogError::OutOfRange(Field::Quantity, "-1".to_string()))
        );
    }

    #[test]
    fn name_is_checked_before_price() {
        let result = Product::new("bad name", Decimal::ZERO, -1, USD);

        assert!(matches!(
            result,
            Err(CatalogError::InvalidFormat(Field::ProductName, _))
        ));
    }
}
