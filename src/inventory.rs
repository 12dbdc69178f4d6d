//! Inventory

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;

use crate::{
    errors::{CatalogError, Entity},
    products::{Product, ProductKey},
};

/// Products keyed by name.
///
/// Products are stored in a `SlotMap` and never removed, so iteration follows
/// insertion order.
#[derive(Debug)]
pub struct Inventory {
    products: SlotMap<ProductKey, Product>,
    keys: FxHashMap<String, ProductKey>,
    currency: &'static Currency,
}

impl Inventory {
    /// Creates an empty inventory pricing products in `currency`.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            products: SlotMap::with_key(),
            keys: FxHashMap::default(),
            currency,
        }
    }

    /// Validates and inserts a product.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateKey`]: a product with this name already exists.
    /// - any validation error from [`Product::new`].
    pub fn add_product(
        &mut self,
        name: &str,
        price: Decimal,
        quantity: i64,
    ) -> Result<ProductKey, CatalogError> {
        if self.keys.contains_key(name) {
            return Err(CatalogError::DuplicateKey(Entity::Product, name.to_string()));
        }

        let product = Product::new(name, price, quantity, self.currency)?;
        let key = self.products.insert(product);

        self.keys.insert(name.to_string(), key);

        Ok(key)
    }

    /// Exact-match lookup by name.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.lookup(name).map(|(_, product)| product)
    }

    /// Exact-match lookup by name, returning the key alongside the product.
    pub fn lookup(&self, name: &str) -> Option<(ProductKey, &Product)> {
        let key = *self.keys.get(name)?;

        self.products.get(key).map(|product| (key, product))
    }

    /// Like [`Inventory::lookup`], but a miss is an error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has this name.
    pub fn require(&self, name: &str) -> Result<(ProductKey, &Product), CatalogError> {
        self.lookup(name)
            .ok_or_else(|| CatalogError::product_not_found(name))
    }

    /// Get a product by key.
    pub fn get(&self, key: ProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    /// Iterate over all products in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the inventory has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency all products are priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{GBP, USD},
    };
    use testresult::TestResult;

    use crate::errors::Field;

    use super::*;

    #[test]
    fn add_product_then_lookup() -> TestResult {
        let mut inventory = Inventory::new(USD);

        let key = inventory.add_product("Widget", Decimal::new(999, 2), 100)?;
        let product = inventory.product("Widget").ok_or("expected product")?;

        assert_eq!(product.price(), &Money::from_minor(999, USD));
        assert_eq!(inventory.get(key), Some(product));
        assert_eq!(inventory.len(), 1);

        Ok(())
    }

    #[test]
    fn duplicate_name_is_rejected_and_first_kept() -> TestResult {
        let mut inventory = Inventory::new(USD);

        inventory.add_product("Widget", Decimal::new(999, 2), 100)?;
        let result = inventory.add_product("Widget", Decimal::new(1, 0), 5);

        assert_eq!(
            result,
            Err(CatalogError::DuplicateKey(
                Entity::Product,
                "Widget".to_string()
            ))
        );

        let product = inventory.product("Widget").ok_or("expected product")?;

        assert_eq!(product.price(), &Money::from_minor(999, USD));
        assert_eq!(product.quantity(), 100);
        assert_eq!(inventory.len(), 1);

        Ok(())
    }

    #[test]
    fn invalid_product_is_not_stored() {
        let mut inventory = Inventory::new(USD);

        let result = inventory.add_product("Widget", Decimal::ZERO, 1);

        assert!(matches!(
            result,
            Err(CatalogError::OutOfRange(Field::Price, _))
        ));
        assert!(inventory.is_empty());
        assert!(inventory.product("Widget").is_none());
    }

    #[test]
    fn lookup_is_exact() -> TestResult {
        let mut inventory = Inventory::new(USD);

        inventory.add_product("Widget", Decimal::new(1, 0), 1)?;

        assert!(inventory.product("widget").is_none());
        assert!(inventory.product("Widg").is_none());
        assert!(inventory.product("Widget ").is_none());

        Ok(())
    }

    #[test]
    fn require_reports_missing_product() {
        let inventory = Inventory::new(USD);

        assert_eq!(
            inventory.require("Widget").map(|(key, _)| key),
            Err(CatalogError::NotFound(Entity::Product, "Widget".to_string()))
        );
    }

    #[test]
    fn products_iterate_in_insertion_order() -> TestResult {
        let mut inventory = Inventory::new(GBP);

        for name in ["Zeta", "Alpha", "Mid"] {
            inventory.add_product(name, Decimal::new(1, 0), 1)?;
        }

        let names: Vec<&str> = inventory.products().map(Product::name).collect();

        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
        assert_eq!(inventory.currency(), GBP);

        Ok(())
    }
}
