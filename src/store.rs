//! Store
//!
//! The service callers drive: it owns the inventory, the customer registry and the
//! order book, and every operation goes through it. Mutating operations take
//! `&mut self`, so a store has a single writer at any time.

use rust_decimal::Decimal;
use rusty_money::iso::{self, Currency};
use tracing::{debug, info, warn};

use crate::{
    customers::{Customer, CustomerKey},
    errors::CatalogError,
    inventory::Inventory,
    orders::{Order, OrderBook, OrderLine, OrderSummary},
    prices::Price,
    pricing::{line_total, sum_totals},
    products::{Product, ProductKey},
    registry::CustomerRegistry,
};

/// In-memory shop: products, customers and the orders placed between them.
#[derive(Debug)]
pub struct Store {
    inventory: Inventory,
    customers: CustomerRegistry,
    orders: OrderBook,
}

impl Store {
    /// Creates an empty store pricing products in `currency`.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            inventory: Inventory::new(currency),
            customers: CustomerRegistry::new(),
            orders: OrderBook::new(),
        }
    }

    /// Adds a product to the inventory.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateKey`]: a product with this name already exists.
    /// - [`CatalogError::InvalidFormat`]: the name is not alphanumeric.
    /// - [`CatalogError::OutOfRange`]: the price is not positive or the quantity is
    ///   negative.
    pub fn add_product(
        &mut self,
        name: &str,
        price: Decimal,
        quantity: i64,
    ) -> Result<ProductKey, CatalogError> {
        self.inventory
            .add_product(name, price, quantity)
            .inspect(|_| info!(product = name, %price, quantity, "product added"))
            .inspect_err(|error| warn!(product = name, %error, "product rejected"))
    }

    /// Iterate over all products in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.inventory.products()
    }

    /// Exact-match product lookup.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.inventory.product(name)
    }

    /// Registers a customer.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateKey`]: the email is already registered.
    /// - [`CatalogError::InvalidFormat`]: the email is malformed.
    pub fn add_customer(&mut self, name: &str, email: &str) -> Result<CustomerKey, CatalogError> {
        self.customers
            .add_customer(name, email)
            .inspect(|_| info!(customer = email, "customer added"))
            .inspect_err(|error| warn!(customer = email, %error, "customer rejected"))
    }

    /// Exact-match customer lookup.
    pub fn customer(&self, email: &str) -> Option<&Customer> {
        self.customers.customer(email)
    }

    /// Places an order and appends it to the order log.
    ///
    /// The quantity is not validated and stock is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the customer or the product does not
    /// exist. Nothing is appended in that case.
    pub fn place_order(
        &mut self,
        email: &str,
        product_name: &str,
        quantity: i64,
    ) -> Result<OrderLine<'_>, CatalogError> {
        let (customer_key, customer) = self
            .customers
            .require(email)
            .inspect_err(|error| warn!(%error, "order rejected"))?;

        let (product_key, product) = self
            .inventory
            .require(product_name)
            .inspect_err(|error| warn!(%error, "order rejected"))?;

        let position = self
            .orders
            .append(Order::new(customer_key, product_key, quantity));

        info!(
            customer = email,
            product = product_name,
            quantity,
            position,
            "order placed"
        );

        Ok(OrderLine::new(customer, product, quantity))
    }

    /// Sums `price * quantity` over every order `email` placed for `product_name`.
    ///
    /// Zero if the customer never ordered the product.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`]: the customer or the product does not exist.
    /// - [`CatalogError::Pricing`]: the total cannot be represented.
    pub fn total_for_customer_and_product(
        &self,
        email: &str,
        product_name: &str,
    ) -> Result<Price, CatalogError> {
        let (customer_key, _) = self
            .customers
            .require(email)
            .inspect_err(|error| warn!(%error, "order total rejected"))?;

        let (product_key, product) = self
            .inventory
            .require(product_name)
            .inspect_err(|error| warn!(%error, "order total rejected"))?;

        let total = sum_totals(
            self.currency(),
            self.orders
                .for_customer_and_product(customer_key, product_key)
                .map(|order| line_total(product.price(), order.quantity())),
        )?;

        debug!(customer = email, product = product_name, %total, "order total");

        Ok(total)
    }

    /// Every order `email` placed, as product name and quantity, in placement order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the customer does not exist.
    pub fn orders_for_customer(
        &self,
        email: &str,
    ) -> Result<impl Iterator<Item = OrderSummary<'_>>, CatalogError> {
        let (customer_key, _) = self
            .customers
            .require(email)
            .inspect_err(|error| warn!(%error, "order history rejected"))?;

        debug!(customer = email, "order history");

        Ok(self
            .orders
            .for_customer(customer_key)
            .filter_map(move |order| {
                self.inventory
                    .get(order.product())
                    .map(|product| OrderSummary {
                        product: product.name(),
                        quantity: order.quantity(),
                    })
            }))
    }

    /// The product inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The customer registry.
    pub fn customers(&self) -> &CustomerRegistry {
        &self.customers
    }

    /// The order log.
    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    /// Currency products and totals are priced in.
    pub fn currency(&self) -> &'static Currency {
        self.inventory.currency()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(iso::USD)
    }
}
