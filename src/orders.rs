//! Orders

use crate::{
    customers::{Customer, CustomerKey},
    prices::Price,
    pricing::{PricingError, line_total},
    products::{Product, ProductKey},
};

/// A placed order.
///
/// Orders refer to their customer and product by key rather than holding copies,
/// so totals are always worked out from the product's own price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    customer: CustomerKey,
    product: ProductKey,
    quantity: i64,
}

impl Order {
    /// Creates an order. The quantity is taken as given.
    pub fn new(customer: CustomerKey, product: ProductKey, quantity: i64) -> Self {
        Self {
            customer,
            product,
            quantity,
        }
    }

    /// Key of the ordering customer.
    pub fn customer(&self) -> CustomerKey {
        self.customer
    }

    /// Key of the ordered product.
    pub fn product(&self) -> ProductKey {
        self.product
    }

    /// Ordered quantity.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// Append-only log of placed orders.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Creates an empty order book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an order, returning its position in the log.
    pub(crate) fn append(&mut self, order: Order) -> usize {
        self.orders.push(order);

        self.orders.len() - 1
    }

    /// Get an order by its position in the log.
    pub fn get(&self, index: usize) -> Option<&Order> {
        self.orders.get(index)
    }

    /// Iterate over all orders in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Orders placed by `customer`, in placement order.
    pub fn for_customer(&self, customer: CustomerKey) -> impl Iterator<Item = &Order> {
        self.orders
            .iter()
            .filter(move |order| order.customer == customer)
    }

    /// Orders placed by `customer` for `product`, in placement order.
    pub fn for_customer_and_product(
        &self,
        customer: CustomerKey,
        product: ProductKey,
    ) -> impl Iterator<Item = &Order> {
        self.for_customer(customer)
            .filter(move |order| order.product == product)
    }

    /// Number of orders placed.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no orders have been placed.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// An order resolved against the customer and product it refers to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderLine<'a> {
    customer: &'a Customer,
    product: &'a Product,
    quantity: i64,
}

impl<'a> OrderLine<'a> {
    /// Creates an order line.
    pub fn new(customer: &'a Customer, product: &'a Product, quantity: i64) -> Self {
        Self {
            customer,
            product,
            quantity,
        }
    }

    /// The ordering customer.
    pub fn customer(&self) -> &'a Customer {
        self.customer
    }

    /// The ordered product.
    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// Ordered quantity.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price times quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the total cannot be represented.
    pub fn total_price(&self) -> Result<Price, PricingError> {
        line_total(self.product.price(), self.quantity)
    }
}

/// A customer's order, projected to product name and quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary<'a> {
    /// Name of the ordered product.
    pub product: &'a str,

    /// Ordered quantity.
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso::USD};
    use slotmap::SlotMap;
    use testresult::TestResult;

    use super::*;

    fn keys() -> (CustomerKey, CustomerKey, ProductKey, ProductKey) {
        let mut customers = SlotMap::<CustomerKey, ()>::with_key();
        let mut products = SlotMap::<ProductKey, ()>::with_key();

        (
            customers.insert(()),
            customers.insert(()),
            products.insert(()),
            products.insert(()),
        )
    }

    #[test]
    fn append_returns_log_position() {
        let (alice, _, widget, _) = keys();
        let mut book = OrderBook::new();

        assert_eq!(book.append(Order::new(alice, widget, 1)), 0);
        assert_eq!(book.append(Order::new(alice, widget, 2)), 1);
        assert_eq!(book.len(), 2);
        assert_eq!(book.get(1).map(Order::quantity), Some(2));
    }

    #[test]
    fn for_customer_filters_and_keeps_order() {
        let (alice, bob, widget, gadget) = keys();
        let mut book = OrderBook::new();

        book.append(Order::new(alice, widget, 1));
        book.append(Order::new(bob, widget, 2));
        book.append(Order::new(alice, gadget, 3));
        book.append(Order::new(alice, widget, 4));

        let quantities: Vec<i64> = book.for_customer(alice).map(Order::quantity).collect();

        assert_eq!(quantities, [1, 3, 4]);

        let quantities: Vec<i64> = book
            .for_customer_and_product(alice, widget)
            .map(Order::quantity)
            .collect();

        assert_eq!(quantities, [1, 4]);
    }

    #[test]
    fn empty_book_has_no_orders() {
        let (alice, ..) = keys();
        let book = OrderBook::new();

        assert!(book.is_empty());
        assert_eq!(book.for_customer(alice).count(), 0);
    }

    #[test]
    fn order_line_total_uses_product_price() -> TestResult {
        let customer = Customer::new("Alice", "alice@example.com")?;
        let product = Product::new("Widget", Decimal::new(999, 2), 100, USD)?;

        let line = OrderLine::new(&customer, &product, 3);

        assert_eq!(line.total_price()?, Money::from_minor(2997, USD));
        assert_eq!(line.customer().email(), "alice@example.com");
        assert_eq!(line.product().name(), "Widget");

        Ok(())
    }
}
