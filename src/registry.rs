//! Customer Registry

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::{
    customers::{Customer, CustomerKey},
    errors::{CatalogError, Entity},
};

/// Customers keyed by email.
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    customers: SlotMap<CustomerKey, Customer>,
    keys: FxHashMap<String, CustomerKey>,
}

impl CustomerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and registers a customer.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateKey`]: the email is already registered.
    /// - [`CatalogError::InvalidFormat`]: the email is malformed.
    pub fn add_customer(&mut self, name: &str, email: &str) -> Result<CustomerKey, CatalogError> {
        if self.keys.contains_key(email) {
            return Err(CatalogError::DuplicateKey(
                Entity::Customer,
                email.to_string(),
            ));
        }

        let customer = Customer::new(name, email)?;
        let key = self.customers.insert(customer);

        self.keys.insert(email.to_string(), key);

        Ok(key)
    }

    /// Exact-match lookup by email.
    pub fn customer(&self, email: &str) -> Option<&Customer> {
        self.lookup(email).map(|(_, customer)| customer)
    }

    /// Exact-match lookup by email, returning the key alongside the customer.
    pub fn lookup(&self, email: &str) -> Option<(CustomerKey, &Customer)> {
        let key = *self.keys.get(email)?;

        self.customers.get(key).map(|customer| (key, customer))
    }

    /// Like [`CustomerRegistry::lookup`], but a miss is an error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the email is not registered.
    pub fn require(&self, email: &str) -> Result<(CustomerKey, &Customer), CatalogError> {
        self.lookup(email)
            .ok_or_else(|| CatalogError::customer_not_found(email))
    }

    /// Get a customer by key.
    pub fn get(&self, key: CustomerKey) -> Option<&Customer> {
        self.customers.get(key)
    }

    /// Iterate over all customers in registration order.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    /// Number of registered customers.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether no customers are registered.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
