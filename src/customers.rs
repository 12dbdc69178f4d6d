//! Customers

use std::sync::LazyLock;

use regex::Regex;
use slotmap::new_key_type;

use crate::errors::{CatalogError, Field};

new_key_type! {
    /// Customer Key
    pub struct CustomerKey;
}

#[expect(clippy::expect_used, reason = "the pattern is a literal")]
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    email: String,
}

impl Customer {
    /// Creates a customer with a validated email. The name is free text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidFormat`] if `email` is not `local@domain.tld`
    /// with a top-level domain of at least two letters.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, CatalogError> {
        let email = email.into();

        if !is_valid_email(&email) {
            return Err(CatalogError::InvalidFormat(Field::Email, email));
        }

        Ok(Self {
            name: name.into(),
            email,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email, unique within a registry.
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Whether `email` has the `local@domain.tld` shape customers are registered with.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}
