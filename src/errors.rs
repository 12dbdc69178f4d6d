//! Catalog errors

use std::fmt;

use thiserror::Error;

use crate::{prices::PriceParseError, pricing::PricingError};

/// The kinds of record the store keeps registries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// A product, keyed by name.
    Product,

    /// A customer, keyed by email.
    Customer,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Product => f.write_str("product"),
            Entity::Customer => f.write_str("customer"),
        }
    }
}

/// Validated input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Product name, must be ASCII alphanumeric.
    ProductName,

    /// Customer email.
    Email,

    /// Product unit price.
    Price,

    /// Product stock quantity.
    Quantity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::ProductName => f.write_str("product name"),
            Field::Email => f.write_str("email"),
            Field::Price => f.write_str("price"),
            Field::Quantity => f.write_str("quantity"),
        }
    }
}

/// Coarse error taxonomy, for callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed email, product name or price.
    InvalidFormat,

    /// Non-positive price, negative stock quantity or an unrepresentable total.
    OutOfRange,

    /// Product name or customer email already registered.
    DuplicateKey,

    /// Customer or product lookup miss.
    NotFound,

    /// Malformed numeric literal.
    ParseError,
}

/// Errors returned by store operations.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A field does not have the required shape (field, rejected value).
    #[error("invalid {0}: {1:?}")]
    InvalidFormat(Field, String),

    /// A field is outside its allowed range (field, rejected value).
    #[error("{0} out of range: {1}")]
    OutOfRange(Field, String),

    /// A record with the same key already exists (entity, key).
    #[error("{0} already exists: {1}")]
    DuplicateKey(Entity, String),

    /// No record with the given key exists (entity, key).
    #[error("{0} not found: {1}")]
    NotFound(Entity, String),

    /// A price literal could not be parsed.
    #[error(transparent)]
    Parse(#[from] PriceParseError),

    /// An order total could not be calculated.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl CatalogError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InvalidFormat(..) => ErrorKind::InvalidFormat,
            CatalogError::OutOfRange(..) | CatalogError::Pricing(_) => ErrorKind::OutOfRange,
            CatalogError::DuplicateKey(..) => ErrorKind::DuplicateKey,
            CatalogError::NotFound(..) => ErrorKind::NotFound,
            CatalogError::Parse(_) => ErrorKind::ParseError,
        }
    }

    /// Shorthand for a missing customer.
    pub(crate) fn customer_not_found(email: &str) -> Self {
        CatalogError::NotFound(Entity::Customer, email.to_string())
    }

    /// Shorthand for a missing product.
    pub(crate) fn product_not_found(name: &str) -> Self {
        CatalogError::NotFound(Entity::Product, name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        let cases = [
            (
                CatalogError::InvalidFormat(Field::Email, "nope".to_string()),
                ErrorKind::InvalidFormat,
            ),
            (
                CatalogError::OutOfRange(Field::Price, "0".to_string()),
                ErrorKind::OutOfRange,
            ),
            (
                CatalogError::DuplicateKey(Entity::Product, "Widget".to_string()),
                ErrorKind::DuplicateKey,
            ),
            (
                CatalogError::customer_not_found("a@b.io"),
                ErrorKind::NotFound,
            ),
            (
                CatalogError::Parse(PriceParseError::Empty),
                ErrorKind::ParseError,
            ),
            (
                CatalogError::Pricing(PricingError::Overflow),
                ErrorKind::OutOfRange,
            ),
        ];

        for (error, kind) in cases {
            assert_eq!(error.kind(), kind, "unexpected kind for {error:?}");
        }
    }

    #[test]
    fn messages_name_the_entity_and_key() {
        assert_eq!(
            CatalogError::product_not_found("Widget").to_string(),
            "product not found: Widget"
        );
        assert_eq!(
            CatalogError::DuplicateKey(Entity::Customer, "a@b.io".to_string()).to_string(),
            "customer already exists: a@b.io"
        );
        assert_eq!(
            CatalogError::InvalidFormat(Field::ProductName, "Big Widget".to_string()).to_string(),
            "invalid product name: \"Big Widget\""
        );
    }
}
