//! Storefront
//!
//! An in-memory shop: an inventory of products, a registry of customers and an
//! append-only log of the orders placed between them, driven from an interactive
//! console.

pub mod cli;
pub mod config;
pub mod customers;
pub mod errors;
pub mod inventory;
pub mod observability;
pub mod orders;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod registry;
pub mod store;
