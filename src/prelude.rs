//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cli::{Command, CommandError, Flow, Session},
    customers::{Customer, CustomerKey},
    errors::{CatalogError, Entity, ErrorKind, Field},
    inventory::Inventory,
    orders::{Order, OrderBook, OrderLine, OrderSummary},
    prices::{Price, PriceParseError, parse_price},
    pricing::{PricingError, line_total, sum_totals},
    products::{Product, ProductKey},
    registry::CustomerRegistry,
    store::Store,
};
