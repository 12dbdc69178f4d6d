//! Console rendering

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::products::Product;

/// Render products as a table of name, price and stock.
pub fn product_table<'a>(products: impl IntoIterator<Item = &'a Product>) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Product", "Price", "Quantity"]);

    for product in products {
        builder.push_record([
            product.name().to_string(),
            product.price().to_string(),
            product.quantity().to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..), Alignment::right());

    table.to_string()
}
