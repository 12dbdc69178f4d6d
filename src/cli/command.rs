//! Command line parsing

use std::mem;

use clap::{Parser, Subcommand};

use crate::cli::CommandError;

/// One line of console input.
#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct CommandLine {
    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Console commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a product to the inventory
    AddProduct {
        /// Product name, letters and digits only
        name: String,

        /// Unit price, optionally prefixed with `$`
        #[arg(allow_hyphen_values = true)]
        price: String,

        /// Units in stock
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Display available products
    ListProducts,

    /// Add a customer: the name, then the email last
    AddCustomer {
        /// Customer name followed by email
        #[arg(required = true, num_args = 2.., allow_hyphen_values = true)]
        fields: Vec<String>,
    },

    /// Place an order
    PlaceOrder {
        /// Customer email
        email: String,

        /// Product name
        product: String,

        /// Quantity to order
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Calculate the total price of a customer's orders for a product
    OrderTotal {
        /// Customer email
        email: String,

        /// Product name
        product: String,
    },

    /// Display a customer and their orders
    CustomerOrders {
        /// Customer email
        email: String,
    },

    /// Show this help
    Help,

    /// Exit
    Exit,
}

impl Command {
    /// Parse one line of input.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// - [`CommandError::UnterminatedQuote`]: a double quote was not closed.
    /// - [`CommandError::Usage`]: unknown command or bad arguments.
    pub fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
        let tokens = split_line(line)?;

        if tokens.is_empty() {
            return Ok(None);
        }

        let line = CommandLine::try_parse_from(tokens)?;

        Ok(Some(line.command))
    }
}

/// Split a line into whitespace separated tokens; double quotes group a token
/// containing spaces.
///
/// # Errors
///
/// Returns [`CommandError::UnterminatedQuote`] if a quote is left open.
pub fn split_line(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            ch if ch.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(mem::take(&mut current));
                    in_token = false;
                }
            }
            ch => {
                current.push(ch);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(CommandError::UnterminatedQuote);
    }

    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Split `add-customer` fields into name and email: the last field is the email
/// and the rest, joined by single spaces, the name.
pub fn customer_fields(fields: &[String]) -> Option<(String, &str)> {
    let (email, name) = fields.split_last()?;

    Some((name.join(" "), email.as_str()))
}
