//! Interactive console
//!
//! Reads one command per line, runs it against a [`Store`] and writes the result.
//! Failed commands print an error line and the session carries on.

use std::io::{self, BufRead, Write};

use clap::CommandFactory;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{errors::CatalogError, prices::parse_price, store::Store};

pub mod command;
pub mod render;

pub use command::{Command, CommandLine, customer_fields};

/// Errors raised while running a console command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A store operation failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Unknown command or malformed arguments.
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// A double quote was left open.
    #[error("unterminated quote in input")]
    UnterminatedQuote,

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,

    /// Stop the session.
    Exit,
}

/// A console session over a store.
#[derive(Debug)]
pub struct Session<'s> {
    store: &'s mut Store,
    prompt: Option<String>,
}

impl<'s> Session<'s> {
    /// Creates a session printing `prompt` before each command.
    pub fn new(store: &'s mut Store, prompt: Option<&str>) -> Self {
        Self {
            store,
            prompt: prompt.map(str::to_string),
        }
    }

    /// Read and run commands until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Io`] if reading input or writing output fails. Every
    /// other error is reported on `output` and the session continues.
    pub fn run(
        &mut self,
        mut input: impl BufRead,
        mut output: impl Write,
    ) -> Result<(), CommandError> {
        let mut line = String::new();

        loop {
            if let Some(prompt) = &self.prompt {
                write!(output, "{prompt}")?;
                output.flush()?;
            }

            line.clear();

            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }

            match self.run_line(&line, &mut output) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(CommandError::Io(error)) => return Err(error.into()),
                Err(error) => {
                    warn!(%error, "command failed");
                    write_error(&mut output, &error)?;
                }
            }
        }

        Ok(())
    }

    /// Parse and run a single line of input.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] if the line cannot be parsed or the command fails.
    pub fn run_line(
        &mut self,
        line: &str,
        output: &mut impl Write,
    ) -> Result<Flow, CommandError> {
        match Command::parse_line(line)? {
            Some(command) => self.execute(command, output),
            None => Ok(Flow::Continue),
        }
    }

    /// Run a parsed command.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] if the command fails or output cannot be written.
    pub fn execute(
        &mut self,
        command: Command,
        output: &mut impl Write,
    ) -> Result<Flow, CommandError> {
        debug!(?command, "executing");

        match command {
            Command::AddProduct {
                name,
                price,
                quantity,
            } => {
                let price = parse_price(&price).map_err(CatalogError::from)?;

                self.store.add_product(&name, price, quantity)?;

                writeln!(output, "Product added to inventory successfully.")?;
            }
            Command::ListProducts => {
                writeln!(output, "Available Products:")?;
                writeln!(output, "{}", render::product_table(self.store.products()))?;
            }
            Command::AddCustomer { fields } => {
                let Some((name, email)) = customer_fields(&fields) else {
                    return Ok(Flow::Continue);
                };

                self.store.add_customer(&name, email)?;

                writeln!(output, "Customer added successfully.")?;
            }
            Command::PlaceOrder {
                email,
                product,
                quantity,
            } => {
                self.store.place_order(&email, &product, quantity)?;

                writeln!(output, "Order placed successfully.")?;
            }
            Command::OrderTotal { email, product } => {
                let total = self.store.total_for_customer_and_product(&email, &product)?;

                writeln!(
                    output,
                    "Total price of the orders for customer {email} and product {product}: {total}"
                )?;
            }
            Command::CustomerOrders { email } => {
                let orders = self.store.orders_for_customer(&email)?;
                let name = self
                    .store
                    .customer(&email)
                    .map_or(email.as_str(), |customer| customer.name());

                writeln!(output, "Orders placed by {name}:")?;

                for order in orders {
                    writeln!(
                        output,
                        "Product: {}, Quantity: {}",
                        order.product, order.quantity
                    )?;
                }
            }
            Command::Help => {
                writeln!(output, "{}", CommandLine::command().render_help())?;
            }
            Command::Exit => {
                writeln!(output, "Exiting...")?;

                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }
}

/// Report a failed command on a single line.
fn write_error(output: &mut impl Write, error: &CommandError) -> io::Result<()> {
    match error {
        CommandError::Usage(usage) => {
            let message = usage.to_string();
            let first = message.lines().next().unwrap_or_default();

            writeln!(
                output,
                "Error: {}",
                first.strip_prefix("error: ").unwrap_or(first)
            )
        }
        other => writeln!(output, "Error: {other}"),
    }
}
