//! Configuration
//!
//! Settings come from CLI flags, falling back to environment variables (a `.env`
//! file is loaded first when present).

use clap::{Args, Parser, ValueEnum};
use rusty_money::iso::{self, Currency};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Currencies a store can price products in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CurrencyCode {
    /// US dollar
    Usd,

    /// Pound sterling
    Gbp,

    /// Euro
    Eur,
}

impl CurrencyCode {
    /// The ISO currency for this code.
    pub fn currency(self) -> &'static Currency {
        match self {
            CurrencyCode::Usd => iso::USD,
            CurrencyCode::Gbp => iso::GBP,
            CurrencyCode::Eur => iso::EUR,
        }
    }
}

/// Store and console settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Currency products are priced in
    #[arg(long, env = "STORE_CURRENCY", value_enum, default_value_t = CurrencyCode::Usd)]
    pub currency: CurrencyCode,

    /// Prompt shown before each command
    #[arg(long, env = "STORE_PROMPT", default_value = "> ")]
    pub prompt: String,

    /// Do not print a prompt (for piped input)
    #[arg(short, long)]
    pub quiet: bool,
}

impl StoreConfig {
    /// Prompt to print before each command, if any.
    pub fn prompt(&self) -> Option<&str> {
        (!self.quiet).then_some(self.prompt.as_str())
    }
}

/// Storefront configuration
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "In-memory shop console", long_about = None)]
pub struct AppConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Store settings.
    #[command(flatten)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn explicit_flags_are_parsed() -> TestResult {
        let config = AppConfig::try_parse_from([
            "storefront",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--currency",
            "gbp",
            "--quiet",
        ])?;

        assert_eq!(config.logging.log_level, "debug");
        assert_eq!(config.logging.log_format, LogFormat::Json);
        assert_eq!(config.store.currency.currency(), iso::GBP);
        assert_eq!(config.store.prompt(), None);

        Ok(())
    }

    #[test]
    fn prompt_is_shown_unless_quiet() -> TestResult {
        let config = AppConfig::try_parse_from(["storefront", "--prompt", "shop> "])?;

        assert_eq!(config.store.prompt(), Some("shop> "));

        Ok(())
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let result = AppConfig::try_parse_from(["storefront", "--currency", "jpy"]);

        assert!(result.is_err(), "jpy is not a supported currency");
    }

    #[test]
    fn currency_codes_map_to_iso_currencies() {
        assert_eq!(CurrencyCode::Usd.currency(), iso::USD);
        assert_eq!(CurrencyCode::Gbp.currency(), iso::GBP);
        assert_eq!(CurrencyCode::Eur.currency(), iso::EUR);
    }
}
