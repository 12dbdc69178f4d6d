//! Storefront console

use std::{io, process::ExitCode};

use storefront::{cli::Session, config::AppConfig, observability, store::Store};
use tracing::{error, info};

fn main() -> ExitCode {
    let config = AppConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(init_error) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln"
        )]
        {
            eprintln!("{init_error}");
        }

        return ExitCode::FAILURE;
    }

    let currency = config.store.currency.currency();
    let mut store = Store::new(currency);

    info!(currency = currency.iso_alpha_code, "store ready");

    let stdin = io::stdin();
    let stdout = io::stdout();

    match Session::new(&mut store, config.store.prompt()).run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(session_error) => {
            error!("session failed: {session_error}");

            ExitCode::FAILURE
        }
    }
}
