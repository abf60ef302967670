//! Delivery-cost calculator binary.
//!
//! Runs one quoting session on stdin/stdout. Any invalid answer is
//! reported as `Error: <message>` and the process exits with status 1.
//! Logs go to stderr.

use std::process::ExitCode;

use patterns_strategy::{DeliveryConfig, DeliveryError, run_session};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    info!("delivery-cost starting");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Quoting session failed");
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load configuration and run one session on the process console.
fn run() -> Result<(), DeliveryError> {
    let config = DeliveryConfig::from_env()?;
    info!(
        default_shipping = ?config.default_shipping,
        price_scale = config.price_scale,
        "configuration loaded"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&mut stdin.lock(), &mut stdout.lock(), &config)?;
    Ok(())
}
