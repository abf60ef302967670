//! Weather station demo binary.
//!
//! Loads a scenario, runs it against a fresh station and prints every
//! notification to stdout. Logs go to stderr.
//!
//! The scenario comes from the YAML file named by
//! `WEATHER_STATION_CONFIG`, else `weather-station.yaml` in the working
//! directory, else the built-in default script.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use patterns_observer::{ScenarioConfig, ScenarioError, scenario};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default scenario file looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "weather-station.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the scenario cannot be loaded or output fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    info!("weather-station starting");

    let config = load_config()?;
    info!(
        displays = config.displays.len(),
        steps = config.steps.len(),
        "Scenario loaded"
    );

    let sink = Rc::new(RefCell::new(std::io::stdout()));
    let summary = scenario::run(&config, &sink)?;

    info!(
        notifications = summary.notifications,
        failed_removals = summary.failed_removals,
        "weather-station finished"
    );
    Ok(())
}

/// Resolve and load the scenario configuration.
fn load_config() -> Result<ScenarioConfig, ScenarioError> {
    let explicit = std::env::var_os("WEATHER_STATION_CONFIG").map(PathBuf::from);
    if explicit.is_some() {
        info!("Scenario path taken from WEATHER_STATION_CONFIG");
    }
    Ok(ScenarioConfig::resolve(explicit.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?)
}
