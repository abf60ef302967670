//! Drives a [`WeatherStation`] through a [`ScenarioConfig`] script.
//!
//! The runner owns all console text that is not a display update:
//! announcing temperature changes and reporting removal outcomes. The
//! station itself never writes anything.

use std::collections::BTreeMap;
use std::io::Write;
use std::rc::Rc;

use tracing::info;

use crate::config::{ScenarioConfig, Step};
use crate::display::{SharedSink, WeatherDisplay};
use crate::error::ScenarioError;
use crate::station::WeatherStation;
use crate::subject::{Observer, Subject};

/// Counters describing a completed scenario run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioSummary {
    /// Steps executed.
    pub steps: usize,
    /// Individual `update` calls delivered to displays.
    pub notifications: usize,
    /// Removals that reported "not found".
    pub failed_removals: usize,
}

/// Run `config` against a fresh station, writing all output to `sink`.
///
/// Display names resolve to one display each. A name seen for the first
/// time in a `remove` step creates a display that was never registered,
/// so the removal reports "not found" and the run continues.
///
/// # Errors
///
/// Returns [`ScenarioError::Io`] if writing runner output fails.
pub fn run<W: Write + 'static>(
    config: &ScenarioConfig,
    sink: &SharedSink<W>,
) -> Result<ScenarioSummary, ScenarioError> {
    let mut station = WeatherStation::new();
    let mut displays: BTreeMap<String, Rc<WeatherDisplay<W>>> = BTreeMap::new();
    let mut summary = ScenarioSummary::default();

    for name in &config.displays {
        let display = resolve(&mut displays, name, sink);
        station.register(display);
    }

    for step in &config.steps {
        match step {
            Step::SetTemperature { celsius } => {
                writeln!(sink.borrow_mut(), "Temperature changed: {celsius}")?;
                summary.notifications = summary
                    .notifications
                    .saturating_add(station.observer_count());
                station.set_temperature(*celsius);
            }
            Step::Register { display } => {
                let observer = resolve(&mut displays, display, sink);
                station.register(observer);
                writeln!(sink.borrow_mut(), "{display} registered.")?;
            }
            Step::Remove { display } => {
                let id = resolve(&mut displays, display, sink).id();
                if station.remove(id).is_ok() {
                    writeln!(sink.borrow_mut(), "Observer removed.")?;
                } else {
                    summary.failed_removals = summary.failed_removals.saturating_add(1);
                    writeln!(sink.borrow_mut(), "Error: observer not found.")?;
                }
            }
        }
        summary.steps = summary.steps.saturating_add(1);
    }

    info!(
        steps = summary.steps,
        notifications = summary.notifications,
        failed_removals = summary.failed_removals,
        "Scenario complete"
    );
    Ok(summary)
}

/// Look up the display for `name`, creating it on first use.
fn resolve<W: Write>(
    displays: &mut BTreeMap<String, Rc<WeatherDisplay<W>>>,
    name: &str,
    sink: &SharedSink<W>,
) -> Rc<WeatherDisplay<W>> {
    Rc::clone(
        displays
            .entry(name.to_owned())
            .or_insert_with(|| Rc::new(WeatherDisplay::new(name, Rc::clone(sink)))),
    )
}
