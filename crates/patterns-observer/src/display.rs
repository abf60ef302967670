//! A named display that prints every temperature it is pushed.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use tracing::warn;

use crate::ids::ObserverId;
use crate::subject::{Observer, Temperature};

/// Output sink shared between displays and whoever drives the station.
pub type SharedSink<W> = Rc<RefCell<W>>;

/// An [`Observer`] that writes `"<name> shows new temperature: <t>"`
/// to its sink on every update.
///
/// The display keeps no state of its own: nothing about past readings
/// survives an update.
pub struct WeatherDisplay<W: Write> {
    id: ObserverId,
    name: String,
    sink: SharedSink<W>,
}

impl<W: Write> WeatherDisplay<W> {
    /// Create a display with a fresh identity.
    pub fn new(name: impl Into<String>, sink: SharedSink<W>) -> Self {
        Self {
            id: ObserverId::new(),
            name: name.into(),
            sink,
        }
    }
}

impl<W: Write> core::fmt::Debug for WeatherDisplay<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WeatherDisplay")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<W: Write> Observer for WeatherDisplay<W> {
    fn id(&self) -> ObserverId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, temperature: Temperature) {
        let mut sink = self.sink.borrow_mut();
        if let Err(e) = writeln!(sink, "{} shows new temperature: {temperature}", self.name) {
            warn!(
                observer_id = %self.id,
                name = self.name.as_str(),
                error = %e,
                "failed to write display update"
            );
        }
    }
}
