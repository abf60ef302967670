//! The weather station: a [`Subject`] holding one temperature reading.

use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::error::ObserverError;
use crate::ids::ObserverId;
use crate::subject::{Observer, Subject, Temperature};

/// A subject that broadcasts temperature changes to its displays.
///
/// Observers are kept in registration order. Every call to
/// [`set_temperature`](Self::set_temperature) has informed all of them
/// by the time it returns.
#[derive(Default)]
pub struct WeatherStation {
    observers: Vec<Rc<dyn Observer>>,
    temperature: Temperature,
}

impl WeatherStation {
    /// Create a station with no observers and a reading of 0.0°C.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new reading, then notify every registered observer.
    pub fn set_temperature(&mut self, temperature: Temperature) {
        self.temperature = temperature;
        self.notify_observers();
    }

    /// The most recently stored reading.
    pub const fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Number of registration entries, duplicates included.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Identities of registered observers, in registration order.
    pub fn observer_ids(&self) -> Vec<ObserverId> {
        self.observers.iter().map(|o| o.id()).collect()
    }

    /// Whether at least one entry has this identity.
    pub fn is_registered(&self, id: ObserverId) -> bool {
        self.observers.iter().any(|o| o.id() == id)
    }
}

impl core::fmt::Debug for WeatherStation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WeatherStation")
            .field("observers", &self.observer_ids())
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl Subject for WeatherStation {
    fn register(&mut self, observer: Rc<dyn Observer>) {
        info!(
            observer_id = %observer.id(),
            name = observer.name(),
            "Observer registered"
        );
        self.observers.push(observer);
    }

    fn remove(&mut self, id: ObserverId) -> Result<Rc<dyn Observer>, ObserverError> {
        let Some(position) = self.observers.iter().position(|o| o.id() == id) else {
            warn!(observer_id = %id, "Observer not found, nothing removed");
            return Err(ObserverError::NotRegistered { id });
        };
        let removed = self.observers.remove(position);
        info!(observer_id = %id, name = removed.name(), "Observer removed");
        Ok(removed)
    }

    fn notify_observers(&self) {
        debug!(
            temperature = self.temperature.as_celsius(),
            observers = self.observers.len(),
            "Notifying observers"
        );
        for observer in &self.observers {
            observer.update(self.temperature);
        }
    }
}
