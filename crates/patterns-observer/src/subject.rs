//! The observer/subject contract.
//!
//! A [`Subject`] owns an ordered list of [`Observer`]s and pushes every
//! change of its reading to them synchronously. Observers never pull;
//! the value they receive in [`Observer::update`] is the whole message.

use std::rc::Rc;

use serde::Deserialize;

use crate::error::ObserverError;
use crate::ids::ObserverId;

/// A temperature reading in degrees Celsius.
///
/// Displays with one decimal place, e.g. `25.0°C`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Temperature(pub f64);

impl Temperature {
    /// Create a reading from degrees Celsius.
    pub const fn celsius(value: f64) -> Self {
        Self(value)
    }

    /// Return the reading in degrees Celsius.
    pub const fn as_celsius(self) -> f64 {
        self.0
    }
}

impl core::fmt::Display for Temperature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

/// A receiver of pushed temperature updates.
pub trait Observer {
    /// Identity used for removal.
    fn id(&self) -> ObserverId;

    /// Human-readable name, used to tag emitted updates.
    fn name(&self) -> &str;

    /// Called by the subject with its new reading.
    fn update(&self, temperature: Temperature);
}

/// An observable that fans out its reading to registered observers.
pub trait Subject {
    /// Append an observer. Duplicates are allowed and each entry is
    /// notified separately.
    fn register(&mut self, observer: Rc<dyn Observer>);

    /// Remove the first registered observer with the given identity.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::NotRegistered`] if no registered observer
    /// has this identity. The registration list is left untouched.
    fn remove(&mut self, id: ObserverId) -> Result<Rc<dyn Observer>, ObserverError>;

    /// Push the current reading to every observer in registration order.
    fn notify_observers(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_displays_one_decimal_place() {
        assert_eq!(Temperature::celsius(25.0).to_string(), "25.0°C");
        assert_eq!(Temperature::celsius(-3.4).to_string(), "-3.4°C");
        assert_eq!(Temperature::celsius(30.0).to_string(), "30.0°C");
    }

    #[test]
    fn temperature_deserializes_from_bare_number() {
        let t: Temperature = serde_yml::from_str("28.5").unwrap_or_default();
        assert!((t.as_celsius() - 28.5).abs() < f64::EPSILON);
    }
}
