//! Observer pattern demo: a weather station pushing temperature updates
//! to registered displays.
//!
//! # Modules
//!
//! - [`subject`] -- The [`Subject`] and [`Observer`] traits and the
//!   [`Temperature`] reading they exchange.
//! - [`station`] -- [`WeatherStation`], the concrete subject.
//! - [`display`] -- [`WeatherDisplay`], a named observer that prints.
//! - [`ids`] -- Typed observer identity.
//! - [`config`] -- YAML scenario configuration.
//! - [`scenario`] -- Runs a scenario script against a fresh station.
//! - [`error`] -- Error types.
//!
//! [`Subject`]: subject::Subject
//! [`Observer`]: subject::Observer
//! [`Temperature`]: subject::Temperature
//! [`WeatherStation`]: station::WeatherStation
//! [`WeatherDisplay`]: display::WeatherDisplay

pub mod config;
pub mod display;
pub mod error;
pub mod ids;
pub mod scenario;
pub mod station;
pub mod subject;

// Re-export primary types at crate root.
pub use config::{ConfigError, ScenarioConfig, Step};
pub use display::{SharedSink, WeatherDisplay};
pub use error::{ObserverError, ScenarioError};
pub use ids::ObserverId;
pub use scenario::ScenarioSummary;
pub use station::WeatherStation;
pub use subject::{Observer, Subject, Temperature};
