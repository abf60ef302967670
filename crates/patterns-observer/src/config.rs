//! Scenario configuration for the weather-station demo.
//!
//! A scenario lists the displays registered up front and an ordered
//! script of station operations. It is read from YAML; every field has a
//! default, and the default scenario is the classic demo script:
//!
//! ```yaml
//! displays: ["Mobile app", "Digital billboard", "Email"]
//! steps:
//!   - action: set_temperature
//!     celsius: 25.0
//!   - action: set_temperature
//!     celsius: 30.0
//!   - action: remove
//!     display: "No such observer"
//!   - action: remove
//!     display: "Digital billboard"
//!   - action: set_temperature
//!     celsius: 28.0
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::subject::Temperature;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// A scripted run of the weather station.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioConfig {
    /// Display names registered, in order, before the first step.
    #[serde(default = "default_displays")]
    pub displays: Vec<String>,

    /// Operations applied to the station, in order.
    #[serde(default = "default_steps")]
    pub steps: Vec<Step>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            displays: default_displays(),
            steps: default_steps(),
        }
    }
}

impl ScenarioConfig {
    /// Load a scenario from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not a valid scenario.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a scenario from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not a valid scenario.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Resolve the scenario to run.
    ///
    /// An `explicit` path always wins and must exist. Otherwise `fallback`
    /// is loaded if present, and the default script is used if not.
    ///
    /// # Errors
    ///
    /// Same as [`from_file`](Self::from_file) for whichever file is chosen.
    pub fn resolve(explicit: Option<&Path>, fallback: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            info!(path = %path.display(), "Loading scenario from explicit path");
            return Self::from_file(path);
        }
        if fallback.exists() {
            info!(path = %fallback.display(), "Loading scenario from working directory");
            Self::from_file(fallback)
        } else {
            info!(path = %fallback.display(), "Scenario file not found, using default script");
            Ok(Self::default())
        }
    }
}

/// One station operation in a scenario script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Store a new reading and notify every registered display.
    SetTemperature {
        /// The new reading.
        celsius: Temperature,
    },
    /// Register the named display (again, if already registered).
    Register {
        /// Display name.
        display: String,
    },
    /// Remove the first registration of the named display.
    Remove {
        /// Display name.
        display: String,
    },
}

fn default_displays() -> Vec<String> {
    vec![
        "Mobile app".to_owned(),
        "Digital billboard".to_owned(),
        "Email".to_owned(),
    ]
}

fn default_steps() -> Vec<Step> {
    vec![
        Step::SetTemperature {
            celsius: Temperature::celsius(25.0),
        },
        Step::SetTemperature {
            celsius: Temperature::celsius(30.0),
        },
        Step::Remove {
            display: "No such observer".to_owned(),
        },
        Step::Remove {
            display: "Digital billboard".to_owned(),
        },
        Step::SetTemperature {
            celsius: Temperature::celsius(28.0),
        },
    ]
}
