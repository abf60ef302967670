//! Error types for the `patterns-observer` crate.

use crate::config::ConfigError;
use crate::ids::ObserverId;

/// Errors raised by subject operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObserverError {
    /// The observer is not in the subject's registration list.
    #[error("observer not registered: {id}")]
    NotRegistered {
        /// The identity that was looked up.
        id: ObserverId,
    },
}

/// Errors that abort a scenario run.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// Writing to the output sink failed.
    #[error("output error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The scenario configuration could not be loaded.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },
}
