//! Identity of observers registered with a subject.
//!
//! Observers are compared by identity, never by name: two displays that
//! happen to share a name are still distinct observers. Identity is a
//! UUID v7 assigned when the observer is constructed.

use uuid::Uuid;

/// Unique identifier for an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(Uuid);

impl ObserverId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ObserverId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
