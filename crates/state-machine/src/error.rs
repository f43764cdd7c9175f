//! Errors raised by state transitions.

/// Transition requested to a key with no registered state.
///
/// This always points at an incomplete setup step rather than a runtime
/// condition, so callers treat it as fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("state '{key}' is not registered")]
pub struct UnknownStateError {
    /// Display form of the rejected key.
    pub key: String,
}

impl UnknownStateError {
    pub fn new(key: impl core::fmt::Display) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}
