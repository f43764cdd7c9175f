//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. `ConfigurationError`, `QueueError`) are defined
//! next to the code that raises them; this module provides the shared
//! classification they all implement.
//!
//! # Design Principles
//!
//! - **Type Safety**: each subsystem has its own error enum
//! - **Severity Classification**: errors are categorized for handling strategies
//! - **Fail Fast**: configuration mistakes surface at setup, never mid-turn

use state_machine::UnknownStateError;

/// Severity level of an error, used for categorization and handling.
///
/// - **Recoverable**: the caller may try again or pick another action
/// - **Validation**: invalid input, should not retry without changes
/// - **Internal**: inconsistent catalogues or state, indicates a bug
/// - **Fatal**: setup is broken and the scenario cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    ///
    /// Examples: not enough action points, destination occupied
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown unit, touching a tile outside the map
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: transition to an unregistered phase, reserving an actor kind
    /// the unit was never given
    Internal,

    /// Fatal error - authoring data is wrong, cannot continue.
    ///
    /// Examples: missing required weight, duplicate actor registration
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or broken data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl GameError for UnknownStateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "STATE_UNKNOWN"
    }
}
