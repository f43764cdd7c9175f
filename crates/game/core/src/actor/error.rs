//! Actor configuration and execution errors.

use state_machine::UnknownStateError;

use crate::actor::{ActorKind, ObjectCategory};
use crate::error::{ErrorSeverity, GameError};

// ============================================================================
// Configuration Errors
// ============================================================================

/// Authoring mistakes detected while building and initializing actors.
///
/// These surface at setup time and are never recovered from: they mean the
/// unit data disagrees with what the actor variant declares it needs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// `initialize` was called without a target object.
    #[error("{kind} actor has no target")]
    MissingTarget { kind: ActorKind },

    /// A weight the actor declares as required was not supplied.
    #[error("{kind} actor is not available: weight '{key}' is not initialized")]
    MissingWeight { kind: ActorKind, key: &'static str },

    /// The target object lacks a capability the actor needs.
    #[error("{kind} actor needs a {required:?} target, got {found:?}")]
    TargetCategoryMismatch {
        kind: ActorKind,
        required: ObjectCategory,
        found: ObjectCategory,
    },

    /// Data referenced an actor name that does not parse to a kind.
    #[error("unknown actor name '{0}'")]
    UnknownActorName(String),

    /// The kind parsed but no factory is registered for it.
    #[error("no factory registered for {0} actor")]
    UnregisteredActorKind(ActorKind),
}

impl GameError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use ConfigurationError::*;
        match self {
            MissingTarget { .. } => "CONFIG_MISSING_TARGET",
            MissingWeight { .. } => "CONFIG_MISSING_WEIGHT",
            TargetCategoryMismatch { .. } => "CONFIG_TARGET_CATEGORY_MISMATCH",
            UnknownActorName(_) => "CONFIG_UNKNOWN_ACTOR_NAME",
            UnregisteredActorKind(_) => "CONFIG_UNREGISTERED_ACTOR_KIND",
        }
    }
}

// ============================================================================
// Actor Errors
// ============================================================================

/// Errors raised while running, resetting or feeding events to an actor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActorError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The actor's phase machine has no such phase.
    #[error(transparent)]
    UnknownState(#[from] UnknownStateError),

    /// The actor was used before `initialize` succeeded.
    #[error("{0} actor is not initialized")]
    NotInitialized(ActorKind),
}

impl GameError for ActorError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ActorError::Configuration(err) => err.severity(),
            ActorError::UnknownState(err) => err.severity(),
            ActorError::NotInitialized(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ActorError::Configuration(err) => err.error_code(),
            ActorError::UnknownState(err) => err.error_code(),
            ActorError::NotInitialized(_) => "ACTOR_NOT_INITIALIZED",
        }
    }
}
