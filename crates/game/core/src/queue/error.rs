//! Actor queue errors.

use crate::actor::{ActorError, ActorKind, ConfigurationError};
use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Errors raised while configuring or driving an [`super::ActorQueue`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// The catalogue already holds an actor of this kind.
    #[error("{0} actor is already registered")]
    DuplicateActor(ActorKind),

    /// Reservation of a kind the catalogue does not hold.
    #[error("{0} actor is not in the catalogue")]
    UnknownActorKind(ActorKind),

    /// The actor is bound to an object other than the queue's owner.
    #[error("{kind} actor targets {target:?}, not queue owner {owner}")]
    ForeignActor {
        kind: ActorKind,
        owner: EntityId,
        target: Option<EntityId>,
    },

    /// The catalogue reached its fixed capacity.
    #[error("actor catalogue is full ({0} actors)")]
    CatalogueFull(usize),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Actor(#[from] ActorError),
}

impl GameError for QueueError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            QueueError::DuplicateActor(_)
            | QueueError::ForeignActor { .. }
            | QueueError::CatalogueFull(_) => ErrorSeverity::Fatal,
            QueueError::UnknownActorKind(_) => ErrorSeverity::Internal,
            QueueError::Configuration(err) => err.severity(),
            QueueError::Actor(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            QueueError::DuplicateActor(_) => "QUEUE_DUPLICATE_ACTOR",
            QueueError::UnknownActorKind(_) => "QUEUE_UNKNOWN_ACTOR_KIND",
            QueueError::ForeignActor { .. } => "QUEUE_FOREIGN_ACTOR",
            QueueError::CatalogueFull(_) => "QUEUE_CATALOGUE_FULL",
            QueueError::Configuration(err) => err.error_code(),
            QueueError::Actor(err) => err.error_code(),
        }
    }
}
