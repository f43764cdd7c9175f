//! Errors surfaced by the battle session.

use game_core::{
    ActorError, ActorKind, BoardError, EntityId, ErrorSeverity, GameError, QueueError,
};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("unit {0} is not on the battlefield")]
    UnknownUnit(EntityId),

    #[error("unit number {0} is not in the catalog")]
    UnknownUnitNo(u32),

    #[error("unit {unit} cannot reserve {kind}: it is not that team's turn")]
    NotUnitsTurn { unit: EntityId, kind: ActorKind },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Actor(#[from] ActorError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::UnknownUnit(_) | RuntimeError::NotUnitsTurn { .. } => {
                ErrorSeverity::Validation
            }
            RuntimeError::UnknownUnitNo(_) => ErrorSeverity::Fatal,
            RuntimeError::Board(err) => err.severity(),
            RuntimeError::Queue(err) => err.severity(),
            RuntimeError::Actor(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::UnknownUnit(_) => "RUNTIME_UNKNOWN_UNIT",
            RuntimeError::UnknownUnitNo(_) => "RUNTIME_UNKNOWN_UNIT_NO",
            RuntimeError::NotUnitsTurn { .. } => "RUNTIME_NOT_UNITS_TURN",
            RuntimeError::Board(err) => err.error_code(),
            RuntimeError::Queue(err) => err.error_code(),
            RuntimeError::Actor(err) => err.error_code(),
        }
    }
}
