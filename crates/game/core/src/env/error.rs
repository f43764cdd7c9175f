//! Board access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Errors raised by tile board mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    /// No tile exists at the position (outside the map or a hole).
    #[error("no tile at position {0}")]
    NoTile(Position),

    /// The tile already carries another object.
    #[error("tile {position} is occupied by {occupant}")]
    Occupied {
        position: Position,
        occupant: EntityId,
    },
}

impl GameError for BoardError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BoardError::NoTile(_) => ErrorSeverity::Validation,
            BoardError::Occupied { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            BoardError::NoTile(_) => "BOARD_NO_TILE",
            BoardError::Occupied { .. } => "BOARD_OCCUPIED",
        }
    }
}
