//! Small value types shared by actors, queues and the board boundary.
mod common;
mod team;
mod tile;
mod turn;

pub use common::{EntityId, Position};
pub use team::Team;
pub use tile::TileState;
pub use turn::{TurnError, TurnState};
