//! Traits describing the engine-owned collaborators.
//!
//! Actors never own the board, the selection register or unit data. They
//! reach them through these traits, handed in explicitly for every call via
//! [`crate::actor::ActorContext`], so the runtime's grid and test doubles are
//! interchangeable.
mod board;
mod catalog;
mod error;
mod roster;
mod selection;

pub use board::{ChainRule, MapDimensions, TileBoard, TileView, chain_reach};
pub use catalog::{ActorRecord, PlaceInfo, UnitCatalog, UnitRecord};
pub use error::BoardError;
pub use roster::Roster;
pub use selection::SelectionRegister;
