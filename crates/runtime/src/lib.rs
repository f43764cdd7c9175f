//! Engine side of the tactics rules.
//!
//! This crate implements the collaborators `game-core` only describes and
//! drives them as a battle session:
//! - [`board`] holds the sparse [`TileGrid`] and the global [`Selection`]
//! - [`battle`] owns units and their actor queues, routes touches and ticks,
//!   and applies the effects actors report
pub mod battle;
pub mod board;

mod error;

pub use battle::{Battle, BattleEvent, Unit};
pub use board::{Selection, Tile, TileGrid};
pub use error::{Result, RuntimeError};
