//! Engine-side implementations of the board collaborators.
mod grid;
mod selection;

pub use grid::{Tile, TileGrid};
pub use selection::Selection;
