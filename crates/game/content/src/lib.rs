//! Data-driven content definitions and loaders.
//!
//! This crate is the data service of the tactics rules. It provides loaders
//! for RON/TOML data files:
//! - Unit catalogs with their actor records (data-driven via RON)
//! - Map layouts and initial placements (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by the runtime when a battle is set up and never
//! changes during play.

pub mod map;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use map::MapRecord;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, MapLoader, UnitLoader};
