//! Map layout records.

use game_core::{MapDimensions, PlaceInfo, Position};

/// Static layout of a battle map: its bounds, missing tiles and the units
/// placed before the first turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapRecord {
    pub dimensions: MapDimensions,

    /// Positions inside the bounds that have no tile.
    #[cfg_attr(feature = "serde", serde(default))]
    pub holes: Vec<Position>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub placements: Vec<PlaceInfo>,
}

impl MapRecord {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            holes: Vec::new(),
            placements: Vec::new(),
        }
    }

    /// Returns true if `position` is inside the bounds and not a hole.
    pub fn has_tile(&self, position: Position) -> bool {
        self.dimensions.contains(position) && !self.holes.contains(&position)
    }

    /// Drops placements that do not land on a tile, keeping the rest in
    /// order. Returns how many were dropped.
    pub fn retain_valid_placements(&mut self) -> usize {
        let before = self.placements.len();
        let placements = std::mem::take(&mut self.placements);
        self.placements = placements
            .into_iter()
            .filter(|place| {
                let valid = self.has_tile(place.position);
                if !valid {
                    tracing::warn!(
                        "skipping unit {} placed at {}: no tile there",
                        place.unit_no,
                        place.position
                    );
                }
                valid
            })
            .collect();
        before - self.placements.len()
    }
}
