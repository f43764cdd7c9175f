//! Sparse tile grid served through [`game_core::TileBoard`].
use std::collections::HashMap;

use game_content::MapRecord;
use game_core::{BoardError, EntityId, MapDimensions, Position, TileBoard, TileState, TileView};

/// One tile of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub state: TileState,
    pub occupant: Option<EntityId>,
}

/// TileBoard implementation over a sparse position map.
///
/// Positions inside the bounds may be missing (holes). The tile → occupant
/// and occupant → tile links live in two maps that only `attach` and
/// `detach` modify.
#[derive(Clone, Debug)]
pub struct TileGrid {
    dimensions: MapDimensions,
    tiles: HashMap<Position, Tile>,
    placed: HashMap<EntityId, Position>,
}

impl TileGrid {
    /// Creates a grid filling `dimensions` except for `holes`.
    pub fn new(dimensions: MapDimensions, holes: &[Position]) -> Self {
        let tiles = dimensions
            .positions()
            .filter(|position| !holes.contains(position))
            .map(|position| (position, Tile::default()))
            .collect();
        Self {
            dimensions,
            tiles,
            placed: HashMap::new(),
        }
    }

    /// Creates the tiles of a map record. Placements are not applied.
    pub fn from_map(map: &MapRecord) -> Self {
        Self::new(map.dimensions, &map.holes)
    }

    /// Creates a simple test grid without holes.
    pub fn filled(width: u32, height: u32) -> Self {
        Self::new(MapDimensions::new(width, height), &[])
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Placed objects and their positions, in no particular order.
    pub fn placements(&self) -> impl Iterator<Item = (EntityId, Position)> + '_ {
        self.placed.iter().map(|(entity, position)| (*entity, *position))
    }

    /// Positions currently in `state`, row by row.
    pub fn positions_in(&self, state: TileState) -> Vec<Position> {
        self.dimensions
            .positions()
            .filter(|position| self.tile_state(*position) == Some(state))
            .collect()
    }
}

impl TileBoard for TileGrid {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<TileView> {
        self.tiles.get(&position).map(|tile| TileView {
            position,
            state: tile.state,
            occupant: tile.occupant,
        })
    }

    fn placed_tile(&self, entity: EntityId) -> Option<Position> {
        self.placed.get(&entity).copied()
    }

    fn set_tile_state(&mut self, position: Position, state: TileState) -> bool {
        match self.tiles.get_mut(&position) {
            Some(tile) => {
                tile.state = state;
                true
            }
            None => false,
        }
    }

    fn change_all_tile_state(&mut self, state: TileState) {
        for tile in self.tiles.values_mut() {
            tile.state = state;
        }
    }

    fn attach(&mut self, entity: EntityId, position: Position) -> Result<(), BoardError> {
        let tile = self
            .tiles
            .get(&position)
            .ok_or(BoardError::NoTile(position))?;
        match tile.occupant {
            Some(occupant) if occupant == entity => return Ok(()),
            Some(occupant) => return Err(BoardError::Occupied { position, occupant }),
            None => {}
        }

        self.detach(entity);
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.occupant = Some(entity);
        }
        self.placed.insert(entity, position);
        tracing::debug!("{} attached to {}", entity, position);
        Ok(())
    }

    fn detach(&mut self, entity: EntityId) -> Option<Position> {
        let position = self.placed.remove(&entity)?;
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.occupant = None;
        }
        tracing::debug!("{} detached from {}", entity, position);
        Some(position)
    }
}
