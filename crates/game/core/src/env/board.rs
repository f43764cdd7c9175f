use std::collections::{HashSet, VecDeque};

use crate::env::BoardError;
use crate::state::{EntityId, Position, TileState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Every position inside the bounds, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}

/// Snapshot of one tile as seen through the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileView {
    pub position: Position,
    pub state: TileState,
    pub occupant: Option<EntityId>,
}

/// How a chain highlight spreads from its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainRule {
    /// Spread through every tile, occupied or not (attack reach).
    Open,
    /// Occupied tiles other than the origin stop the spread (movement reach).
    AvoidOccupied,
}

/// Sparse grid of tiles with highlight state and at most one occupant each.
///
/// Occupancy is two-sided (tile → occupant, occupant → tile). Implementations
/// must only change it through [`TileBoard::attach`] and
/// [`TileBoard::detach`], which keep both sides consistent.
pub trait TileBoard {
    fn dimensions(&self) -> MapDimensions;

    /// Returns the tile at `position`, or `None` for holes and out-of-bounds.
    fn tile(&self, position: Position) -> Option<TileView>;

    /// Returns the tile an object is placed on.
    fn placed_tile(&self, entity: EntityId) -> Option<Position>;

    /// Sets one tile's highlight. Returns `false` if there is no tile.
    fn set_tile_state(&mut self, position: Position, state: TileState) -> bool;

    /// Sets every tile's highlight.
    fn change_all_tile_state(&mut self, state: TileState);

    /// Places `entity` on the tile at `position`, detaching it from any
    /// previous tile.
    ///
    /// # Errors
    ///
    /// Fails if there is no tile or another object occupies it.
    fn attach(&mut self, entity: EntityId, position: Position) -> Result<(), BoardError>;

    /// Removes `entity` from its tile and returns where it was.
    fn detach(&mut self, entity: EntityId) -> Option<Position>;

    fn tile_state(&self, position: Position) -> Option<TileState> {
        self.tile(position).map(|tile| tile.state)
    }

    fn occupant(&self, position: Position) -> Option<EntityId> {
        self.tile(position).and_then(|tile| tile.occupant)
    }

    fn contains(&self, position: Position) -> bool {
        self.tile(position).is_some()
    }

    /// Marks every tile reachable from `origin` within `range` steps as
    /// [`TileState::Active`] and returns how many tiles were activated.
    fn show_chain_active_tile(&mut self, origin: Position, range: u32, rule: ChainRule) -> usize {
        let reach = chain_reach(&*self, origin, range, rule);
        for position in &reach {
            self.set_tile_state(*position, TileState::Active);
        }
        tracing::debug!(
            "chain highlight from {} range {} ({:?}): {} tiles",
            origin,
            range,
            rule,
            reach.len()
        );
        reach.len()
    }

    /// Moves `entity` to an empty tile and returns its previous position.
    fn relocate(
        &mut self,
        entity: EntityId,
        to: Position,
    ) -> Result<Option<Position>, BoardError> {
        let tile = self.tile(to).ok_or(BoardError::NoTile(to))?;
        if let Some(occupant) = tile.occupant.filter(|occupant| *occupant != entity) {
            return Err(BoardError::Occupied {
                position: to,
                occupant,
            });
        }
        let from = self.detach(entity);
        self.attach(entity, to)?;
        Ok(from)
    }
}

/// Breadth-first flood over existing tiles, at most `range` orthogonal steps
/// from `origin`. The origin is part of the result whenever it is a tile.
pub fn chain_reach<B>(board: &B, origin: Position, range: u32, rule: ChainRule) -> Vec<Position>
where
    B: TileBoard + ?Sized,
{
    let mut reached = Vec::new();
    if !board.contains(origin) {
        return reached;
    }

    let mut seen = HashSet::from([origin]);
    let mut frontier = VecDeque::from([(origin, 0u32)]);
    while let Some((position, steps)) = frontier.pop_front() {
        reached.push(position);
        if steps == range {
            continue;
        }
        for next in position.neighbors() {
            if seen.contains(&next) {
                continue;
            }
            let Some(tile) = board.tile(next) else {
                continue;
            };
            if rule == ChainRule::AvoidOccupied && tile.occupant.is_some() {
                continue;
            }
            seen.insert(next);
            frontier.push_back((next, steps + 1));
        }
    }
    reached
}
