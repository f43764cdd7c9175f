#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};

use game_core::{
    ActTarget, Actor, ActorContext, ActorQueue, ActorRegistry, AttackActor, BoardError, EntityId,
    MapDimensions, MoveActor, Position, Team, TileBoard, TileState, TileView, TurnState, Weights,
};

/// Dense rectangular board backed by hash maps.
#[derive(Debug)]
pub struct MockBoard {
    dimensions: MapDimensions,
    tiles: HashMap<Position, (TileState, Option<EntityId>)>,
    placed: HashMap<EntityId, Position>,
}

impl MockBoard {
    pub fn new(width: u32, height: u32) -> Self {
        let dimensions = MapDimensions::new(width, height);
        let tiles = dimensions
            .positions()
            .map(|position| (position, (TileState::Normal, None)))
            .collect();
        Self {
            dimensions,
            tiles,
            placed: HashMap::new(),
        }
    }

    pub fn count(&self, state: TileState) -> usize {
        self.tiles.values().filter(|(s, _)| *s == state).count()
    }

    pub fn all_in(&self, state: TileState) -> bool {
        self.count(state) == self.tiles.len()
    }
}

impl TileBoard for MockBoard {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<TileView> {
        self.tiles
            .get(&position)
            .map(|(state, occupant)| TileView {
                position,
                state: *state,
                occupant: *occupant,
            })
    }

    fn placed_tile(&self, entity: EntityId) -> Option<Position> {
        self.placed.get(&entity).copied()
    }

    fn set_tile_state(&mut self, position: Position, state: TileState) -> bool {
        match self.tiles.get_mut(&position) {
            Some(tile) => {
                tile.0 = state;
                true
            }
            None => false,
        }
    }

    fn change_all_tile_state(&mut self, state: TileState) {
        for tile in self.tiles.values_mut() {
            tile.0 = state;
        }
    }

    fn attach(&mut self, entity: EntityId, position: Position) -> Result<(), BoardError> {
        let occupant = self
            .tiles
            .get(&position)
            .ok_or(BoardError::NoTile(position))?
            .1;
        if let Some(occupant) = occupant.filter(|occupant| *occupant != entity) {
            return Err(BoardError::Occupied { position, occupant });
        }
        self.detach(entity);
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.1 = Some(entity);
        }
        self.placed.insert(entity, position);
        Ok(())
    }

    fn detach(&mut self, entity: EntityId) -> Option<Position> {
        let position = self.placed.remove(&entity)?;
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.1 = None;
        }
        Some(position)
    }
}

/// Collaborators one actor call needs, owned together.
pub struct World {
    pub board: MockBoard,
    pub selection: Option<EntityId>,
    pub roster: BTreeMap<EntityId, Team>,
    pub turn: TurnState,
}

impl World {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            board: MockBoard::new(width, height),
            selection: None,
            roster: BTreeMap::new(),
            turn: TurnState::new(Team::Ally, 3),
        }
    }

    /// Places a unit of `team` at `(x, y)`.
    pub fn place(&mut self, id: u32, team: Team, x: i32, y: i32) -> EntityId {
        let entity = EntityId(id);
        self.board
            .attach(entity, Position::new(x, y))
            .expect("placement");
        self.roster.insert(entity, team);
        entity
    }

    pub fn cx(&mut self) -> ActorContext<'_> {
        ActorContext::new(
            &mut self.board,
            &mut self.selection,
            &self.roster,
            &mut self.turn,
        )
    }
}

pub fn weights<const N: usize>(pairs: [(&str, i32); N]) -> Weights {
    pairs.into_iter().collect()
}

pub fn attack_actor(entity: EntityId, range: i32, damage: i32) -> AttackActor {
    let mut actor = AttackActor::new();
    actor
        .initialize(
            Some(ActTarget::unit(entity)),
            weights([("range", range), ("damage", damage)]),
        )
        .expect("attack actor");
    actor
}

pub fn move_actor(entity: EntityId, range: i32, act_point: i32) -> MoveActor {
    let mut actor = MoveActor::new();
    actor
        .initialize(
            Some(ActTarget::unit(entity)),
            weights([("range", range), ("actPoint", act_point)]),
        )
        .expect("move actor");
    actor
}

/// Queue holding a move actor and an attack actor for `entity`.
pub fn move_attack_queue(entity: EntityId) -> ActorQueue {
    let mut queue = ActorQueue::new(entity);
    queue.add_actor(Box::new(move_actor(entity, 2, 1))).unwrap();
    queue
        .add_actor(Box::new(attack_actor(entity, 1, 3)))
        .unwrap();
    queue
}

pub fn registry() -> ActorRegistry {
    ActorRegistry::standard()
}
