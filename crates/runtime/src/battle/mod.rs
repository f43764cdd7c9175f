//! Battle session.
//!
//! [`Battle`] owns the tile grid, the selection register, the turn and every
//! unit with its [`ActorQueue`]. It is the engine loop of the tactics rules:
//! it routes touches to the right queue, ticks the queues of the team in
//! turn and applies the effects actors report.
mod event;
mod unit;

pub use event::BattleEvent;
pub use unit::Unit;

use std::collections::BTreeMap;

use game_content::MapRecord;
use game_core::{
    ActorContext, ActorEffect, ActorKind, ActorQueue, ActorRegistry, EntityId, GameConfig,
    Interaction, Position, QueueError, SelectionRegister, Team, TileBoard, TileState, TouchEvent,
    TurnState, UnitCatalog, UnitRecord,
};

use crate::board::{Selection, TileGrid};
use crate::error::{Result, RuntimeError};

pub struct Battle {
    config: GameConfig,
    registry: ActorRegistry,
    grid: TileGrid,
    selection: Selection,
    roster: BTreeMap<EntityId, Team>,
    turn: TurnState,
    units: BTreeMap<EntityId, Unit>,
    next_id: u32,
    events: Vec<BattleEvent>,
}

impl Battle {
    /// Creates an empty battle on `grid` using the standard actor registry.
    pub fn new(config: GameConfig, grid: TileGrid) -> Self {
        let turn = TurnState::new(config.first_team, config.turn_act_points);
        Self {
            config,
            registry: ActorRegistry::standard(),
            grid,
            selection: Selection::new(),
            roster: BTreeMap::new(),
            turn,
            units: BTreeMap::new(),
            next_id: 1,
            events: Vec::new(),
        }
    }

    pub fn with_registry(mut self, registry: ActorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Sets up a battle from a map and spawns its placements.
    ///
    /// # Errors
    ///
    /// Fails if a placement names a unit number missing from `catalog`, or a
    /// unit's actor records do not build.
    pub fn from_map<C>(config: GameConfig, map: &MapRecord, catalog: &C) -> Result<Self>
    where
        C: UnitCatalog + ?Sized,
    {
        let mut battle = Self::new(config, TileGrid::from_map(map));
        for place in &map.placements {
            let record = catalog
                .unit(place.unit_no)
                .ok_or(RuntimeError::UnknownUnitNo(place.unit_no))?;
            battle.spawn(record, place.position)?;
        }
        Ok(battle)
    }

    // ========================================================================
    // Setup
    // ========================================================================

    /// Places a new unit built from `record` at `position`.
    pub fn spawn(&mut self, record: &UnitRecord, position: Position) -> Result<EntityId> {
        let id = EntityId(self.next_id);
        let unit = Unit::from_record(id, record, &self.registry)?;
        self.grid.attach(id, position)?;
        self.next_id += 1;

        tracing::info!(
            "spawned {} '{}' ({}) at {} with {:?}",
            id,
            unit.name,
            unit.team,
            position,
            unit.queue.catalogue_kinds().collect::<Vec<_>>()
        );
        self.roster.insert(id, unit.team);
        self.units.insert(id, unit);
        self.events.push(BattleEvent::Spawned { unit: id, position });
        Ok(id)
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Reserves an actor on a unit of the team in turn.
    pub fn reserve(&mut self, unit: EntityId, kind: ActorKind) -> Result<()> {
        let team = self.turn.team;
        let entry = self
            .units
            .get_mut(&unit)
            .ok_or(RuntimeError::UnknownUnit(unit))?;
        if entry.team != team {
            return Err(RuntimeError::NotUnitsTurn { unit, kind });
        }
        entry.queue.reserve_actor(kind)?;
        Ok(())
    }

    /// Starts the head actor of every queue of the team in turn. Returns how
    /// many actors started.
    pub fn tick(&mut self) -> Result<usize> {
        let team = self.turn.team;
        let ids: Vec<EntityId> = self
            .units
            .values()
            .filter(|unit| unit.team == team)
            .map(|unit| unit.id)
            .collect();

        let mut started = 0;
        for id in ids {
            if self.dispatch(id, |queue, cx| queue.start_actor(cx))? {
                started += 1;
                if let Some(kind) = self.units.get(&id).and_then(|unit| unit.queue.head_kind()) {
                    self.events.push(BattleEvent::ActorStarted { unit: id, kind });
                }
            }
        }
        Ok(started)
    }

    /// Touches a unit.
    ///
    /// While another unit with a running actor is selected, the touch is an
    /// interaction of that actor with `unit`. Otherwise `event` goes to the
    /// touched unit's own queue. Returns whether anything consumed it.
    pub fn touch_unit(&mut self, unit: EntityId, event: TouchEvent) -> Result<bool> {
        if !self.units.contains_key(&unit) {
            return Err(RuntimeError::UnknownUnit(unit));
        }
        if let Some(selected) = self.selection.selected().filter(|selected| *selected != unit)
            && self.is_running(selected)
        {
            return self.interact(selected, Interaction::Object(unit));
        }
        self.dispatch(unit, |queue, cx| queue.on_touch_event(event, cx))
    }

    /// Touches a tile: the selected unit's running actor interacts with it.
    ///
    /// Returns `false` when nothing is selected or the selected unit has no
    /// running actor.
    pub fn touch_tile(&mut self, position: Position) -> Result<bool> {
        let Some(selected) = self.selection.selected() else {
            tracing::debug!("tile {} touched with nothing selected", position);
            return Ok(false);
        };
        if !self.units.contains_key(&selected) {
            return Ok(false);
        }
        self.interact(selected, Interaction::Tile(position))
    }

    /// Forwards an interaction to the running actor of `unit`.
    pub fn interact(&mut self, unit: EntityId, with: Interaction) -> Result<bool> {
        self.dispatch(unit, |queue, cx| queue.interactive(with, cx))
    }

    /// Cancels running actors of the team in turn and hands the turn over.
    ///
    /// Cancelled actors get their action points back; reservations that never
    /// started stay queued for the team's next turn.
    pub fn end_turn(&mut self) -> Result<()> {
        let team = self.turn.team;
        for unit in self.units.values_mut().filter(|unit| unit.team == team) {
            let running = unit
                .queue
                .head_actor()
                .is_some_and(|actor| actor.is_running());
            if running {
                let mut cx = ActorContext::new(
                    &mut self.grid,
                    &mut self.selection,
                    &self.roster,
                    &mut self.turn,
                );
                unit.queue.cancel_actor(&mut cx)?;
            }
        }
        self.selection.deselect();
        self.grid.change_all_tile_state(TileState::Normal);

        self.turn
            .advance(team.opponent(), self.config.turn_act_points);
        tracing::info!(
            "turn {}: {} with {} action points",
            self.turn.number,
            self.turn.team,
            self.turn.act_points
        );
        self.events.push(BattleEvent::TurnStarted {
            team: self.turn.team,
            number: self.turn.number,
            act_points: self.turn.act_points,
        });
        Ok(())
    }

    /// Runs `f` against the queue of `unit` with a fresh actor context, then
    /// records a finished head and applies the reported effects.
    fn dispatch<R>(
        &mut self,
        unit: EntityId,
        f: impl FnOnce(&mut ActorQueue, &mut ActorContext<'_>) -> std::result::Result<R, QueueError>,
    ) -> Result<R> {
        let entry = self
            .units
            .get_mut(&unit)
            .ok_or(RuntimeError::UnknownUnit(unit))?;
        let head = entry.queue.head_kind();
        let before = entry.queue.len();

        let mut cx = ActorContext::new(
            &mut self.grid,
            &mut self.selection,
            &self.roster,
            &mut self.turn,
        );
        let outcome = f(&mut entry.queue, &mut cx)?;
        let effects = cx.take_effects();

        if entry.queue.len() < before
            && let Some(kind) = head
        {
            tracing::debug!("{} finished {} actor", unit, kind);
            self.events.push(BattleEvent::ActorFinished { unit, kind });
        }
        self.apply_effects(effects);
        Ok(outcome)
    }

    fn apply_effects(&mut self, effects: Vec<ActorEffect>) {
        for effect in effects {
            match effect {
                ActorEffect::Moved { entity, from, to } => {
                    self.events.push(BattleEvent::Moved {
                        unit: entity,
                        from,
                        to,
                    });
                }
                ActorEffect::Damage {
                    source,
                    target,
                    amount,
                } => {
                    let Some(unit) = self.units.get_mut(&target) else {
                        tracing::warn!("{} hit {}, which is no longer on the field", source, target);
                        continue;
                    };
                    let remaining = unit.take_damage(amount);
                    let defeated = unit.is_defeated();
                    tracing::info!(
                        "{} hits {} for {} ({} hp left)",
                        source,
                        target,
                        amount,
                        remaining
                    );
                    self.events.push(BattleEvent::Damaged {
                        source,
                        target,
                        amount,
                        remaining,
                    });
                    if defeated {
                        self.remove_unit(target);
                    }
                }
            }
        }
    }

    fn remove_unit(&mut self, id: EntityId) {
        let Some(unit) = self.units.remove(&id) else {
            return;
        };
        self.roster.remove(&id);
        self.grid.detach(id);
        if self.selection.is_selected(id) {
            self.selection.deselect();
        }
        tracing::info!("{} '{}' defeated", id, unit.name);
        self.events.push(BattleEvent::Defeated { unit: id });
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn selected(&self) -> Option<EntityId> {
        self.selection.selected()
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn unit(&self, id: EntityId) -> Option<&Unit> {
        self.units.get(&id)
    }

    /// Units in spawn order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.grid
            .occupant(position)
            .and_then(|id| self.units.get(&id))
    }

    /// Returns true if `unit`'s head actor is running.
    pub fn is_running(&self, unit: EntityId) -> bool {
        self.units
            .get(&unit)
            .and_then(|unit| unit.queue.head_actor())
            .is_some_and(|actor| actor.is_running())
    }

    /// The only team with units left, ignoring neutral units.
    pub fn winner(&self) -> Option<Team> {
        let mut teams = self
            .units
            .values()
            .map(|unit| unit.team)
            .filter(|team| *team != Team::Neutral);
        let first = teams.next()?;
        teams.all(|team| team == first).then_some(first)
    }

    /// Drains events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }
}

impl std::fmt::Debug for Battle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Battle")
            .field("turn", &self.turn)
            .field("selection", &self.selection)
            .field("units", &self.units.len())
            .finish()
    }
}
