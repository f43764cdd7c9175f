//! Move actor: walk the unit to a reachable empty tile.

use crate::actor::phase::{self, PhaseMachine};
use crate::actor::weights::keys;
use crate::actor::{
    ActTarget, Actor, ActorContext, ActorCore, ActorEffect, ActorError, ActorKind, ActorState,
    Interaction, ObjectCategory, Reaction, TouchEvent, Weights,
};
use crate::env::ChainRule;
use crate::state::{Position, TileState};
use state_machine::StateMachine;

/// Phases of the move protocol.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum MovePhase {
    Normal,
    Move,
    Done,
}

/// Relocates a unit up to `range` steps, around occupied tiles.
///
/// Only units carry it: the target must have [`ObjectCategory::UNIT`] and the
/// `actPoint` weight, which the queue charges when the move starts.
pub struct MoveActor {
    core: ActorCore,
    phases: PhaseMachine<MovePhase>,
}

impl MoveActor {
    const REQUIRED_WEIGHTS: &'static [&'static str] = &[keys::RANGE, keys::ACT_POINT];

    pub fn new() -> Self {
        Self {
            core: ActorCore::new(ActorKind::Move),
            phases: StateMachine::new(),
        }
    }

    pub fn boxed() -> Box<dyn Actor> {
        Box::new(Self::new())
    }

    pub fn range(&self) -> u32 {
        self.core.magnitude(keys::RANGE)
    }

    pub fn phase(&self) -> Option<MovePhase> {
        self.phases.current_key()
    }

    fn build_phases() -> Result<PhaseMachine<MovePhase>, ActorError> {
        let machine = PhaseMachine::<MovePhase>::builder()
            .state(MovePhase::Normal, Box::new(Idle))
            .state(MovePhase::Move, Box::new(Moving))
            .state(MovePhase::Done, Box::new(Arrived))
            .initial(MovePhase::Normal)
            .build()?;
        Ok(machine)
    }
}

impl Default for MoveActor {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for MoveActor {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    fn required_weights(&self) -> &'static [&'static str] {
        Self::REQUIRED_WEIGHTS
    }

    fn required_category(&self) -> ObjectCategory {
        ObjectCategory::UNIT_OBJECT
    }

    fn initialize(&mut self, target: Option<ActTarget>, weights: Weights) -> Result<(), ActorError> {
        let phases = Self::build_phases()?;
        self.core.initialize(
            target,
            weights,
            Self::REQUIRED_WEIGHTS,
            ObjectCategory::UNIT_OBJECT,
        )?;
        self.phases = phases;
        Ok(())
    }

    fn run(&mut self, cx: &mut ActorContext<'_>) -> Result<(), ActorError> {
        if self.phases.is_empty() {
            return Err(ActorError::NotInitialized(self.core.kind()));
        }
        self.core.mark_running(cx);
        phase::enter_phase(&mut self.phases, MovePhase::Normal, &self.core, cx)
    }

    fn reset(&mut self, cx: &mut ActorContext<'_>) -> Result<(), ActorError> {
        if self.phases.is_in(MovePhase::Move) {
            cx.board.change_all_tile_state(TileState::Normal);
        }
        if !self.phases.is_empty() {
            self.phases.change_state(MovePhase::Normal)?;
        }
        self.core.mark_dormant(cx);
        Ok(())
    }

    fn on_touch_event(
        &mut self,
        event: TouchEvent,
        cx: &mut ActorContext<'_>,
    ) -> Result<bool, ActorError> {
        phase::touch_phase(&mut self.phases, &self.core, event, cx)
    }

    fn interactive(
        &mut self,
        with: Interaction,
        cx: &mut ActorContext<'_>,
    ) -> Result<(), ActorError> {
        phase::interact_phase(&mut self.phases, &self.core, with, cx)
    }
}

// ============================================================================
// Phases
// ============================================================================

struct Idle;

impl ActorState<ActorCore> for Idle {
    type Phase = MovePhase;

    fn phase(&self) -> MovePhase {
        MovePhase::Normal
    }

    fn run(&self, owner: &ActorCore, cx: &mut ActorContext<'_>) {
        phase::all_tiles_to_normal(owner, cx);
    }

    fn on_touch_event(
        &self,
        _owner: &ActorCore,
        event: TouchEvent,
        cx: &ActorContext<'_>,
    ) -> Reaction<MovePhase> {
        match event {
            TouchEvent::Tap if !cx.selection.has_selection() => Reaction::to(MovePhase::Move),
            _ => Reaction::stay(false),
        }
    }
}

struct Moving;

impl Moving {
    fn step_to(&self, owner: &ActorCore, position: Position, cx: &mut ActorContext<'_>) -> bool {
        let Some(entity) = owner.target_entity() else {
            return false;
        };
        match cx.board.tile(position) {
            Some(tile) if tile.state == TileState::Active && tile.occupant.is_none() => {}
            _ => {
                tracing::debug!("{} cannot move to {}", entity, position);
                return false;
            }
        }

        match cx.board.relocate(entity, position) {
            Ok(from) => {
                tracing::debug!("{} moved {:?} -> {}", entity, from, position);
                cx.emit(ActorEffect::Moved {
                    entity,
                    from,
                    to: position,
                });
                true
            }
            Err(err) => {
                tracing::warn!("{} move to {} rejected: {}", entity, position, err);
                false
            }
        }
    }
}

impl ActorState<ActorCore> for Moving {
    type Phase = MovePhase;

    fn phase(&self) -> MovePhase {
        MovePhase::Move
    }

    fn run(&self, owner: &ActorCore, cx: &mut ActorContext<'_>) {
        let Some(entity) = owner.target_entity() else {
            return;
        };
        owner.select_target(cx);
        if let Some(origin) = cx.board.placed_tile(entity) {
            cx.board.change_all_tile_state(TileState::Deactive);
            cx.board.show_chain_active_tile(
                origin,
                owner.magnitude(keys::RANGE),
                ChainRule::AvoidOccupied,
            );
            // The unit's own tile is reachable but not a destination.
            cx.board.set_tile_state(origin, TileState::Deactive);
        }
    }

    fn on_touch_event(
        &self,
        owner: &ActorCore,
        event: TouchEvent,
        cx: &ActorContext<'_>,
    ) -> Reaction<MovePhase> {
        match event {
            TouchEvent::Tap if owner.is_target_selected(cx) => Reaction::to(MovePhase::Normal),
            TouchEvent::Cancel => Reaction::to(MovePhase::Normal),
            _ => Reaction::stay(false),
        }
    }

    fn interactive(
        &self,
        owner: &ActorCore,
        with: Interaction,
        cx: &mut ActorContext<'_>,
    ) -> Option<MovePhase> {
        match with {
            Interaction::Tile(position) if self.step_to(owner, position, cx) => {
                Some(MovePhase::Done)
            }
            _ => None,
        }
    }
}

struct Arrived;

impl ActorState<ActorCore> for Arrived {
    type Phase = MovePhase;

    fn phase(&self) -> MovePhase {
        MovePhase::Done
    }

    fn run(&self, owner: &ActorCore, cx: &mut ActorContext<'_>) {
        phase::all_tiles_to_normal(owner, cx);
        cx.request_finish();
    }

    fn on_touch_event(
        &self,
        _owner: &ActorCore,
        _event: TouchEvent,
        _cx: &ActorContext<'_>,
    ) -> Reaction<MovePhase> {
        Reaction::stay(true)
    }
}
