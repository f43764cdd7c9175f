//! Attack actor: choose a hostile occupant within range and strike it.

use crate::actor::phase::{self, PhaseMachine};
use crate::actor::weights::keys;
use crate::actor::{
    ActTarget, Actor, ActorContext, ActorCore, ActorEffect, ActorError, ActorKind, ActorState,
    Interaction, Reaction, TouchEvent, Weights,
};
use crate::env::ChainRule;
use crate::state::{Position, TileState};
use state_machine::StateMachine;

/// Phases of the attack protocol.
///
/// `Normal → Attack → Normal` cycles while the player toggles the unit;
/// `Attack → Done` ends the reservation.
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
pub enum AttackPhase {
    Normal,
    Attack,
    Done,
}

/// Strikes hostile occupants within the `range` weight for `damage` points.
pub struct AttackActor {
    core: ActorCore,
    phases: PhaseMachine<AttackPhase>,
}

impl AttackActor {
    const REQUIRED_WEIGHTS: &'static [&'static str] = &[keys::RANGE, keys::DAMAGE];

    pub fn new() -> Self {
        Self {
            core: ActorCore::new(ActorKind::Attack),
            phases: StateMachine::new(),
        }
    }

    pub fn boxed() -> Box<dyn Actor> {
        Box::new(Self::new())
    }

    pub fn range(&self) -> u32 {
        self.core.magnitude(keys::RANGE)
    }

    pub fn damage(&self) -> u32 {
        self.core.magnitude(keys::DAMAGE)
    }

    /// Current phase, `None` before initialization.
    pub fn phase(&self) -> Option<AttackPhase> {
        self.phases.current_key()
    }

    /// Registered phase states, for identity checks.
    pub fn phases(&self) -> &PhaseMachine<AttackPhase> {
        &self.phases
    }

    fn build_phases() -> Result<PhaseMachine<AttackPhase>, ActorError> {
        let machine = PhaseMachine::<AttackPhase>::builder()
            .state(AttackPhase::Normal, Box::new(Normal))
            .state(AttackPhase::Attack, Box::new(Attacking))
            .state(AttackPhase::Done, Box::new(Done))
            .initial(AttackPhase::Normal)
            .build()?;
        Ok(machine)
    }
}

impl Default for AttackActor {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for AttackActor {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    fn required_weights(&self) -> &'static [&'static str] {
        Self::REQUIRED_WEIGHTS
    }

    fn initialize(&mut self, target: Option<ActTarget>, weights: Weights) -> Result<(), ActorError> {
        let category = self.required_category();
        let phases = Self::build_phases()?;
        self.core
            .initialize(target, weights, Self::REQUIRED_WEIGHTS, category)?;
        self.phases = phases;
        Ok(())
    }

    /// Starts a fresh reservation cycle in the `Normal` phase.
    fn run(&mut self, cx: &mut ActorContext<'_>) -> Result<(), ActorError> {
        if self.phases.is_empty() {
            return Err(ActorError::NotInitialized(self.core.kind()));
        }
        self.core.mark_running(cx);
        phase::enter_phase(&mut self.phases, AttackPhase::Normal, &self.core, cx)
    }

    fn reset(&mut self, cx: &mut ActorContext<'_>) -> Result<(), ActorError> {
        if self.phases.is_in(AttackPhase::Attack) {
            cx.board.change_all_tile_state(TileState::Normal);
        }
        if !self.phases.is_empty() {
            self.phases.change_state(AttackPhase::Normal)?;
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

struct Normal;

impl ActorState<ActorCore> for Normal {
    type Phase = AttackPhase;

    fn phase(&self) -> AttackPhase {
        AttackPhase::Normal
    }

    fn run(&self, owner: &ActorCore, cx: &mut ActorContext<'_>) {
        phase::all_tiles_to_normal(owner, cx);
    }

    fn on_touch_event(
        &self,
        _owner: &ActorCore,
        event: TouchEvent,
        cx: &ActorContext<'_>,
    ) -> Reaction<AttackPhase> {
        match event {
            TouchEvent::Tap if !cx.selection.has_selection() => Reaction::to(AttackPhase::Attack),
            _ => Reaction::stay(false),
        }
    }
}

struct Attacking;

impl Attacking {
    fn strike(&self, owner: &ActorCore, position: Position, cx: &mut ActorContext<'_>) {
        let Some(source) = owner.target_entity() else {
            return;
        };
        if cx.board.tile_state(position) != Some(TileState::Active) {
            tracing::debug!("{} attack at {} ignored: out of range", source, position);
            return;
        }
        let Some(target) = cx.board.occupant(position) else {
            return;
        };
        if !cx.roster.is_hostile(source, target) {
            tracing::debug!("{} attack at {} ignored: {} is not hostile", source, position, target);
            return;
        }

        let amount = owner.magnitude(keys::DAMAGE);
        tracing::debug!("{} strikes {} for {}", source, target, amount);
        cx.emit(ActorEffect::Damage {
            source,
            target,
            amount,
        });
    }
}

impl ActorState<ActorCore> for Attacking {
    type Phase = AttackPhase;

    fn phase(&self) -> AttackPhase {
        AttackPhase::Attack
    }

    fn run(&self, owner: &ActorCore, cx: &mut ActorContext<'_>) {
        let Some(entity) = owner.target_entity() else {
            return;
        };
        owner.select_target(cx);
        if let Some(origin) = cx.board.placed_tile(entity) {
            cx.board.change_all_tile_state(TileState::Deactive);
            cx.board
                .show_chain_active_tile(origin, owner.magnitude(keys::RANGE), ChainRule::Open);
        }
    }

    fn on_touch_event(
        &self,
        owner: &ActorCore,
        event: TouchEvent,
        cx: &ActorContext<'_>,
    ) -> Reaction<AttackPhase> {
        match event {
            TouchEvent::Tap if owner.is_target_selected(cx) => Reaction::to(AttackPhase::Normal),
            TouchEvent::Cancel => Reaction::to(AttackPhase::Normal),
            TouchEvent::Confirm => Reaction::to(AttackPhase::Done),
            _ => Reaction::stay(false),
        }
    }

    fn interactive(
        &self,
        owner: &ActorCore,
        with: Interaction,
        cx: &mut ActorContext<'_>,
    ) -> Option<AttackPhase> {
        let position = match with {
            Interaction::Tile(position) => Some(position),
            Interaction::Object(entity) => cx.board.placed_tile(entity),
        };
        if let Some(position) = position {
            self.strike(owner, position, cx);
        }
        None
    }
}

struct Done;

impl ActorState<ActorCore> for Done {
    type Phase = AttackPhase;

    fn phase(&self) -> AttackPhase {
        AttackPhase::Done
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
    ) -> Reaction<AttackPhase> {
        Reaction::stay(true)
    }
}
