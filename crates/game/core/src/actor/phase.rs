//! Generic base for actor-local phase states.
//!
//! A phased actor keeps one [`ActorState`] object per phase in a
//! [`PhaseMachine`]. States hold no back-reference: the owning actor passes
//! its [`ActorCore`] into every call, which keeps each state bound to exactly
//! the actor that invokes it.

use state_machine::{StateKey, StateMachine};

use crate::actor::{ActorContext, ActorCore, ActorError, Interaction, TouchEvent};

/// What a phase decided in response to an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reaction<P> {
    /// `true` stops propagation of the event.
    pub consumed: bool,
    /// Phase to enter next, if any.
    pub next: Option<P>,
}

impl<P> Reaction<P> {
    /// Stay in the current phase.
    pub fn stay(consumed: bool) -> Self {
        Self {
            consumed,
            next: None,
        }
    }

    /// Enter `next`; the event keeps propagating.
    pub fn to(next: P) -> Self {
        Self {
            consumed: false,
            next: Some(next),
        }
    }
}

/// One phase of an actor's interaction protocol, owned by `O`.
pub trait ActorState<O: ?Sized>: Send + Sync {
    type Phase: StateKey;

    fn phase(&self) -> Self::Phase;

    /// Side effects of entering this phase.
    fn run(&self, owner: &O, cx: &mut ActorContext<'_>);

    /// Decides how a touch on the owner's object is handled.
    fn on_touch_event(
        &self,
        owner: &O,
        event: TouchEvent,
        cx: &ActorContext<'_>,
    ) -> Reaction<Self::Phase>;

    /// Acts upon another tile or object; may request a phase change.
    fn interactive(
        &self,
        _owner: &O,
        _with: Interaction,
        _cx: &mut ActorContext<'_>,
    ) -> Option<Self::Phase> {
        None
    }
}

/// Phase states of an actor built on [`ActorCore`].
pub type PhaseMachine<P> = StateMachine<P, dyn ActorState<ActorCore, Phase = P>>;

/// Switches to `next` and runs its entry side effects.
pub(crate) fn enter_phase<P: StateKey + 'static>(
    machine: &mut PhaseMachine<P>,
    next: P,
    core: &ActorCore,
    cx: &mut ActorContext<'_>,
) -> Result<(), ActorError> {
    let previous = machine.change_state(next)?;
    tracing::debug!(
        "{} actor of {:?}: {:?} -> {}",
        core.kind(),
        core.target_entity(),
        previous,
        next
    );
    if let Some(state) = machine.current_state() {
        state.run(core, cx);
    }
    Ok(())
}

/// Feeds a touch event to the current phase and follows its reaction.
pub(crate) fn touch_phase<P: StateKey + 'static>(
    machine: &mut PhaseMachine<P>,
    core: &ActorCore,
    event: TouchEvent,
    cx: &mut ActorContext<'_>,
) -> Result<bool, ActorError> {
    let state = machine
        .current_state()
        .ok_or(ActorError::NotInitialized(core.kind()))?;
    let reaction = state.on_touch_event(core, event, cx);
    if let Some(next) = reaction.next {
        enter_phase(machine, next, core, cx)?;
    }
    Ok(reaction.consumed)
}

/// Forwards an interaction to the current phase and follows its request.
pub(crate) fn interact_phase<P: StateKey + 'static>(
    machine: &mut PhaseMachine<P>,
    core: &ActorCore,
    with: Interaction,
    cx: &mut ActorContext<'_>,
) -> Result<(), ActorError> {
    let state = machine
        .current_state()
        .ok_or(ActorError::NotInitialized(core.kind()))?;
    if let Some(next) = state.interactive(core, with, cx) {
        enter_phase(machine, next, core, cx)?;
    }
    Ok(())
}

/// Deselects the owner and returns every tile to normal.
pub(crate) fn all_tiles_to_normal(core: &ActorCore, cx: &mut ActorContext<'_>) {
    if core.target().is_some() {
        cx.selection.deselect();
        cx.board.change_all_tile_state(crate::state::TileState::Normal);
    }
}
