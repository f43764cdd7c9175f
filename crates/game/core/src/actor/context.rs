//! Per-call view of the engine collaborators an actor may touch.

use crate::env::{Roster, SelectionRegister, TileBoard};
use crate::state::{EntityId, Position, TurnState};

/// Closed set of touch events delivered to the active actor.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TouchEvent {
    /// The actor's own unit was touched.
    Tap,
    /// The player confirmed the current choice.
    Confirm,
    /// The player backed out of the current choice.
    Cancel,
}

/// Something an actor is asked to act upon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Tile(Position),
    Object(EntityId),
}

/// Outcome an actor reports for the runtime to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorEffect {
    /// `source` hit `target` for `amount` points.
    Damage {
        source: EntityId,
        target: EntityId,
        amount: u32,
    },
    /// `entity` was relocated on the board.
    Moved {
        entity: EntityId,
        from: Option<Position>,
        to: Position,
    },
}

/// Explicit dependencies handed to an actor for one call.
///
/// The context also collects what the actor wants to report back: emitted
/// [`ActorEffect`]s and a pending finish request, which the owning
/// [`crate::queue::ActorQueue`] consumes right after dispatch.
pub struct ActorContext<'a> {
    pub board: &'a mut dyn TileBoard,
    pub selection: &'a mut dyn SelectionRegister,
    pub roster: &'a dyn Roster,
    pub turn: &'a mut TurnState,
    effects: Vec<ActorEffect>,
    finish_requested: bool,
}

impl<'a> ActorContext<'a> {
    pub fn new(
        board: &'a mut dyn TileBoard,
        selection: &'a mut dyn SelectionRegister,
        roster: &'a dyn Roster,
        turn: &'a mut TurnState,
    ) -> Self {
        Self {
            board,
            selection,
            roster,
            turn,
            effects: Vec::new(),
            finish_requested: false,
        }
    }

    /// Signals that the running actor's reservation is complete.
    pub fn request_finish(&mut self) {
        self.finish_requested = true;
    }

    #[inline]
    pub fn is_finish_requested(&self) -> bool {
        self.finish_requested
    }

    /// Returns and clears the pending finish request.
    pub fn take_finish_request(&mut self) -> bool {
        core::mem::take(&mut self.finish_requested)
    }

    pub fn emit(&mut self, effect: ActorEffect) {
        self.effects.push(effect);
    }

    pub fn effects(&self) -> &[ActorEffect] {
        &self.effects
    }

    /// Drains the effects collected so far.
    pub fn take_effects(&mut self) -> Vec<ActorEffect> {
        core::mem::take(&mut self.effects)
    }
}
