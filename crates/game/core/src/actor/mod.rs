//! Reservable unit behaviours.
//!
//! An [`Actor`] is one weighted behaviour attached to a placed object (move,
//! attack, ...). Actors are built once per object from data through the
//! [`ActorRegistry`], reused across reservations, and driven by the object's
//! [`crate::queue::ActorQueue`].
mod base;
mod context;
mod error;
mod kind;
mod phase;
mod registry;
mod target;
pub mod kinds;
pub mod weights;

pub use base::ActorCore;
pub use context::{ActorContext, ActorEffect, Interaction, TouchEvent};
pub use error::{ActorError, ConfigurationError};
pub use kind::ActorKind;
pub use kinds::{AttackActor, AttackPhase, MoveActor, MovePhase};
pub use phase::{ActorState, PhaseMachine, Reaction};
pub use registry::{ActorFactory, ActorRegistry};
pub use target::{ActTarget, ObjectCategory};
pub use weights::Weights;

/// A reservable, weighted unit of behaviour.
///
/// Implementors embed an [`ActorCore`] and declare which weights and target
/// capabilities they need; the provided methods cover the lifecycle every
/// variant shares. Variants override [`Actor::run`], [`Actor::reset`],
/// [`Actor::on_touch_event`] and [`Actor::interactive`] to plug in their own
/// phases.
pub trait Actor: Send + Sync {
    fn core(&self) -> &ActorCore;

    fn core_mut(&mut self) -> &mut ActorCore;

    /// Weight keys that must be configured before first use.
    fn required_weights(&self) -> &'static [&'static str] {
        &[]
    }

    /// Capabilities the target object must have.
    fn required_category(&self) -> ObjectCategory {
        ObjectCategory::PLACEABLE
    }

    fn kind(&self) -> ActorKind {
        self.core().kind()
    }

    fn is_running(&self) -> bool {
        self.core().is_running()
    }

    /// Returns the weight for `key`; unknown keys read as 0.
    fn weight(&self, key: &str) -> i32 {
        self.core().weight(key)
    }

    fn check_required_weights(&self) -> Result<(), ConfigurationError> {
        self.core().check_required(self.required_weights())
    }

    /// Binds the target and weights and leaves the actor dormant.
    ///
    /// # Errors
    ///
    /// Fails with a [`ConfigurationError`] for a missing target, a target of
    /// the wrong category, or a missing required weight.
    fn initialize(&mut self, target: Option<ActTarget>, weights: Weights) -> Result<(), ActorError> {
        let required = self.required_weights();
        let category = self.required_category();
        self.core_mut()
            .initialize(target, weights, required, category)?;
        Ok(())
    }

    /// [`Actor::initialize`] from parallel name / value lists.
    fn initialize_from_lists(
        &mut self,
        target: Option<ActTarget>,
        weight_names: &[String],
        weight_values: &[i32],
    ) -> Result<(), ActorError> {
        self.initialize(target, Weights::from_lists(weight_names, weight_values))
    }

    /// Marks the actor running and selects its target.
    fn run(&mut self, cx: &mut ActorContext<'_>) -> Result<(), ActorError> {
        self.core_mut().mark_running(cx);
        Ok(())
    }

    /// Returns the actor to its dormant, reusable state.
    fn reset(&mut self, cx: &mut ActorContext<'_>) -> Result<(), ActorError> {
        self.core_mut().mark_dormant(cx);
        Ok(())
    }

    /// Handles a touch on the target object. Returns `true` when the event is
    /// consumed and must not propagate further.
    fn on_touch_event(
        &mut self,
        _event: TouchEvent,
        _cx: &mut ActorContext<'_>,
    ) -> Result<bool, ActorError> {
        Ok(true)
    }

    /// Acts upon another tile or object.
    fn interactive(
        &mut self,
        _with: Interaction,
        _cx: &mut ActorContext<'_>,
    ) -> Result<(), ActorError> {
        Ok(())
    }
}

impl core::fmt::Debug for dyn Actor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Actor")
            .field("kind", &self.kind())
            .field("running", &self.is_running())
            .field("target", &self.core().target_entity())
            .finish()
    }
}
