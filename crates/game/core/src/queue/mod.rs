//! Per-object FIFO of reserved actors.
//!
//! An [`ActorQueue`] owns the catalogue of actors one placed object can use
//! and the ordered list of reservations against it. The head reservation is
//! the one that runs and receives touch events; when it asks to finish, the
//! queue pops it and waits for the next [`ActorQueue::start_actor`].
//!
//! # Queue states
//!
//! - **Idle**: no reservations
//! - **Active**: a head reservation exists (running or about to run)
//!
//! Reserving into an idle queue makes it active; ending or cancelling the last
//! reservation makes it idle again. Reserving into an active queue only
//! appends.
mod error;

use std::collections::VecDeque;

use arrayvec::ArrayVec;

pub use error::QueueError;

use crate::actor::{
    ActTarget, Actor, ActorContext, ActorKind, ActorRegistry, Interaction, TouchEvent,
};
use crate::config::GameConfig;
use crate::env::ActorRecord;
use crate::state::EntityId;

type Catalogue = ArrayVec<Box<dyn Actor>, { GameConfig::MAX_ACTORS_PER_UNIT }>;

/// How a reservation left the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Completion {
    Completed,
    Cancelled,
}

/// Catalogue of available actors plus the FIFO of reservations.
///
/// Reservations refer to catalogue entries by kind, so every queued actor is
/// always one the catalogue owns.
pub struct ActorQueue {
    owner: EntityId,
    catalogue: Catalogue,
    queue: VecDeque<ActorKind>,
}

impl ActorQueue {
    pub fn new(owner: EntityId) -> Self {
        Self {
            owner,
            catalogue: ArrayVec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Builds and registers every actor described by `records`.
    ///
    /// # Errors
    ///
    /// Fails on the first record the registry cannot build or the catalogue
    /// rejects.
    pub fn from_records(
        target: ActTarget,
        records: &[ActorRecord],
        registry: &ActorRegistry,
    ) -> Result<Self, QueueError> {
        let mut queue = Self::new(target.entity);
        for record in records {
            queue.add_actor(registry.build(record, target)?)?;
        }
        Ok(queue)
    }

    #[inline]
    pub fn owner(&self) -> EntityId {
        self.owner
    }

    // ========================================================================
    // Catalogue
    // ========================================================================

    /// Adds an actor to the catalogue.
    ///
    /// # Errors
    ///
    /// - [`QueueError::Configuration`] if a required weight is missing
    /// - [`QueueError::ForeignActor`] if the actor targets another object
    /// - [`QueueError::DuplicateActor`] if the kind is already present
    /// - [`QueueError::CatalogueFull`] past [`GameConfig::MAX_ACTORS_PER_UNIT`]
    pub fn add_actor(&mut self, actor: Box<dyn Actor>) -> Result<(), QueueError> {
        actor.check_required_weights()?;

        let kind = actor.kind();
        let target = actor.core().target_entity();
        if target != Some(self.owner) {
            return Err(QueueError::ForeignActor {
                kind,
                owner: self.owner,
                target,
            });
        }
        if self.slot(kind).is_some() {
            return Err(QueueError::DuplicateActor(kind));
        }
        self.catalogue
            .try_push(actor)
            .map_err(|_| QueueError::CatalogueFull(GameConfig::MAX_ACTORS_PER_UNIT))?;

        tracing::debug!("{}: {} actor added to catalogue", self.owner, kind);
        Ok(())
    }

    pub fn actor(&self, kind: ActorKind) -> Option<&dyn Actor> {
        self.slot(kind).map(|index| &*self.catalogue[index])
    }

    pub fn actor_mut(&mut self, kind: ActorKind) -> Option<&mut (dyn Actor + 'static)> {
        self.slot(kind).map(|index| &mut *self.catalogue[index])
    }

    /// Catalogue kinds in insertion order.
    pub fn catalogue_kinds(&self) -> impl Iterator<Item = ActorKind> + '_ {
        self.catalogue.iter().map(|actor| actor.kind())
    }

    fn slot(&self, kind: ActorKind) -> Option<usize> {
        self.catalogue.iter().position(|actor| actor.kind() == kind)
    }

    // ========================================================================
    // Reservations
    // ========================================================================

    /// Appends a reservation of `kind` to the tail.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::UnknownActorKind`] if the catalogue has no such
    /// actor; the queue is left unchanged.
    pub fn reserve_actor(&mut self, kind: ActorKind) -> Result<(), QueueError> {
        if self.slot(kind).is_none() {
            return Err(QueueError::UnknownActorKind(kind));
        }
        self.queue.push_back(kind);
        tracing::debug!(
            "{}: reserved {} actor (queue length {})",
            self.owner,
            kind,
            self.queue.len()
        );
        Ok(())
    }

    /// Runs the head actor if it is not running yet.
    ///
    /// The head's `actPoint` weight is taken from the turn's pool when it
    /// starts, so every actor running at once has been paid for. A head the
    /// pool cannot cover is not started. Returns `true` if an actor was
    /// started by this call.
    pub fn start_actor(&mut self, cx: &mut ActorContext<'_>) -> Result<bool, QueueError> {
        let owner = self.owner;
        let Some(actor) = self.head_actor_mut() else {
            return Ok(false);
        };
        if actor.is_running() {
            return Ok(false);
        }

        let cost = actor.core().act_point_cost();
        if let Err(err) = cx.turn.spend(cost) {
            tracing::warn!("{}: {} actor not started: {}", owner, actor.kind(), err);
            return Ok(false);
        }

        if let Err(err) = actor.run(cx) {
            cx.turn.refund(cost);
            return Err(err.into());
        }
        tracing::debug!(
            "{}: {} actor started ({} action points left)",
            owner,
            actor.kind(),
            cx.turn.act_points
        );
        Ok(true)
    }

    /// Resets and pops the head reservation, keeping the action points it
    /// paid when it started. The next head is not started.
    pub fn end_actor(&mut self, cx: &mut ActorContext<'_>) -> Result<Option<ActorKind>, QueueError> {
        self.pop_head(cx, Completion::Completed)
    }

    /// Resets and pops the head reservation, refunding the action points a
    /// running head paid when it started.
    ///
    /// The queue itself ends up exactly as after [`ActorQueue::end_actor`].
    pub fn cancel_actor(
        &mut self,
        cx: &mut ActorContext<'_>,
    ) -> Result<Option<ActorKind>, QueueError> {
        self.pop_head(cx, Completion::Cancelled)
    }

    /// Cancels every reservation, head first.
    pub fn clear(&mut self, cx: &mut ActorContext<'_>) -> Result<(), QueueError> {
        while self.cancel_actor(cx)?.is_some() {}
        Ok(())
    }

    fn pop_head(
        &mut self,
        cx: &mut ActorContext<'_>,
        completion: Completion,
    ) -> Result<Option<ActorKind>, QueueError> {
        let Some(kind) = self.queue.front().copied() else {
            return Ok(None);
        };
        let owner = self.owner;
        let actor = self
            .actor_mut(kind)
            .ok_or(QueueError::UnknownActorKind(kind))?;

        let was_running = actor.is_running();
        let cost = actor.core().act_point_cost();
        actor.reset(cx)?;
        self.queue.pop_front();

        if was_running && completion == Completion::Cancelled {
            cx.turn.refund(cost);
        }
        tracing::debug!(
            "{}: {} actor {:?} ({} left in queue, {} action points left)",
            owner,
            kind,
            completion,
            self.queue.len(),
            cx.turn.act_points
        );
        Ok(Some(kind))
    }

    // ========================================================================
    // Event dispatch
    // ========================================================================

    /// Delivers a touch on the owner to the running head actor.
    ///
    /// Returns whether the event was consumed; an idle queue or a head that
    /// has not started consumes nothing. A finish requested during dispatch
    /// ends the head reservation before returning.
    pub fn on_touch_event(
        &mut self,
        event: TouchEvent,
        cx: &mut ActorContext<'_>,
    ) -> Result<bool, QueueError> {
        let Some(actor) = self.running_head_mut() else {
            return Ok(false);
        };
        let consumed = actor.on_touch_event(event, cx)?;
        self.settle(cx)?;
        Ok(consumed)
    }

    /// Forwards an interaction to the running head actor.
    ///
    /// Returns `false` when no actor was running to receive it.
    pub fn interactive(
        &mut self,
        with: Interaction,
        cx: &mut ActorContext<'_>,
    ) -> Result<bool, QueueError> {
        let Some(actor) = self.running_head_mut() else {
            return Ok(false);
        };
        actor.interactive(with, cx)?;
        self.settle(cx)?;
        Ok(true)
    }

    fn settle(&mut self, cx: &mut ActorContext<'_>) -> Result<(), QueueError> {
        if cx.take_finish_request() {
            self.end_actor(cx)?;
        }
        Ok(())
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns true if exactly one reservation is pending.
    pub fn is_last_actor(&self) -> bool {
        self.queue.len() == 1
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn head_kind(&self) -> Option<ActorKind> {
        self.queue.front().copied()
    }

    pub fn head_actor(&self) -> Option<&dyn Actor> {
        self.head_kind().and_then(|kind| self.actor(kind))
    }

    pub fn head_actor_mut(&mut self) -> Option<&mut (dyn Actor + 'static)> {
        let kind = self.head_kind()?;
        self.actor_mut(kind)
    }

    fn running_head_mut(&mut self) -> Option<&mut (dyn Actor + 'static)> {
        self.head_actor_mut().filter(|actor| actor.is_running())
    }

    /// Kinds of the pending reservations, head first.
    pub fn queued_actor_kinds(&self) -> impl Iterator<Item = ActorKind> + Clone + '_ {
        self.queue.iter().copied()
    }
}

impl core::fmt::Debug for ActorQueue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActorQueue")
            .field("owner", &self.owner)
            .field("catalogue", &self.catalogue_kinds().collect::<Vec<_>>())
            .field("queue", &self.queue)
            .finish()
    }
}
