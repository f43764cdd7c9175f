//! Concrete actor variants.
//!
//! Each variant follows the same shape: a dormant `Normal` phase, an active
//! phase that highlights tiles within the `range` weight and resolves
//! interactions, and a terminal `Done` phase that clears highlights and asks
//! the queue to finish the reservation.
mod attack;
mod movement;

pub use attack::{AttackActor, AttackPhase};
pub use movement::{MoveActor, MovePhase};
