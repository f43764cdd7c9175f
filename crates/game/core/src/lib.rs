//! Actor queueing rules for grid tactics units.
//!
//! `game-core` defines how a unit's reservable behaviours ([`actor::Actor`])
//! are configured from weights, driven through their phase machines, and
//! queued per unit ([`queue::ActorQueue`]). Engine-owned collaborators such as
//! the tile board, the global selection and unit allegiance are reached
//! through the traits in [`env`], so the rules run unchanged against the
//! runtime's grid or a test double.
pub mod actor;
pub mod config;
pub mod env;
pub mod error;
pub mod queue;
pub mod state;

pub use actor::{
    ActTarget, Actor, ActorContext, ActorCore, ActorEffect, ActorError, ActorFactory, ActorKind,
    ActorRegistry, ActorState, AttackActor, AttackPhase, ConfigurationError, Interaction,
    MoveActor, MovePhase, ObjectCategory, Reaction, TouchEvent, Weights,
};
pub use config::GameConfig;
pub use env::{
    ActorRecord, BoardError, ChainRule, MapDimensions, PlaceInfo, Roster, SelectionRegister,
    TileBoard, TileView, UnitCatalog, UnitRecord,
};
pub use error::{ErrorSeverity, GameError};
pub use queue::{ActorQueue, QueueError};
pub use state::{EntityId, Position, Team, TileState, TurnError, TurnState};
pub use state_machine::{StateMachine, UnknownStateError};
