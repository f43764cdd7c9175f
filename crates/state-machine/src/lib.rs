//! Named state machine for turn-based actor phases.
//!
//! A [`StateMachine`] maps state keys to state objects and tracks which one is
//! current. Transitions are pure reference swaps: the machine never runs enter
//! or exit hooks on its own, so the owner decides which side effects follow a
//! [`StateMachine::change_state`] call.
//!
//! - **Keyed registry**: every state is stored under a [`StateKey`]
//! - **Identity-stable**: changing back to a key yields the same instance
//! - **Explicit setup**: [`StateMachineBuilder`] registers all states in one step
//!
//! # Architecture
//!
//! - [`StateMachine`]: registry plus current key
//! - [`StateMachineBuilder`]: ordered registration with an initial state
//! - [`UnknownStateError`]: transition to a key that was never registered

pub mod builder;
pub mod error;
pub mod key;
pub mod machine;

pub use builder::StateMachineBuilder;
pub use error::UnknownStateError;
pub use key::StateKey;
pub use machine::StateMachine;
