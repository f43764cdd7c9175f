//! Explicit, ordered state registration.
//!
//! Owners construct every state up front and hand them to the builder in one
//! step, so the set of registered keys is visible at the call site instead of
//! being scattered across state constructors.

use crate::{StateKey, StateMachine, UnknownStateError};

/// Collects states and produces a [`StateMachine`].
pub struct StateMachineBuilder<K: StateKey, S: ?Sized> {
    machine: StateMachine<K, S>,
    initial: Option<K>,
}

impl<K: StateKey, S: ?Sized> StateMachineBuilder<K, S> {
    pub fn new() -> Self {
        Self {
            machine: StateMachine::new(),
            initial: None,
        }
    }

    /// Registers a state. Later registrations under the same key win.
    #[must_use]
    pub fn state(mut self, key: K, state: Box<S>) -> Self {
        self.machine.storage_state(key, state);
        self
    }

    /// Selects the state that is current once the machine is built.
    #[must_use]
    pub fn initial(mut self, key: K) -> Self {
        self.initial = Some(key);
        self
    }

    /// Finishes registration.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStateError`] if the initial key was never registered.
    pub fn build(self) -> Result<StateMachine<K, S>, UnknownStateError> {
        let mut machine = self.machine;
        if let Some(key) = self.initial {
            machine.change_state(key)?;
        }
        Ok(machine)
    }
}

impl<K: StateKey, S: ?Sized> Default for StateMachineBuilder<K, S> {
    fn default() -> Self {
        Self::new()
    }
}
