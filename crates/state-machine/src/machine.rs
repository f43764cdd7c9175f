//! Registry-backed state machine.

use std::collections::HashMap;

use crate::{StateKey, StateMachineBuilder, UnknownStateError};

/// Maps keys to states and tracks the current one.
///
/// `S` may be unsized, which lets owners store trait objects such as
/// `StateMachine<Phase, dyn PhaseBehavior>`. States live inside the registry
/// for the whole life of the machine; the current state is only a key, so
/// switching away and back always returns the same instance.
pub struct StateMachine<K: StateKey, S: ?Sized> {
    registry: HashMap<K, Box<S>>,
    order: Vec<K>,
    current: Option<K>,
}

impl<K: StateKey, S: ?Sized> StateMachine<K, S> {
    /// Creates an empty machine with no current state.
    pub fn new() -> Self {
        Self {
            registry: HashMap::new(),
            order: Vec::new(),
            current: None,
        }
    }

    /// Starts an explicit registration step.
    pub fn builder() -> StateMachineBuilder<K, S> {
        StateMachineBuilder::new()
    }

    /// Registers `state` under `key`.
    ///
    /// Re-registering an existing key replaces the stored state (last write
    /// wins) and returns the previous one. If the replaced key is current, the
    /// machine now points at the new instance.
    pub fn storage_state(&mut self, key: K, state: Box<S>) -> Option<Box<S>> {
        let previous = self.registry.insert(key, state);
        if previous.is_none() {
            self.order.push(key);
        }
        previous
    }

    /// Makes `key` the current state and returns the key it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStateError`] if nothing is registered under `key`; the
    /// current state is left untouched in that case.
    pub fn change_state(&mut self, key: K) -> Result<Option<K>, UnknownStateError> {
        if !self.registry.contains_key(&key) {
            return Err(UnknownStateError::new(key));
        }
        Ok(self.current.replace(key))
    }

    /// Returns the current state, if a transition has happened yet.
    pub fn current_state(&self) -> Option<&S> {
        self.current
            .and_then(|key| self.registry.get(&key))
            .map(|state| &**state)
    }

    /// Returns the current state mutably.
    pub fn current_state_mut(&mut self) -> Option<&mut S> {
        match self.current {
            Some(key) => self.registry.get_mut(&key).map(|state| &mut **state),
            None => None,
        }
    }

    /// Returns the key of the current state.
    #[inline]
    pub fn current_key(&self) -> Option<K> {
        self.current
    }

    /// Returns `true` if `key` is current.
    #[inline]
    pub fn is_in(&self, key: K) -> bool {
        self.current == Some(key)
    }

    /// Looks up a registered state without changing the current one.
    pub fn state(&self, key: K) -> Option<&S> {
        self.registry.get(&key).map(|state| &**state)
    }

    #[inline]
    pub fn contains(&self, key: K) -> bool {
        self.registry.contains_key(&key)
    }

    /// Registered keys in first-registration order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.order.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl<K: StateKey, S: ?Sized> Default for StateMachine<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StateKey, S: ?Sized> core::fmt::Debug for StateMachine<K, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StateMachine")
            .field("states", &self.order)
            .field("current", &self.current)
            .finish()
    }
}
