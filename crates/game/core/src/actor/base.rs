//! State shared by every actor variant.

use crate::actor::weights::keys;
use crate::actor::{ActTarget, ActorContext, ActorKind, ConfigurationError, ObjectCategory, Weights};
use crate::state::EntityId;

/// Weights, running flag and target of one actor instance.
///
/// Concrete actors embed an `ActorCore` and expose it through
/// [`crate::actor::Actor::core`]; phase states receive it as their owner.
#[derive(Clone, Debug)]
pub struct ActorCore {
    kind: ActorKind,
    weights: Weights,
    running: bool,
    target: Option<ActTarget>,
}

impl ActorCore {
    pub fn new(kind: ActorKind) -> Self {
        Self {
            kind,
            weights: Weights::new(),
            running: false,
            target: None,
        }
    }

    /// Binds the target, installs `weights` and returns to the dormant state.
    ///
    /// Nothing changes unless every check passes.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::MissingTarget`] if `target` is `None`
    /// - [`ConfigurationError::TargetCategoryMismatch`] if the target lacks
    ///   `category`
    /// - [`ConfigurationError::MissingWeight`] if a `required` key would be
    ///   absent after installation
    pub fn initialize(
        &mut self,
        target: Option<ActTarget>,
        weights: Weights,
        required: &[&'static str],
        category: ObjectCategory,
    ) -> Result<(), ConfigurationError> {
        let target = target.ok_or(ConfigurationError::MissingTarget { kind: self.kind })?;
        if !target.satisfies(category) {
            return Err(ConfigurationError::TargetCategoryMismatch {
                kind: self.kind,
                required: category,
                found: target.category,
            });
        }

        let mut installed = self.weights.clone();
        installed.install(weights);
        if let Some(key) = installed.first_missing(required) {
            return Err(ConfigurationError::MissingWeight {
                kind: self.kind,
                key,
            });
        }

        self.target = Some(target);
        self.weights = installed;
        self.running = false;
        Ok(())
    }

    /// Fails on the first key of `required` missing from the weights.
    pub fn check_required(&self, required: &[&'static str]) -> Result<(), ConfigurationError> {
        match self.weights.first_missing(required) {
            Some(key) => Err(ConfigurationError::MissingWeight {
                kind: self.kind,
                key,
            }),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn target(&self) -> Option<ActTarget> {
        self.target
    }

    #[inline]
    pub fn target_entity(&self) -> Option<EntityId> {
        self.target.map(|target| target.entity)
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn weight(&self, key: &str) -> i32 {
        self.weights.get(key)
    }

    /// Non-negative reading of a weight, for ranges and amounts.
    pub fn magnitude(&self, key: &str) -> u32 {
        self.weight(key).max(0) as u32
    }

    /// Action points this actor costs to start.
    pub fn act_point_cost(&self) -> u32 {
        self.magnitude(keys::ACT_POINT)
    }

    /// Marks the actor running and selects its target.
    pub fn mark_running(&mut self, cx: &mut ActorContext<'_>) {
        self.running = true;
        self.select_target(cx);
    }

    /// Marks the actor dormant and clears the selection.
    pub fn mark_dormant(&mut self, cx: &mut ActorContext<'_>) {
        self.running = false;
        if self.target.is_some() {
            cx.selection.deselect();
        }
    }

    pub fn select_target(&self, cx: &mut ActorContext<'_>) {
        if let Some(entity) = self.target_entity() {
            cx.selection.select(entity);
        }
    }

    pub fn is_target_selected(&self, cx: &ActorContext<'_>) -> bool {
        self.target_entity()
            .is_some_and(|entity| cx.selection.is_selected(entity))
    }
}
