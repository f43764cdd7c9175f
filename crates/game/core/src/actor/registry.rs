//! Data-driven actor construction.

use std::collections::HashMap;

use crate::actor::{
    ActTarget, Actor, ActorError, ActorKind, AttackActor, ConfigurationError, MoveActor, Weights,
};
use crate::env::ActorRecord;

/// Builds a dormant, uninitialized actor.
pub type ActorFactory = fn() -> Box<dyn Actor>;

/// Maps actor kinds to factories.
///
/// Unit data names actors by string; the registry turns those names into
/// initialized instances, so an unknown name is a data validation error
/// instead of a failed runtime type lookup.
#[derive(Clone, Debug, Default)]
pub struct ActorRegistry {
    factories: HashMap<ActorKind, ActorFactory>,
}

impl ActorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in actor.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(ActorKind::Move, MoveActor::boxed);
        registry.register(ActorKind::Attack, AttackActor::boxed);
        registry
    }

    /// Registers `factory` for `kind`, returning the factory it replaced.
    pub fn register(&mut self, kind: ActorKind, factory: ActorFactory) -> Option<ActorFactory> {
        self.factories.insert(kind, factory)
    }

    pub fn contains(&self, kind: ActorKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Creates an uninitialized actor of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnregisteredActorKind`] if no factory is
    /// registered.
    pub fn create(&self, kind: ActorKind) -> Result<Box<dyn Actor>, ConfigurationError> {
        self.factories
            .get(&kind)
            .map(|factory| factory())
            .ok_or(ConfigurationError::UnregisteredActorKind(kind))
    }

    /// Creates and initializes the actor a data record describes.
    ///
    /// # Errors
    ///
    /// Fails if the name does not parse, the kind is unregistered, or
    /// initialization rejects the target or weights.
    pub fn build(
        &self,
        record: &ActorRecord,
        target: ActTarget,
    ) -> Result<Box<dyn Actor>, ActorError> {
        let kind: ActorKind = record
            .name
            .parse()
            .map_err(|_| ConfigurationError::UnknownActorName(record.name.clone()))?;
        let mut actor = self.create(kind)?;
        let weights: Weights = record.weights().collect();
        actor.initialize(Some(target), weights)?;
        tracing::debug!(
            "built {} actor for {} with {} weights",
            kind,
            target.entity,
            record.weight_names.len()
        );
        Ok(actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::weights::keys;
    use crate::state::EntityId;

    #[test]
    fn standard_registry_covers_every_kind() {
        let registry = ActorRegistry::standard();
        for kind in ActorKind::ALL {
            assert!(registry.contains(kind));
            let actor = registry.create(kind).unwrap();
            assert_eq!(actor.kind(), kind);
            assert!(!actor.is_running());
        }
    }

    #[test]
    fn empty_registry_rejects_kind() {
        let mut registry = ActorRegistry::new();
        assert!(!registry.contains(ActorKind::Attack));
        assert!(matches!(
            registry.create(ActorKind::Attack),
            Err(ConfigurationError::UnregisteredActorKind(ActorKind::Attack))
        ));

        assert!(registry.register(ActorKind::Attack, AttackActor::boxed).is_none());
        assert!(registry.contains(ActorKind::Attack));
        assert!(!registry.contains(ActorKind::Move));
    }

    #[test]
    fn builds_from_record_with_legacy_name() {
        let registry = ActorRegistry::standard();
        let record = ActorRecord::new("AttackActor", [(keys::RANGE, 2), (keys::DAMAGE, 5)]);

        let actor = registry.build(&record, ActTarget::unit(EntityId(3))).unwrap();
        assert_eq!(actor.kind(), ActorKind::Attack);
        assert_eq!(actor.weight(keys::DAMAGE), 5);
        assert_eq!(actor.core().target_entity(), Some(EntityId(3)));
    }

    #[test]
    fn unknown_name_is_configuration_error() {
        let registry = ActorRegistry::standard();
        let record = ActorRecord::new("HealActor", [(keys::RANGE, 1)]);

        let err = registry.build(&record, ActTarget::unit(EntityId(1))).unwrap_err();
        assert_eq!(
            err,
            ActorError::Configuration(ConfigurationError::UnknownActorName("HealActor".into()))
        );
    }

    #[test]
    fn build_reports_missing_weight() {
        let registry = ActorRegistry::standard();
        let record = ActorRecord::new("move", [(keys::RANGE, 2)]);

        let err = registry.build(&record, ActTarget::unit(EntityId(1))).unwrap_err();
        assert_eq!(
            err,
            ActorError::Configuration(ConfigurationError::MissingWeight {
                kind: ActorKind::Move,
                key: keys::ACT_POINT,
            })
        );
    }
}
