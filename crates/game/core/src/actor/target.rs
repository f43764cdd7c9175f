//! Capability-checked reference to the object an actor drives.

use bitflags::bitflags;

use crate::state::EntityId;

bitflags! {
    /// Capabilities of a placed object.
    ///
    /// Categories nest: every action object is placeable and every unit is an
    /// action object, so a unit carries all three flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ObjectCategory: u8 {
        /// Can sit on a tile and be selected.
        const PLACEABLE = 1 << 0;
        /// Can perform actions.
        const ACTION = 1 << 1;
        /// Belongs to a team and spends action points.
        const UNIT = 1 << 2;
    }
}

impl ObjectCategory {
    pub const PLACEABLE_OBJECT: Self = Self::PLACEABLE;
    pub const ACTION_OBJECT: Self = Self::PLACEABLE.union(Self::ACTION);
    pub const UNIT_OBJECT: Self = Self::ACTION_OBJECT.union(Self::UNIT);
}

/// Non-owning handle to the object an actor belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActTarget {
    pub entity: EntityId,
    pub category: ObjectCategory,
}

impl ActTarget {
    pub const fn new(entity: EntityId, category: ObjectCategory) -> Self {
        Self { entity, category }
    }

    pub const fn unit(entity: EntityId) -> Self {
        Self::new(entity, ObjectCategory::UNIT_OBJECT)
    }

    pub const fn placeable(entity: EntityId) -> Self {
        Self::new(entity, ObjectCategory::PLACEABLE_OBJECT)
    }

    /// Returns true if the target has every capability in `required`.
    pub fn satisfies(&self, required: ObjectCategory) -> bool {
        self.category.contains(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_satisfies_every_category() {
        let target = ActTarget::unit(EntityId(1));
        assert!(target.satisfies(ObjectCategory::PLACEABLE));
        assert!(target.satisfies(ObjectCategory::ACTION_OBJECT));
        assert!(target.satisfies(ObjectCategory::UNIT_OBJECT));
    }

    #[test]
    fn placeable_is_not_a_unit() {
        let target = ActTarget::placeable(EntityId(1));
        assert!(target.satisfies(ObjectCategory::PLACEABLE));
        assert!(!target.satisfies(ObjectCategory::UNIT));
    }
}
