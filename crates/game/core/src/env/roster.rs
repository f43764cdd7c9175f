use std::collections::{BTreeMap, HashMap};

use crate::state::{EntityId, Team};

/// Allegiance lookup for placed objects.
pub trait Roster {
    fn team(&self, entity: EntityId) -> Option<Team>;

    /// Returns true if both objects are known and on hostile teams.
    fn is_hostile(&self, a: EntityId, b: EntityId) -> bool {
        match (self.team(a), self.team(b)) {
            (Some(a), Some(b)) => a.is_hostile_to(b),
            _ => false,
        }
    }
}

impl Roster for BTreeMap<EntityId, Team> {
    fn team(&self, entity: EntityId) -> Option<Team> {
        self.get(&entity).copied()
    }
}

impl Roster for HashMap<EntityId, Team> {
    fn team(&self, entity: EntityId) -> Option<Team> {
        self.get(&entity).copied()
    }
}
