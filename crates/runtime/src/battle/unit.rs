use game_core::{ActTarget, ActorQueue, ActorRegistry, EntityId, QueueError, Team, UnitRecord};

/// A unit placed on the battlefield with its own actor queue.
#[derive(Debug)]
pub struct Unit {
    pub id: EntityId,
    /// Catalog number the unit was spawned from.
    pub unit_no: u32,
    pub name: String,
    pub team: Team,
    pub hp: u32,
    pub max_hp: u32,
    pub queue: ActorQueue,
}

impl Unit {
    /// Builds a unit and its actor catalogue from a record.
    pub fn from_record(
        id: EntityId,
        record: &UnitRecord,
        registry: &ActorRegistry,
    ) -> Result<Self, QueueError> {
        let queue = ActorQueue::from_records(ActTarget::unit(id), &record.actors, registry)?;
        Ok(Self {
            id,
            unit_no: record.no,
            name: record.name.clone(),
            team: record.team,
            hp: record.hp,
            max_hp: record.hp,
            queue,
        })
    }

    /// Applies `amount` damage and returns the remaining hit points.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}
