use game_core::{ActorKind, EntityId, Position, Team};

/// Observable outcome of a battle operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    Spawned {
        unit: EntityId,
        position: Position,
    },
    ActorStarted {
        unit: EntityId,
        kind: ActorKind,
    },
    ActorFinished {
        unit: EntityId,
        kind: ActorKind,
    },
    Moved {
        unit: EntityId,
        from: Option<Position>,
        to: Position,
    },
    Damaged {
        source: EntityId,
        target: EntityId,
        amount: u32,
        remaining: u32,
    },
    Defeated {
        unit: EntityId,
    },
    TurnStarted {
        team: Team,
        number: u32,
        act_points: u32,
    },
}
