use crate::state::Team;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Action points granted to a team when its turn begins.
    pub turn_act_points: u32,

    /// Team that moves first.
    pub first_team: Team,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of actors a single unit can carry in its catalogue.
    pub const MAX_ACTORS_PER_UNIT: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TURN_ACT_POINTS: u32 = 3;

    pub fn new() -> Self {
        Self {
            turn_act_points: Self::DEFAULT_TURN_ACT_POINTS,
            first_team: Team::Ally,
        }
    }

    pub fn with_turn_act_points(turn_act_points: u32) -> Self {
        Self {
            turn_act_points,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
