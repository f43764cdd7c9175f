/// Allegiance of a unit on the board.
///
/// Team decides whose turn it is and which occupants an attack may hit.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Team {
    /// Player-controlled side.
    #[default]
    Ally,
    /// Opposing side.
    Enemy,
    /// Never takes a turn, never hostile.
    Neutral,
}

impl Team {
    /// Check if this team is hostile to another team.
    pub fn is_hostile_to(self, other: Team) -> bool {
        matches!(
            (self, other),
            (Team::Ally, Team::Enemy) | (Team::Enemy, Team::Ally)
        )
    }

    /// Team that plays after this one.
    pub fn opponent(self) -> Team {
        match self {
            Team::Ally => Team::Enemy,
            Team::Enemy => Team::Ally,
            Team::Neutral => Team::Neutral,
        }
    }
}
