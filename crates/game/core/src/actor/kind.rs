//! Actor kind enumeration - every reservable behaviour.

/// Stable identifier distinguishing actor variants.
///
/// Data files name kinds case-insensitively; the legacy type names
/// (`MoveActor`, `AttackActor`) are accepted as aliases.
#[derive(
    Clone,
    Copy,
    Debug,
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
#[strum(ascii_case_insensitive)]
pub enum ActorKind {
    /// Walk to a reachable empty tile.
    #[strum(to_string = "move", serialize = "move_actor", serialize = "MoveActor")]
    Move,

    /// Strike a hostile occupant within range.
    #[strum(to_string = "attack", serialize = "attack_actor", serialize = "AttackActor")]
    Attack,
}

impl ActorKind {
    pub const ALL: [ActorKind; 2] = [ActorKind::Move, ActorKind::Attack];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_legacy_names() {
        assert_eq!("attack".parse::<ActorKind>(), Ok(ActorKind::Attack));
        assert_eq!("AttackActor".parse::<ActorKind>(), Ok(ActorKind::Attack));
        assert_eq!("MOVE".parse::<ActorKind>(), Ok(ActorKind::Move));
        assert_eq!("move_actor".parse::<ActorKind>(), Ok(ActorKind::Move));
        assert!("heal".parse::<ActorKind>().is_err());
    }

    #[test]
    fn displays_short_name() {
        assert_eq!(ActorKind::Move.to_string(), "move");
        assert_eq!(ActorKind::Attack.as_ref(), "attack");
    }
}
