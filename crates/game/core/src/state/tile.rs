/// Highlight classification of a tile.
///
/// `Active` marks tiles an actor may target (move destination, attack cell),
/// `Deactive` dims everything else while a selection is in progress.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TileState {
    #[default]
    Normal,
    Active,
    Deactive,
}
