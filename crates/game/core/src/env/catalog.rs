//! Records supplied by the data service.

use crate::state::{Position, Team};

/// Configuration of one actor attached to a unit: the kind name plus
/// parallel weight name / value lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorRecord {
    /// Actor kind name, e.g. `"attack"` or `"AttackActor"`.
    pub name: String,
    pub weight_names: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight_values: Vec<i32>,
}

impl ActorRecord {
    pub fn new<N, S>(name: impl Into<String>, weights: N) -> Self
    where
        N: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        let (weight_names, weight_values) = weights
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .unzip();
        Self {
            name: name.into(),
            weight_names,
            weight_values,
        }
    }

    /// Name/value pairs. Names without a value read as 0; surplus values are
    /// ignored.
    pub fn weights(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.weight_names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                (
                    name.as_str(),
                    self.weight_values.get(index).copied().unwrap_or(0),
                )
            })
    }
}

/// Static description of a unit type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitRecord {
    /// Unit number referenced by map placements.
    pub no: u32,
    pub name: String,
    pub team: Team,
    pub hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actors: Vec<ActorRecord>,
}

/// Initial placement of a unit on a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceInfo {
    pub position: Position,
    pub unit_no: u32,
}

/// Data service handing out unit records by number.
pub trait UnitCatalog {
    fn unit(&self, no: u32) -> Option<&UnitRecord>;
}

impl UnitCatalog for [UnitRecord] {
    fn unit(&self, no: u32) -> Option<&UnitRecord> {
        self.iter().find(|unit| unit.no == no)
    }
}

impl UnitCatalog for Vec<UnitRecord> {
    fn unit(&self, no: u32) -> Option<&UnitRecord> {
        self.as_slice().unit(no)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_read_as_zero() {
        let record = ActorRecord {
            name: "attack".into(),
            weight_names: vec!["range".into(), "damage".into()],
            weight_values: vec![2],
        };
        let weights: Vec<_> = record.weights().collect();
        assert_eq!(weights, vec![("range", 2), ("damage", 0)]);
    }

    #[test]
    fn surplus_values_are_ignored() {
        let record = ActorRecord {
            name: "move".into(),
            weight_names: vec!["range".into()],
            weight_values: vec![3, 9, 9],
        };
        assert_eq!(record.weights().count(), 1);
    }

    #[test]
    fn catalog_finds_by_number() {
        let units = vec![UnitRecord {
            no: 7,
            name: "knight".into(),
            team: Team::Ally,
            hp: 10,
            actors: vec![ActorRecord::new("move", [("range", 2)])],
        }];
        assert_eq!(units.unit(7).map(|u| u.name.as_str()), Some("knight"));
        assert!(units.unit(8).is_none());
    }
}
