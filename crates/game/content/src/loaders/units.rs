//! Unit catalog loader.
//!
//! Loads unit records, each carrying the actor records used to build its
//! actor queue.

use std::collections::HashSet;
use std::path::Path;

use game_core::UnitRecord;

use crate::loaders::{LoadResult, read_file};

/// Loader for the unit catalog from RON files.
pub struct UnitLoader;

impl UnitLoader {
    /// Load the unit catalog from a RON file.
    ///
    /// RON format: `Vec<UnitRecord>`
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or if two records share a
    /// unit number.
    pub fn load(path: &Path) -> LoadResult<Vec<UnitRecord>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<UnitRecord>> {
        let units: Vec<UnitRecord> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for unit in &units {
            if !seen.insert(unit.no) {
                anyhow::bail!("Duplicate unit number {} ('{}')", unit.no, unit.name);
            }
            for actor in &unit.actors {
                if actor.weight_values.len() != actor.weight_names.len() {
                    tracing::warn!(
                        "unit {} actor '{}': {} weight names but {} values",
                        unit.no,
                        actor.name,
                        actor.weight_names.len(),
                        actor.weight_values.len()
                    );
                }
            }
        }

        tracing::debug!("loaded {} unit records", units.len());
        Ok(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Team, UnitCatalog};

    const UNITS: &str = r#"[
        (
            no: 1,
            name: "Knight",
            team: ally,
            hp: 12,
            actors: [
                (name: "MoveActor", weight_names: ["range", "actPoint"], weight_values: [3, 1]),
                (name: "attack", weight_names: ["range", "damage"], weight_values: [1, 4]),
            ],
        ),
        (no: 2, name: "Slime", team: enemy, hp: 6),
    ]"#;

    #[test]
    fn parses_units_and_actor_records() {
        let units = UnitLoader::parse(UNITS).unwrap();
        assert_eq!(units.len(), 2);

        let knight = units.unit(1).unwrap();
        assert_eq!(knight.team, Team::Ally);
        assert_eq!(knight.actors.len(), 2);
        assert_eq!(
            knight.actors[0].weights().collect::<Vec<_>>(),
            vec![("range", 3), ("actPoint", 1)]
        );

        let slime = units.unit(2).unwrap();
        assert!(slime.actors.is_empty());
    }

    #[test]
    fn short_value_list_pads_with_zero() {
        let units = UnitLoader::parse(
            r#"[(no: 3, name: "Archer", team: ally, hp: 8, actors: [
                (name: "attack", weight_names: ["range", "damage"], weight_values: [4]),
            ])]"#,
        )
        .unwrap();
        let record = &units[0].actors[0];
        assert_eq!(record.weights().collect::<Vec<_>>(), vec![("range", 4), ("damage", 0)]);
    }

    #[test]
    fn duplicate_unit_numbers_are_rejected() {
        let err = UnitLoader::parse(
            r#"[(no: 1, name: "A", team: ally, hp: 1), (no: 1, name: "B", team: enemy, hp: 1)]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate unit number 1"));
    }
}
