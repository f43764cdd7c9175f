//! Map data loader.
//!
//! Loads map bounds, holes and initial unit placements from map RON files.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::map::MapRecord;

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map from a RON file.
    ///
    /// Placements that do not land on a tile are skipped with a warning.
    pub fn load(path: &Path) -> LoadResult<MapRecord> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MapRecord> {
        let mut map: MapRecord = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        if map.dimensions.width == 0 || map.dimensions.height == 0 {
            anyhow::bail!(
                "Map dimensions must be non-zero, got {}x{}",
                map.dimensions.width,
                map.dimensions.height
            );
        }
        map.retain_valid_placements();

        Ok(map)
    }
}
