//! Content factory for loading every data file of a battle.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, UnitRecord};

use crate::loaders::{ConfigLoader, LoadResult, MapLoader, UnitLoader};
use crate::map::MapRecord;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── units.ron
/// └── maps/
///     ├── skirmish.ron
///     └── bridge.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields [`GameConfig::default`].
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::info!("{} not found, using default config", path.display());
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the unit catalog from `units.ron`.
    pub fn load_units(&self) -> LoadResult<Vec<UnitRecord>> {
        let path = self.data_dir.join("units.ron");
        UnitLoader::load(&path)
    }

    /// Load a map from `maps/{map_name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `map_name` - Name of the map file (without `.ron` extension)
    pub fn load_map(&self, map_name: &str) -> LoadResult<MapRecord> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
