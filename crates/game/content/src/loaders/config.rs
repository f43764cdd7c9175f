//! Game configuration loader.

use std::path::Path;

use game_core::{GameConfig, Team};

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys absent from the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        // Neutral units never act, so a neutral opening turn would never end.
        if config.first_team == Team::Neutral {
            anyhow::bail!("first_team must be a playing team, got {}", config.first_team);
        }

        Ok(config)
    }
}
