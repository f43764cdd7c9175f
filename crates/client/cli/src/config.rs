//! Driver configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Default data directory shipped with the content crate.
const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../game/content/data");

/// Configuration of one scripted battle run.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `config.toml`, `units.ron` and `maps/`.
    pub data_dir: PathBuf,
    /// Map name under `maps/`, without extension.
    pub map: String,
    /// Battle script to replay.
    pub script: PathBuf,
    pub session_id: Option<String>,
    /// Overrides the platform cache directory for log files.
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        let data_dir = PathBuf::from(BUNDLED_DATA_DIR);
        Self {
            script: data_dir.join("scripts").join("demo.ron"),
            data_dir,
            map: "skirmish".to_string(),
            session_id: None,
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TACTICS_DATA_DIR` - Content directory (default: bundled data)
    /// - `TACTICS_MAP` - Map name (default: `skirmish`)
    /// - `TACTICS_SCRIPT` - Battle script path (default: `<data>/scripts/demo.ron`)
    /// - `TACTICS_SESSION_ID` - Session identifier for logs (default: auto-generated)
    /// - `TACTICS_LOG_DIR` - Log directory (default: platform cache directory)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("TACTICS_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
            config.script = config.data_dir.join("scripts").join("demo.ron");
        }
        if let Ok(map) = env::var("TACTICS_MAP") {
            config.map = map;
        }
        if let Some(script) = env::var_os("TACTICS_SCRIPT") {
            config.script = PathBuf::from(script);
        }
        config.session_id = env::var("TACTICS_SESSION_ID").ok();
        config.log_dir = env::var_os("TACTICS_LOG_DIR").map(PathBuf::from);

        config
    }
}
