//! Headless battle driver.
//!
//! Loads content from the data directory, sets up a battle on the configured
//! map and replays a scripted sequence of touches and ticks, printing the
//! board after every step.
mod config;
mod render;
mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use config::CliConfig;
use game_content::ContentFactory;
use runtime::Battle;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    // Setup logging: both to stderr and to file
    let _guard = setup_logging(&config)?;

    run(&config)
}

fn run(config: &CliConfig) -> Result<()> {
    let content = ContentFactory::new(&config.data_dir);
    let game_config = content.load_config()?;
    let units = content.load_units()?;
    let map = content.load_map(&config.map)?;
    let steps = script::load(&config.script)?;

    tracing::info!(
        "map '{}' {}x{}, {} units in catalog, {} script steps",
        config.map,
        map.dimensions.width,
        map.dimensions.height,
        units.len(),
        steps.len()
    );

    let mut battle = Battle::from_map(game_config, &map, &units)
        .with_context(|| format!("Failed to set up map '{}'", config.map))?;
    battle.drain_events();

    println!("{}", render::board(&battle));
    print!("{}", render::roster(&battle));

    for (index, step) in steps.iter().enumerate() {
        let line = match step.apply(&mut battle) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!("step {} ({:?}) rejected: {:#}", index + 1, step, err);
                format!("{:?} rejected: {:#}", step, err)
            }
        };

        println!();
        println!(
            "[{}] {} | turn {} {} ap {}",
            index + 1,
            line,
            battle.turn().number,
            battle.turn().team,
            battle.turn().act_points
        );
        for event in battle.drain_events() {
            println!("    {:?}", event);
        }
        print!("{}", render::board(&battle));

        if let Some(team) = battle.winner() {
            println!();
            println!("{} wins", team);
            tracing::info!("battle over: {} wins after {} steps", team, index + 1);
            break;
        }
    }

    println!();
    print!("{}", render::roster(&battle));
    Ok(())
}

/// Setup logging to both stderr and a per-session file.
fn setup_logging(config: &CliConfig) -> Result<WorkerGuard> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_directory);

    // Create session ID if not provided
    let session_id = config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "battle.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins; info otherwise
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/battle.log", session_log_dir.display());

    Ok(guard)
}

/// Platform cache directory for logs, falling back to the temp directory.
fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "tactics")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("tactics").join("logs"))
}
