//! Scripted battle input.
use std::path::Path;

use anyhow::{Context, Result};
use game_core::{ActorKind, EntityId, Position, TouchEvent};
use runtime::Battle;
use serde::Deserialize;

/// One scripted player or engine input. Units are named by spawn number.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum Step {
    Reserve { unit: u32, actor: ActorKind },
    Tick,
    TouchUnit { unit: u32, event: TouchEvent },
    TouchTile { x: i32, y: i32 },
    EndTurn,
}

impl Step {
    /// Applies the step to `battle`. Returns a short description of the
    /// outcome for the transcript.
    pub fn apply(&self, battle: &mut Battle) -> Result<String> {
        let line = match *self {
            Step::Reserve { unit, actor } => {
                battle.reserve(EntityId(unit), actor)?;
                format!("reserve {} on {}", actor, EntityId(unit))
            }
            Step::Tick => format!("tick: {} actor(s) started", battle.tick()?),
            Step::TouchUnit { unit, event } => {
                let consumed = battle.touch_unit(EntityId(unit), event)?;
                format!("{} {} (consumed: {})", event, EntityId(unit), consumed)
            }
            Step::TouchTile { x, y } => {
                let position = Position::new(x, y);
                let handled = battle.touch_tile(position)?;
                format!("touch tile {} (handled: {})", position, handled)
            }
            Step::EndTurn => {
                battle.end_turn()?;
                format!("end turn -> {} turn {}", battle.turn().team, battle.turn().number)
            }
        };
        Ok(line)
    }
}

/// Parses a RON list of steps.
pub fn parse(content: &str) -> Result<Vec<Step>> {
    ron::from_str(content).context("Failed to parse battle script RON")
}

pub fn load(path: &Path) -> Result<Vec<Step>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    parse(&content)
}
