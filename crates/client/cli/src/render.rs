//! Plain-text view of the battlefield.
use std::fmt::Write;

use game_core::{MapDimensions, Position, Team, TileBoard, TileState};
use runtime::Battle;

/// Renders the board top row first.
///
/// Units show the first letter of their name, upper case for allies and
/// lower case otherwise. Empty tiles show their highlight: `.` normal,
/// `*` active, `-` deactive. Holes are blank.
pub fn board(battle: &Battle) -> String {
    let MapDimensions { width, height } = battle.grid().dimensions();
    let mut out = String::new();
    for y in (0..height as i32).rev() {
        let _ = write!(out, "{:>2} ", y);
        for x in 0..width as i32 {
            out.push(cell(battle, Position::new(x, y)));
        }
        out.push('\n');
    }
    out.push_str("   ");
    for x in 0..width {
        let _ = write!(out, "{}", x % 10);
    }
    out.push('\n');
    out
}

fn cell(battle: &Battle, position: Position) -> char {
    if let Some(unit) = battle.unit_at(position) {
        let initial = unit.name.chars().next().unwrap_or('?');
        return match unit.team {
            Team::Ally => initial.to_ascii_uppercase(),
            _ => initial.to_ascii_lowercase(),
        };
    }
    match battle.grid().tile_state(position) {
        Some(TileState::Normal) => '.',
        Some(TileState::Active) => '*',
        Some(TileState::Deactive) => '-',
        None => ' ',
    }
}

/// One line per unit with hit points and queued actors.
pub fn roster(battle: &Battle) -> String {
    let mut out = String::new();
    for unit in battle.units() {
        let queued: Vec<String> = unit
            .queue
            .queued_actor_kinds()
            .map(|kind| kind.to_string())
            .collect();
        let _ = writeln!(
            out,
            "{} {:<8} {:<7} hp {:>2}/{:<2} queue [{}]{}",
            unit.id,
            unit.name,
            unit.team,
            unit.hp,
            unit.max_hp,
            queued.join(", "),
            if battle.is_running(unit.id) { " running" } else { "" }
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameConfig, UnitRecord};
    use runtime::TileGrid;

    #[test]
    fn renders_units_and_holes() {
        let grid = TileGrid::new(MapDimensions::new(3, 2), &[Position::new(2, 1)]);
        let mut battle = Battle::new(GameConfig::default(), grid);
        for (no, name, team, x) in [(1, "knight", Team::Ally, 0), (2, "Slime", Team::Enemy, 2)] {
            let record = UnitRecord {
                no,
                name: name.into(),
                team,
                hp: 1,
                actors: Vec::new(),
            };
            battle.spawn(&record, Position::new(x, 0)).unwrap();
        }

        assert_eq!(board(&battle), " 1 .. \n 0 K.s\n   012\n");
    }
}
