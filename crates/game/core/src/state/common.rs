use std::fmt;

/// Unique identifier for a placed object (unit, obstacle, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Grid (taxicab) distance between two positions.
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Orthogonal neighbours in north, east, south, west order.
    pub fn neighbors(self) -> [Position; 4] {
        [
            Position::new(self.x, self.y + 1),
            Position::new(self.x + 1, self.y),
            Position::new(self.x, self.y - 1),
            Position::new(self.x - 1, self.y),
        ]
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(-1, 2);
        let b = Position::new(3, -2);
        assert_eq!(a.manhattan(b), 8);
        assert_eq!(b.manhattan(a), 8);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn neighbors_are_one_step_away() {
        let origin = Position::ORIGIN;
        assert!(origin.neighbors().iter().all(|n| origin.manhattan(*n) == 1));
    }
}
