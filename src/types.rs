// Pursuit game value types
// Positions, directions and agent roles shared by every other module

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell on the grid
/// A move is a Position too: the destination cell of the moving agent
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Builds an unchecked position; use `Grid::position` when bounds matter
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four orthogonal steps an agent can take
/// Screen orientation: Up decreases y, Down increases y
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns all directions in move-generation order
    ///
    /// The search keeps the first strictly best candidate, so this order
    /// decides ties and must not change.
    pub fn all() -> [Direction; 4] {
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Calculates the neighboring position one step in this direction
    pub fn apply(&self, pos: &Position) -> Position {
        match self {
            Direction::Left => Position { x: pos.x - 1, y: pos.y },
            Direction::Right => Position { x: pos.x + 1, y: pos.y },
            Direction::Up => Position { x: pos.x, y: pos.y - 1 },
            Direction::Down => Position { x: pos.x, y: pos.y + 1 },
        }
    }

    /// Recovers the direction of a single orthogonal step, if `to` is one
    pub fn between(from: &Position, to: &Position) -> Option<Direction> {
        Direction::all().into_iter().find(|dir| dir.apply(from) == *to)
    }
}

/// Which agent is moving
/// The pursued agent always maximizes, the pursuer always minimizes
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mover {
    Pursued,
    Pursuer,
}

impl Mover {
    pub fn is_maximizing(&self) -> bool {
        matches!(self, Mover::Pursued)
    }

    pub fn opponent(&self) -> Mover {
        match self {
            Mover::Pursued => Mover::Pursuer,
            Mover::Pursuer => Mover::Pursued,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mover::Pursued => "pursued",
            Mover::Pursuer => "pursuer",
        }
    }
}

impl fmt::Display for Mover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a finished game ended
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Pursued agent reached the escape cell
    Escaped,
    /// Pursuer landed on the pursued agent (or the other way round)
    Captured,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Escaped => f.write_str("escaped"),
            Outcome::Captured => f.write_str("captured"),
        }
    }
}
