// Grid geometry: bounds, orthogonal neighbors, Manhattan distance

use crate::error::{PursuitError, Result};
use crate::types::{Direction, Position};

/// Square grid of `size` x `size` cells, coordinates in `[0, size - 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Grid {
    pub fn new(size: i32) -> Result<Self> {
        if size < 1 {
            return Err(PursuitError::InvalidGridSize(size));
        }
        Ok(Grid { size })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Checked position constructor
    pub fn position(&self, x: i32, y: i32) -> Result<Position> {
        let pos = Position { x, y };
        if !self.contains(&pos) {
            return Err(PursuitError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(pos)
    }

    /// Validates a position built elsewhere (config, logs)
    pub fn check(&self, pos: Position) -> Result<Position> {
        self.position(pos.x, pos.y)
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= 0 && pos.x < self.size && pos.y >= 0 && pos.y < self.size
    }

    /// In-bounds orthogonal neighbors in Left, Right, Up, Down order
    ///
    /// Corners yield 2 cells, edges 3, interior cells 4, a 1x1 grid none.
    pub fn neighbors(&self, pos: &Position) -> Vec<Position> {
        Direction::all()
            .iter()
            .map(|dir| dir.apply(pos))
            .filter(|next| self.contains(next))
            .collect()
    }

    /// Iterates every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position { x, y }))
    }
}

/// Calculates Manhattan distance between two positions
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
