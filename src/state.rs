// Immutable game snapshot and terminal test

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::Grid;
use crate::types::{Mover, Outcome, Position};

/// Positions of both agents plus the fixed escape cell
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub pursued: Position,
    pub pursuer: Position,
    pub escape: Position,
}

impl GameState {
    /// Creates a state after checking all three positions against the grid
    pub fn new(
        grid: &Grid,
        pursued: Position,
        pursuer: Position,
        escape: Position,
    ) -> Result<Self> {
        Ok(GameState {
            pursued: grid.check(pursued)?,
            pursuer: grid.check(pursuer)?,
            escape: grid.check(escape)?,
        })
    }

    /// True once the pursued agent escaped or was caught
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Escape is tested before capture
    pub fn outcome(&self) -> Option<Outcome> {
        if self.pursued == self.escape {
            Some(Outcome::Escaped)
        } else if self.pursued == self.pursuer {
            Some(Outcome::Captured)
        } else {
            None
        }
    }

    pub fn with_pursued(&self, pos: Position) -> Self {
        GameState { pursued: pos, ..*self }
    }

    pub fn with_pursuer(&self, pos: Position) -> Self {
        GameState { pursuer: pos, ..*self }
    }

    pub fn position_of(&self, mover: Mover) -> Position {
        match mover {
            Mover::Pursued => self.pursued,
            Mover::Pursuer => self.pursuer,
        }
    }

    /// Replaces the given agent's position
    pub fn with_move(&self, mover: Mover, pos: Position) -> Self {
        match mover {
            Mover::Pursued => self.with_pursued(pos),
            Mover::Pursuer => self.with_pursuer(pos),
        }
    }
}

/// Free-function form used by turn controllers
pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}
