// Errors raised by the pursuit core

use thiserror::Error;

use crate::types::{Outcome, Position};

/// Failure of a single core call; the core performs no I/O so nothing is retried
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PursuitError {
    #[error("position ({x}, {y}) is outside a {size}x{size} grid")]
    OutOfBounds { x: i32, y: i32, size: i32 },

    #[error("grid size must be at least 1, got {0}")]
    InvalidGridSize(i32),

    #[error("search depth must be at least 1 to choose a move")]
    InvalidDepth,

    #[error("game is already over ({0})")]
    AlreadyTerminal(Outcome),

    #[error("no legal move from {0}")]
    NoLegalMove(Position),
}

pub type Result<T> = std::result::Result<T, PursuitError>;
