// Depth-limited minimax over pursuit game states
//
// The pursued agent maximizes `eval::evaluate`, the pursuer minimizes it.
// No pruning, ordering or caching: every node down to the horizon is visited,
// so a root call costs at most 4^depth nodes.

use log::debug;
use std::time::Instant;

use crate::error::{PursuitError, Result};
use crate::eval::evaluate;
use crate::grid::Grid;
use crate::state::GameState;
use crate::types::{Mover, Position};

/// Result of a root search: the chosen move plus diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub chosen: Position,
    /// Minimax value of the chosen move, from the pursued agent's view
    pub score: i32,
    /// Number of states visited, root included
    pub nodes: u64,
}

/// Stateless search engine bound to one grid
///
/// Holds nothing mutable, so one engine can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    grid: Grid,
}

impl SearchEngine {
    pub fn new(grid: Grid) -> Self {
        SearchEngine { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the mover's next position after searching `depth` plies
    ///
    /// # Errors
    /// * `OutOfBounds` if any position of `state` is off the grid
    /// * `InvalidDepth` if `depth == 0`
    /// * `NoLegalMove` if the mover has no neighbor cell (1x1 grid)
    /// * `AlreadyTerminal` if the game is already decided
    pub fn choose_move(&self, state: &GameState, mover: Mover, depth: u8) -> Result<Position> {
        self.analyze(state, mover, depth).map(|outcome| outcome.chosen)
    }

    /// Same as `choose_move` but also reports the score and node count
    pub fn analyze(&self, state: &GameState, mover: Mover, depth: u8) -> Result<SearchOutcome> {
        for pos in [state.pursued, state.pursuer, state.escape] {
            self.grid.check(pos)?;
        }

        if depth == 0 {
            return Err(PursuitError::InvalidDepth);
        }

        let origin = state.position_of(mover);
        let candidates = self.grid.neighbors(&origin);
        if candidates.is_empty() {
            return Err(PursuitError::NoLegalMove(origin));
        }

        if let Some(outcome) = state.outcome() {
            return Err(PursuitError::AlreadyTerminal(outcome));
        }

        let start_time = Instant::now();
        let maximizing = mover.is_maximizing();
        let mut nodes = 1;
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = origin;

        for candidate in candidates {
            let next = state.with_move(mover, candidate);
            let value = self.score(&next, 1, depth, !maximizing, &mut nodes);

            // Strict comparison: the first best candidate in neighbor order wins ties
            if (maximizing && value > best_value) || (!maximizing && value < best_value) {
                best_value = value;
                best_move = candidate;
            }
        }

        debug!(
            "{} at {} -> {} (score: {}, depth: {}, nodes: {}, time: {}us)",
            mover,
            origin,
            best_move,
            best_value,
            depth,
            nodes,
            start_time.elapsed().as_micros()
        );

        Ok(SearchOutcome {
            chosen: best_move,
            score: best_value,
            nodes,
        })
    }

    /// Minimax value of `state` with `mover` to play and `depth` plies left
    ///
    /// Never fails: terminal states and a zero horizon evaluate statically.
    pub fn evaluate_state(&self, state: &GameState, mover: Mover, depth: u8) -> i32 {
        let mut nodes = 0;
        self.score(state, 0, depth, mover.is_maximizing(), &mut nodes)
    }

    fn score(
        &self,
        state: &GameState,
        ply: u8,
        depth: u8,
        maximizing: bool,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;

        if state.is_terminal() || ply >= depth {
            return evaluate(state);
        }

        let mover = if maximizing { Mover::Pursued } else { Mover::Pursuer };
        let candidates = self.grid.neighbors(&state.position_of(mover));
        if candidates.is_empty() {
            return evaluate(state);
        }

        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        for candidate in candidates {
            let next = state.with_move(mover, candidate);
            let value = self.score(&next, ply + 1, depth, !maximizing, nodes);
            if (maximizing && value > best_value) || (!maximizing && value < best_value) {
                best_value = value;
            }
        }
        best_value
    }
}

/// Convenience wrapper around `SearchEngine::choose_move`
pub fn choose_move(grid: &Grid, state: &GameState, mover: Mover, depth: u8) -> Result<Position> {
    SearchEngine::new(*grid).choose_move(state, mover, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome;

    fn engine(size: i32) -> SearchEngine {
        SearchEngine::new(Grid::new(size).unwrap())
    }

    fn state(pursued: (i32, i32), pursuer: (i32, i32), escape: (i32, i32)) -> GameState {
        GameState {
            pursued: Position::new(pursued.0, pursued.1),
            pursuer: Position::new(pursuer.0, pursuer.1),
            escape: Position::new(escape.0, escape.1),
        }
    }

    #[test]
    fn test_pursued_steps_onto_escape() {
        let s = state((0, 0), (1, 1), (1, 0));
        let outcome = engine(2).analyze(&s, Mover::Pursued, 1).unwrap();
        assert_eq!(outcome.chosen, Position::new(1, 0));
        assert_eq!(outcome.score, 100);
        assert_eq!(outcome.nodes, 3);
    }

    #[test]
    fn test_pursuer_tie_keeps_first_candidate() {
        // (0,1) and (1,0) both score 0; left comes before up
        let s = state((0, 0), (1, 1), (1, 0));
        let outcome = engine(2).analyze(&s, Mover::Pursuer, 1).unwrap();
        assert_eq!(outcome.chosen, Position::new(0, 1));
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn test_pursuer_captures_when_adjacent() {
        let s = state((2, 2), (2, 3), (4, 0));
        let chosen = engine(5).choose_move(&s, Mover::Pursuer, 1).unwrap();
        assert_eq!(chosen, Position::new(2, 2));
    }

    #[test]
    fn test_default_opening_at_depth_three() {
        // Both opening moves are worth 3; right is enumerated before down
        let s = state((0, 0), (4, 4), (4, 0));
        let outcome = engine(5).analyze(&s, Mover::Pursued, 3).unwrap();
        assert_eq!(outcome.chosen, Position::new(1, 0));
        assert_eq!(outcome.score, 3);
        assert_eq!(outcome.nodes, 19);
    }

    #[test]
    fn test_off_grid_state_is_rejected_before_depth() {
        let s = state((5, 2), (0, 0), (4, 0));
        assert_eq!(
            engine(5).analyze(&s, Mover::Pursued, 0),
            Err(PursuitError::OutOfBounds { x: 5, y: 2, size: 5 })
        );
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let s = state((0, 0), (4, 4), (4, 0));
        assert_eq!(
            engine(5).choose_move(&s, Mover::Pursued, 0),
            Err(PursuitError::InvalidDepth)
        );
    }

    #[test]
    fn test_terminal_state_is_rejected() {
        let escaped = state((4, 0), (4, 4), (4, 0));
        let captured = state((2, 2), (2, 2), (4, 0));
        assert_eq!(
            engine(5).choose_move(&escaped, Mover::Pursuer, 3),
            Err(PursuitError::AlreadyTerminal(Outcome::Escaped))
        );
        assert_eq!(
            engine(5).choose_move(&captured, Mover::Pursued, 3),
            Err(PursuitError::AlreadyTerminal(Outcome::Captured))
        );
    }

    #[test]
    fn test_single_cell_grid_has_no_legal_move() {
        let s = state((0, 0), (0, 0), (0, 0));
        assert_eq!(
            engine(1).choose_move(&s, Mover::Pursued, 1),
            Err(PursuitError::NoLegalMove(Position::new(0, 0)))
        );
    }

    #[test]
    fn test_evaluate_state_matches_root_score() {
        let e = engine(5);
        let s = state((1, 3), (3, 1), (4, 0));
        for mover in [Mover::Pursued, Mover::Pursuer] {
            for depth in 1..=4 {
                let outcome = e.analyze(&s, mover, depth).unwrap();
                assert_eq!(e.evaluate_state(&s, mover, depth), outcome.score);
            }
        }
    }

    #[test]
    fn test_evaluate_state_on_terminal_and_zero_depth() {
        let e = engine(5);
        assert_eq!(e.evaluate_state(&state((4, 0), (0, 0), (4, 0)), Mover::Pursuer, 3), 100);
        assert_eq!(e.evaluate_state(&state((0, 0), (4, 4), (4, 0)), Mover::Pursued, 0), 4);
    }

    #[test]
    fn test_search_is_deterministic_and_pure() {
        let e = engine(5);
        let s = state((2, 1), (0, 3), (4, 0));
        let before = s;
        let first = e.analyze(&s, Mover::Pursuer, 3).unwrap();
        let second = e.analyze(&s, Mover::Pursuer, 3).unwrap();
        assert_eq!(first, second);
        assert_eq!(s, before);
    }

    #[test]
    fn test_free_choose_move_matches_engine() {
        let grid = Grid::new(5).unwrap();
        let s = state((0, 0), (4, 4), (4, 0));
        assert_eq!(
            choose_move(&grid, &s, Mover::Pursued, 3),
            SearchEngine::new(grid).choose_move(&s, Mover::Pursued, 3)
        );
    }
}
