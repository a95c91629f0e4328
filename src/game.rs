// Headless turn controller
//
// Alternates the two agents, pursued first in every round, applying the
// search engine's chosen move and checking termination after each half-turn.

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{PursuitError, Result};
use crate::grid::Grid;
use crate::search::SearchEngine;
use crate::state::GameState;
use crate::types::{Mover, Outcome, Position};

/// Record of one applied half-turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfTurn {
    /// Round number, shared by the pursued move and the pursuer reply
    pub turn: u32,
    pub mover: Mover,
    pub from: Position,
    pub to: Position,
    pub score: i32,
    pub nodes: u64,
    pub before: GameState,
    pub after: GameState,
}

/// Final report of a played match
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// `None` when the round cap was reached first
    pub outcome: Option<Outcome>,
    /// Completed or started rounds
    pub turns: u32,
    pub final_state: GameState,
    pub history: Vec<HalfTurn>,
}

/// One game between the two search-driven agents
pub struct Match {
    engine: SearchEngine,
    state: GameState,
    depth: u8,
    max_turns: u32,
    turn: u32,
    next_mover: Mover,
    history: Vec<HalfTurn>,
}

impl Match {
    /// Creates a match; the pursued agent moves first
    pub fn new(grid: Grid, state: GameState, depth: u8, max_turns: u32) -> Self {
        Match {
            engine: SearchEngine::new(grid),
            state,
            depth,
            max_turns,
            turn: 0,
            next_mover: Mover::Pursued,
            history: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let (grid, state) = config.setup()?;
        Ok(Self::new(grid, state, config.search.depth, config.game.max_turns))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn next_mover(&self) -> Mover {
        self.next_mover
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn history(&self) -> &[HalfTurn] {
        &self.history
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// True once the game is decided or the round cap is reached
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal() || self.turn >= self.max_turns
    }

    /// Plays a single half-turn for whichever agent is due
    pub fn step(&mut self) -> Result<HalfTurn> {
        if let Some(outcome) = self.state.outcome() {
            return Err(PursuitError::AlreadyTerminal(outcome));
        }

        let mover = self.next_mover;
        let before = self.state;
        let search = self.engine.analyze(&before, mover, self.depth)?;
        let after = before.with_move(mover, search.chosen);

        let half_turn = HalfTurn {
            turn: self.turn,
            mover,
            from: before.position_of(mover),
            to: search.chosen,
            score: search.score,
            nodes: search.nodes,
            before,
            after,
        };

        info!(
            "Turn {}: {} {} -> {} (score: {}, nodes: {})",
            half_turn.turn, mover, half_turn.from, half_turn.to, search.score, search.nodes
        );

        self.state = after;
        self.history.push(half_turn);
        self.next_mover = mover.opponent();
        if mover == Mover::Pursuer {
            self.turn += 1;
        }

        if let Some(outcome) = after.outcome() {
            info!("Game over on turn {}: {}", half_turn.turn, outcome);
        }

        Ok(half_turn)
    }

    /// Steps until the game is decided or the round cap is hit
    pub fn run(mut self) -> Result<MatchResult> {
        while !self.is_finished() {
            self.step()?;
        }
        Ok(self.finish())
    }

    /// Consumes the match into its report
    pub fn finish(self) -> MatchResult {
        // A round interrupted by the end of the game still counts
        let turns = if self.next_mover == Mover::Pursuer {
            self.turn + 1
        } else {
            self.turn
        };
        MatchResult {
            outcome: self.outcome(),
            turns,
            final_state: self.state,
            history: self.history,
        }
    }
}
