// Start-position sweep
//
// Plays one match per (pursued, pursuer) start pair on a grid. Matches are
// independent and the core is pure, so they run on the rayon pool.

use rayon::prelude::*;

use crate::error::Result;
use crate::game::Match;
use crate::grid::Grid;
use crate::state::GameState;
use crate::types::{Outcome, Position};

/// Result of one match in the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartReport {
    pub pursued_start: Position,
    pub pursuer_start: Position,
    pub outcome: Option<Outcome>,
    pub turns: u32,
}

/// Aggregate counts over a sweep
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepSummary {
    pub games: usize,
    pub escaped: usize,
    pub captured: usize,
    pub undecided: usize,
    pub total_turns: u64,
}

impl SweepSummary {
    pub fn from_reports(reports: &[StartReport]) -> Self {
        let mut summary = SweepSummary::default();
        for report in reports {
            summary.games += 1;
            summary.total_turns += u64::from(report.turns);
            match report.outcome {
                Some(Outcome::Escaped) => summary.escaped += 1,
                Some(Outcome::Captured) => summary.captured += 1,
                None => summary.undecided += 1,
            }
        }
        summary
    }

    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        }
    }
}

/// Plays every non-terminal start pair; reports come back in grid order
pub fn sweep_starts(
    grid: Grid,
    escape: Position,
    depth: u8,
    max_turns: u32,
) -> Result<Vec<StartReport>> {
    grid.check(escape)?;

    let starts: Vec<GameState> = grid
        .cells()
        .flat_map(|pursued| {
            grid.cells().map(move |pursuer| GameState {
                pursued,
                pursuer,
                escape,
            })
        })
        .filter(|state| !state.is_terminal())
        .collect();

    starts
        .into_par_iter()
        .map(|state| -> Result<StartReport> {
            let result = Match::new(grid, state, depth, max_turns).run()?;
            Ok(StartReport {
                pursued_start: state.pursued,
                pursuer_start: state.pursuer,
                outcome: result.outcome,
                turns: result.turns,
            })
        })
        .collect()
}
