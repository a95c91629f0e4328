// Replay module for analyzing logged games and debugging decision-making
//
// This module provides functionality to:
// 1. Parse JSONL debug logs
// 2. Re-run the search on each logged state
// 3. Compare logged vs replayed moves
// 4. Generate analysis reports

use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::debug_logger::DebugLogEntry;
use crate::grid::Grid;
use crate::search::SearchEngine;
use crate::types::{Direction, Mover, Position};

/// Result of replaying a single half-turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: u32,
    pub mover: Mover,
    pub original_move: Position,
    pub replayed_move: Position,
    pub matches: bool,
    pub original_score: i32,
    pub replayed_score: i32,
    pub search_depth: u8,
    pub nodes: u64,
    pub computation_time_us: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
}

/// Replay engine for analyzing debug logs
pub struct ReplayEngine {
    engine: SearchEngine,
    /// Overrides the depth recorded in each entry
    depth_override: Option<u8>,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine for the grid described by `config`
    pub fn new(config: &Config, depth_override: Option<u8>, verbose: bool) -> Result<Self, String> {
        let grid = Grid::new(config.grid.size).map_err(|e| format!("Invalid grid: {}", e))?;
        Ok(ReplayEngine {
            engine: SearchEngine::new(grid),
            depth_override,
            verbose,
        })
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<DebugLogEntry>, String> {
        let file = File::open(log_path.as_ref())
            .map_err(|e| format!("Failed to open log file: {}", e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: DebugLogEntry = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Replays a single log entry and compares the result
    pub fn replay_entry(&self, entry: &DebugLogEntry) -> Result<ReplayResult, String> {
        let depth = self.depth_override.unwrap_or(entry.depth);

        let state = entry.state;
        let start_time = Instant::now();
        let search = self
            .engine
            .analyze(&state, entry.mover, depth)
            .map_err(|e| format!("Turn {} ({}): {}", entry.turn, entry.mover, e))?;
        let computation_time = start_time.elapsed().as_micros();

        let matches = search.chosen == entry.chosen_move;

        let result = ReplayResult {
            turn: entry.turn,
            mover: entry.mover,
            original_move: entry.chosen_move,
            replayed_move: search.chosen,
            matches,
            original_score: entry.score,
            replayed_score: search.score,
            search_depth: depth,
            nodes: search.nodes,
            computation_time_us: computation_time,
        };

        if self.verbose {
            if matches {
                info!(
                    "Turn {} ({}): MATCH - {} (score: {}, depth: {}, nodes: {})",
                    entry.turn, entry.mover, search.chosen, search.score, depth, search.nodes
                );
            } else {
                warn!(
                    "Turn {} ({}): MISMATCH - Original: {}, Replayed: {} (score: {}, depth: {})",
                    entry.turn, entry.mover, entry.chosen_move, search.chosen, search.score, depth
                );
            }
        }

        Ok(result)
    }

    /// Replays all entries in a log file, skipping entries that fail
    pub fn replay_all(&self, entries: &[DebugLogEntry]) -> Vec<ReplayResult> {
        entries
            .iter()
            .filter_map(|entry| match self.replay_entry(entry) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", entry.turn, e);
                    None
                }
            })
            .collect()
    }

    /// Replays both half-turns of each requested round
    pub fn replay_turns(
        &self,
        entries: &[DebugLogEntry],
        turn_numbers: &[u32],
    ) -> Result<Vec<ReplayResult>, String> {
        let mut results = Vec::new();

        for turn_num in turn_numbers {
            let selected: Vec<&DebugLogEntry> =
                entries.iter().filter(|e| e.turn == *turn_num).collect();
            if selected.is_empty() {
                return Err(format!("Turn {} not found in log file", turn_num));
            }

            for entry in selected {
                match self.replay_entry(entry) {
                    Ok(result) => results.push(result),
                    Err(e) => warn!("Failed to replay turn {}: {}", turn_num, e),
                }
            }
        }

        Ok(results)
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let matches = results.iter().filter(|r| r.matches).count();
        let mismatches = total_turns - matches;
        let match_rate = if total_turns > 0 {
            (matches as f64 / total_turns as f64) * 100.0
        } else {
            0.0
        };

        ReplayStats {
            total_turns,
            matches,
            mismatches,
            match_rate,
        }
    }

    /// Prints a detailed report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = self.generate_stats(results);

        println!("\n═══════════════════════════════════════════════════════════");
        println!("                    REPLAY REPORT");
        println!("═══════════════════════════════════════════════════════════");
        println!("Half-turns:     {}", stats.total_turns);
        println!("Matches:        {} ({:.1}%)", stats.matches, stats.match_rate);
        println!("Mismatches:     {}", stats.mismatches);
        println!("═══════════════════════════════════════════════════════════\n");

        if !results.is_empty() {
            let avg_time: f64 = results
                .iter()
                .map(|r| r.computation_time_us as f64)
                .sum::<f64>()
                / results.len() as f64;
            let avg_nodes: f64 =
                results.iter().map(|r| r.nodes as f64).sum::<f64>() / results.len() as f64;

            println!("Average Nodes Visited:      {:.1}", avg_nodes);
            println!("Average Computation Time:   {:.1}us\n", avg_time);
        }

        let mismatches: Vec<_> = results.iter().filter(|r| !r.matches).collect();
        if !mismatches.is_empty() {
            println!("═══════════════════════════════════════════════════════════");
            println!("                  DETAILED MISMATCHES");
            println!("═══════════════════════════════════════════════════════════");

            for result in mismatches {
                println!(
                    "Turn {} ({}): {} → {} (score: {} → {}, depth: {})",
                    result.turn,
                    result.mover,
                    result.original_move,
                    result.replayed_move,
                    result.original_score,
                    result.replayed_score,
                    result.search_depth
                );
            }
            println!();
        }
    }

    /// Validates that specific expected moves were logged
    pub fn validate_expected_moves(
        &self,
        entries: &[DebugLogEntry],
        expected_moves: &[(u32, Mover, Vec<Direction>)], // (turn, mover, acceptable_moves)
    ) -> Result<(), String> {
        for (turn, mover, acceptable) in expected_moves {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn && e.mover == *mover)
                .ok_or_else(|| format!("Turn {} ({}) not found in log", turn, mover))?;

            let from = entry.state.position_of(*mover);
            let actual = Direction::between(&from, &entry.chosen_move).ok_or_else(|| {
                format!(
                    "Turn {} ({}): logged move {} is not a single step from {}",
                    turn, mover, entry.chosen_move, from
                )
            })?;

            if !acceptable.contains(&actual) {
                return Err(format!(
                    "Turn {} ({}): Expected one of {:?}, but got {}",
                    turn,
                    mover,
                    acceptable.iter().map(|d| d.as_str()).collect::<Vec<_>>(),
                    actual.as_str()
                ));
            }
        }

        Ok(())
    }

    /// Helper to parse direction string
    pub fn parse_direction(s: &str) -> Result<Direction, String> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(format!("Invalid direction: {}", s)),
        }
    }

    /// Helper to parse mover string
    pub fn parse_mover(s: &str) -> Result<Mover, String> {
        match s.to_lowercase().as_str() {
            "pursued" => Ok(Mover::Pursued),
            "pursuer" => Ok(Mover::Pursuer),
            _ => Err(format!("Invalid mover: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;

    fn entry(turn: u32, mover: Mover, chosen: Position) -> DebugLogEntry {
        DebugLogEntry {
            turn,
            mover,
            state: GameState {
                pursued: Position::new(0, 0),
                pursuer: Position::new(4, 4),
                escape: Position::new(4, 0),
            },
            chosen_move: chosen,
            score: 3,
            depth: 3,
            timestamp: "2025-01-01T00:00:00+00:00".to_string(),
        }
    }

    fn replay_engine() -> ReplayEngine {
        ReplayEngine::new(&Config::default_hardcoded(), None, false).unwrap()
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(ReplayEngine::parse_direction("up").unwrap(), Direction::Up);
        assert_eq!(ReplayEngine::parse_direction("Down").unwrap(), Direction::Down);
        assert_eq!(ReplayEngine::parse_direction("LEFT").unwrap(), Direction::Left);
        assert!(ReplayEngine::parse_direction("invalid").is_err());
    }

    #[test]
    fn test_parse_mover() {
        assert_eq!(ReplayEngine::parse_mover("Pursuer").unwrap(), Mover::Pursuer);
        assert!(ReplayEngine::parse_mover("cat").is_err());
    }

    #[test]
    fn test_replay_entry_matches_logged_move() {
        let result = replay_engine()
            .replay_entry(&entry(0, Mover::Pursued, Position::new(1, 0)))
            .unwrap();
        assert!(result.matches);
        assert_eq!(result.replayed_score, 3);
        assert_eq!(result.nodes, 19);
    }

    #[test]
    fn test_replay_entry_flags_mismatch() {
        let result = replay_engine()
            .replay_entry(&entry(0, Mover::Pursued, Position::new(0, 1)))
            .unwrap();
        assert!(!result.matches);
        assert_eq!(result.replayed_move, Position::new(1, 0));
    }

    #[test]
    fn test_replay_rejects_out_of_bounds_state() {
        let engine = ReplayEngine::new(&Config::default_hardcoded(), None, false).unwrap();
        let mut bad = entry(0, Mover::Pursued, Position::new(1, 0));
        bad.state.pursuer = Position::new(9, 9);
        assert!(engine.replay_entry(&bad).is_err());
        assert!(engine.replay_all(&[bad]).is_empty());
    }

    #[test]
    fn test_stats() {
        let engine = replay_engine();
        let results = engine.replay_all(&[
            entry(0, Mover::Pursued, Position::new(1, 0)),
            entry(1, Mover::Pursued, Position::new(0, 1)),
        ]);
        let stats = engine.generate_stats(&results);
        assert_eq!(stats.total_turns, 2);
        assert_eq!(stats.matches, 1);
        assert_eq!(stats.mismatches, 1);
        assert!((stats.match_rate - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_replay_turns_missing_turn() {
        let engine = replay_engine();
        let entries = vec![entry(0, Mover::Pursued, Position::new(1, 0))];
        assert!(engine.replay_turns(&entries, &[7]).is_err());
        assert_eq!(engine.replay_turns(&entries, &[0]).unwrap().len(), 1);
    }

    #[test]
    fn test_validate_expected_moves() {
        let engine = replay_engine();
        let entries = vec![entry(0, Mover::Pursued, Position::new(1, 0))];
        assert!(engine
            .validate_expected_moves(&entries, &[(0, Mover::Pursued, vec![Direction::Right])])
            .is_ok());
        assert!(engine
            .validate_expected_moves(&entries, &[(0, Mover::Pursued, vec![Direction::Down])])
            .is_err());
        assert!(engine
            .validate_expected_moves(&entries, &[(0, Mover::Pursuer, vec![Direction::Left])])
            .is_err());
    }
}
