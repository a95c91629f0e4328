// Integration tests for the turn loop, the debug log and replay
//
// Plays full matches from the default layout, writes them through the
// debug logger, then replays the log and expects every decision to match.

use pursuit_minimax::config::Config;
use pursuit_minimax::debug_logger::DebugLogger;
use pursuit_minimax::game::Match;
use pursuit_minimax::replay::ReplayEngine;
use pursuit_minimax::{Mover, PursuitError};

/// Test: the default game ends or hits the cap, with alternating movers
#[test]
fn test_default_match_alternates_and_finishes() {
    let config = Config::default_hardcoded();
    let result = Match::from_config(&config).unwrap().run().unwrap();

    assert!(!result.history.is_empty());
    for (i, half_turn) in result.history.iter().enumerate() {
        let expected = if i % 2 == 0 { Mover::Pursued } else { Mover::Pursuer };
        assert_eq!(half_turn.mover, expected);
        assert_eq!(half_turn.turn, (i / 2) as u32);
    }

    match result.outcome {
        Some(_) => assert!(result.final_state.is_terminal()),
        None => assert_eq!(result.turns, config.game.max_turns),
    }
}

/// Test: the same configuration always plays the same game
#[test]
fn test_matches_are_reproducible() {
    let config = Config::default_hardcoded();
    let first = Match::from_config(&config).unwrap().run().unwrap();
    let second = Match::from_config(&config).unwrap().run().unwrap();
    assert_eq!(first.history, second.history);
    assert_eq!(first.outcome, second.outcome);
}

/// Test: invalid configuration surfaces as a typed error
#[test]
fn test_match_from_invalid_config() {
    let mut config = Config::default_hardcoded();
    config.game.pursuer_start.x = 7;
    assert_eq!(
        Match::from_config(&config).err(),
        Some(PursuitError::OutOfBounds { x: 7, y: 4, size: 5 })
    );
}

/// Test: a logged match replays with every move matching
#[tokio::test]
async fn test_logged_match_replays_identically() {
    let path = std::env::temp_dir().join("pursuit_match_replay_test.jsonl");
    let path_str = path.to_string_lossy().to_string();

    let mut config = Config::default_hardcoded();
    config.game.max_turns = 10;

    let logger = DebugLogger::new(true, &path_str).await;
    let mut game = Match::from_config(&config).unwrap();
    while !game.is_finished() {
        let half_turn = game.step().unwrap();
        logger.log_half_turn(&half_turn, game.depth()).await;
    }
    let played = game.finish().history.len();

    let replay = ReplayEngine::new(&config, None, true).unwrap();
    let entries = replay.load_log_file(&path).unwrap();
    assert_eq!(entries.len(), played);

    let results = replay.replay_all(&entries);
    let stats = replay.generate_stats(&results);
    assert_eq!(stats.total_turns, played);
    assert_eq!(stats.mismatches, 0);

    let _ = std::fs::remove_file(&path);
}

/// Test: replaying at a different depth still produces legal decisions
#[tokio::test]
async fn test_replay_with_depth_override() {
    let path = std::env::temp_dir().join("pursuit_depth_override_test.jsonl");
    let path_str = path.to_string_lossy().to_string();

    let mut config = Config::default_hardcoded();
    config.game.max_turns = 3;

    let logger = DebugLogger::new(true, &path_str).await;
    let mut game = Match::from_config(&config).unwrap();
    while !game.is_finished() {
        let half_turn = game.step().unwrap();
        logger.log_half_turn(&half_turn, game.depth()).await;
    }

    let replay = ReplayEngine::new(&config, Some(1), false).unwrap();
    let entries = replay.load_log_file(&path).unwrap();
    let results = replay.replay_all(&entries);
    assert_eq!(results.len(), entries.len());
    assert!(results.iter().all(|r| r.search_depth == 1));

    let _ = std::fs::remove_file(&path);
}
