// Headless pursuit match driver
//
// Plays one game between the two search-driven agents using the layout in
// Pursuit.toml, logging every half-turn and pausing between them.

use log::{error, info};
use std::env;
use std::process;
use std::time::Duration;

use pursuit_minimax::config::Config;
use pursuit_minimax::debug_logger::DebugLogger;
use pursuit_minimax::game::Match;

#[tokio::main]
async fn main() {
    // We default to 'info' level logging. But if the `RUST_LOG` environment variable is set,
    // we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    info!("Starting pursuit match...");

    let config = Config::load_or_default();
    let mut game = match Match::from_config(&config) {
        Ok(game) => game,
        Err(e) => {
            error!("Invalid game setup: {}", e);
            process::exit(1);
        }
    };

    info!(
        "Grid {}x{}, escape at {}, pursued at {}, pursuer at {}, depth {}",
        config.grid.size,
        config.grid.size,
        game.state().escape,
        game.state().pursued,
        game.state().pursuer,
        game.depth()
    );

    let logger = DebugLogger::new(config.debug.enabled, &config.debug.log_file_path).await;
    let delay = Duration::from_millis(config.timing.half_turn_delay_ms);

    while !game.is_finished() {
        let half_turn = match game.step() {
            Ok(half_turn) => half_turn,
            Err(e) => {
                error!("Search failed: {}", e);
                process::exit(1);
            }
        };
        logger.log_half_turn(&half_turn, game.depth()).await;

        if !delay.is_zero() && !game.is_finished() {
            tokio::time::sleep(delay).await;
        }
    }

    let result = game.finish();
    match result.outcome {
        Some(outcome) => info!("Result: {} after {} turn(s)", outcome, result.turns),
        None => info!(
            "Result: undecided after {} turn(s) (pursued at {}, pursuer at {})",
            result.turns, result.final_state.pursued, result.final_state.pursuer
        ),
    }
}
