//! Start position sweep
//!
//! Plays a full match from every non-terminal (pursued, pursuer) start pair
//! on the configured grid and reports how often each side wins.
//!
//! Usage: analyze_starts [--config <path>] [--depth <n>] [--list]

use std::env;
use std::process;
use std::time::Instant;

use pursuit_minimax::analysis::{sweep_starts, SweepSummary};
use pursuit_minimax::config::Config;
use pursuit_minimax::grid::Grid;
use pursuit_minimax::types::Outcome;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config_path = "Pursuit.toml".to_string();
    let mut depth_override = None;
    let mut list = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                config_path = args[i + 1].clone();
                i += 1;
            }
            "--depth" if i + 1 < args.len() => {
                match args[i + 1].parse::<u8>() {
                    Ok(d) => depth_override = Some(d),
                    Err(e) => {
                        eprintln!("Error: invalid depth '{}': {}", args[i + 1], e);
                        process::exit(1);
                    }
                }
                i += 1;
            }
            "--list" => list = true,
            other => {
                eprintln!("Usage: {} [--config <path>] [--depth <n>] [--list]", args[0]);
                eprintln!("Unknown option: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = Config::from_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from '{}': {}", config_path, e);
        Config::default_hardcoded()
    });
    let depth = depth_override.unwrap_or(config.search.depth);

    let grid = match Grid::new(config.grid.size) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("\n═══════════════════════════════════════════════════════════");
    println!("              START POSITION SWEEP");
    println!("═══════════════════════════════════════════════════════════");
    println!("Grid:           {}x{}", grid.size(), grid.size());
    println!("Escape:         {}", config.game.escape);
    println!("Depth:          {}", depth);
    println!("Max Turns:      {}", config.game.max_turns);
    println!("Threads:        {}", rayon::current_num_threads());
    println!("═══════════════════════════════════════════════════════════\n");

    let start_time = Instant::now();
    let reports = match sweep_starts(grid, config.game.escape, depth, config.game.max_turns) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let elapsed = start_time.elapsed();

    if list {
        for report in &reports {
            let outcome = match report.outcome {
                Some(Outcome::Escaped) => "escaped",
                Some(Outcome::Captured) => "captured",
                None => "undecided",
            };
            println!(
                "pursued {} vs pursuer {}: {} in {} turn(s)",
                report.pursued_start, report.pursuer_start, outcome, report.turns
            );
        }
        println!();
    }

    let summary = SweepSummary::from_reports(&reports);
    let pct = |n: usize| {
        if summary.games == 0 {
            0.0
        } else {
            n as f64 * 100.0 / summary.games as f64
        }
    };

    println!("Games:          {}", summary.games);
    println!("Escaped:        {} ({:.1}%)", summary.escaped, pct(summary.escaped));
    println!("Captured:       {} ({:.1}%)", summary.captured, pct(summary.captured));
    println!("Undecided:      {} ({:.1}%)", summary.undecided, pct(summary.undecided));
    println!("Average Turns:  {:.1}", summary.average_turns());
    println!("Elapsed:        {}ms", elapsed.as_millis());
}
