// Standalone replay tool for analyzing pursuit debug logs
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --all                  Replay all half-turns
//   --turns <turn1,turn2>  Replay specific rounds (comma-separated)
//   --validate             Check logged moves against expectations
//   --depth <n>            Search depth to replay with (default: logged depth)
//   --verbose              Show detailed output for each half-turn
//   --config <path>        Path to Pursuit.toml (default: Pursuit.toml)

use std::env;
use std::process;

use pursuit_minimax::config::Config;
use pursuit_minimax::replay::ReplayEngine;
use pursuit_minimax::types::{Direction, Mover};

fn print_usage() {
    eprintln!("Pursuit Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --all                      Replay all half-turns in the log");
    eprintln!("  --turns <T1,T2,...>        Replay specific rounds (comma-separated)");
    eprintln!("  --validate <T:M:D,...>     Validate logged moves (format: turn:mover:dir)");
    eprintln!("  --depth <N>                Override the logged search depth");
    eprintln!("  --verbose                  Show detailed output for each half-turn");
    eprintln!("  --config <path>            Path to Pursuit.toml (default: Pursuit.toml)");
    eprintln!("  --help                     Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  replay pursuit_debug.jsonl --all");
    eprintln!("  replay pursuit_debug.jsonl --turns 0,3 --depth 5");
    eprintln!("  replay pursuit_debug.jsonl --validate 0:pursued:right,0:pursuer:left|up");
}

fn parse_turns(s: &str) -> Result<Vec<u32>, String> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<u32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", t, e))
        })
        .collect()
}

fn parse_expected_moves(s: &str) -> Result<Vec<(u32, Mover, Vec<Direction>)>, String> {
    s.split(',')
        .map(|triple| {
            let parts: Vec<&str> = triple.trim().split(':').collect();
            if parts.len() != 3 {
                return Err(format!(
                    "Invalid format '{}'. Expected 'turn:mover:move'",
                    triple
                ));
            }

            let turn = parts[0]
                .parse::<u32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", parts[0], e))?;
            let mover = ReplayEngine::parse_mover(parts[1])?;

            // Several acceptable moves separated by '|'
            let moves = parts[2]
                .split('|')
                .map(|m| ReplayEngine::parse_direction(m.trim()))
                .collect::<Result<Vec<Direction>, String>>()?;

            Ok((turn, mover, moves))
        })
        .collect()
}

fn option_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i + 1) {
        Some(value) => value,
        None => {
            eprintln!("Error: {} requires an argument", flag);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.contains(&"--help".to_string()) {
        print_usage();
        process::exit(if args.contains(&"--help".to_string()) {
            0
        } else {
            1
        });
    }

    let log_file = &args[1];
    let mut config_path = "Pursuit.toml".to_string();
    let mut verbose = false;
    let mut depth = None;
    let mut turns_arg = None;
    let mut validate_arg = None;
    let mut replay_all = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--all" => replay_all = true,
            "--turns" => {
                turns_arg = Some(option_value(&args, i, "--turns").to_string());
                i += 1;
            }
            "--validate" => {
                validate_arg = Some(option_value(&args, i, "--validate").to_string());
                i += 1;
            }
            "--depth" => {
                let value = option_value(&args, i, "--depth");
                match value.parse::<u8>() {
                    Ok(d) => depth = Some(d),
                    Err(e) => {
                        eprintln!("Error: invalid depth '{}': {}", value, e);
                        process::exit(1);
                    }
                }
                i += 1;
            }
            "--config" => {
                config_path = option_value(&args, i, "--config").to_string();
                i += 1;
            }
            "--verbose" => verbose = true,
            _ => {
                eprintln!("Error: Unknown option '{}'", args[i]);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if !replay_all && turns_arg.is_none() && validate_arg.is_none() {
        eprintln!("Error: Must specify --all, --turns, or --validate");
        print_usage();
        process::exit(1);
    }

    let config = Config::from_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from '{}': {}", config_path, e);
        eprintln!("Using default configuration");
        Config::default_hardcoded()
    });

    println!("Loaded configuration from: {}", config_path);
    println!("Replay log file: {}", log_file);
    println!();

    let engine = match ReplayEngine::new(&config, depth, verbose) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let entries = match engine.load_log_file(log_file) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error loading log file: {}", e);
            process::exit(1);
        }
    };

    if entries.is_empty() {
        eprintln!("Error: Log file is empty");
        process::exit(1);
    }

    println!("Loaded {} log entries\n", entries.len());

    if let Some(validate_arg) = validate_arg {
        let expected_moves = match parse_expected_moves(&validate_arg) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Error parsing expected moves: {}", e);
                process::exit(1);
            }
        };

        println!("Validating {} expected move(s)...\n", expected_moves.len());
        match engine.validate_expected_moves(&entries, &expected_moves) {
            Ok(()) => println!("✓ All expected moves validated successfully!"),
            Err(e) => {
                eprintln!("✗ Validation failed: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    if let Some(turns_arg) = turns_arg {
        let turns = match parse_turns(&turns_arg) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error parsing turns: {}", e);
                process::exit(1);
            }
        };

        println!("Replaying {} specific round(s)...\n", turns.len());
        match engine.replay_turns(&entries, &turns) {
            Ok(results) => engine.print_report(&results),
            Err(e) => {
                eprintln!("Error during replay: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("Replaying all {} half-turns...\n", entries.len());
    let results = engine.replay_all(&entries);
    engine.print_report(&results);
}
