//! Arena CLI
//!
//! Play engine-vs-engine series and record the results.

use arena::{ArenaResults, MatchConfig, MatchRunner};
use game_core::Engine;
use negamax_engine::NegamaxEngine;
use random_engine::RandomEngine;
use std::env;
use std::path::Path;

fn print_usage() {
    println!("Chess Arena");
    println!();
    println!("Usage:");
    println!("  arena [engine1] [engine2] [options]");
    println!();
    println!("Engines:");
    println!("  negamax       - Fixed-depth negamax with material eval");
    println!("  negamax:N     - Negamax at explicit depth N");
    println!("  random        - Uniform random mover");
    println!();
    println!("Options:");
    println!("  --games N, -g N      Number of games to play");
    println!("  --depth D, -d D      Search depth for negamax sides");
    println!("  --max-plies N        Plies before a game is drawn");
    println!("  --config FILE, -c    Load settings from a TOML file");
    println!("  --out FILE, -o       Where to write the JSON results");
    println!("  --no-alternate       Keep engine1 on white every game");
    println!("  --shuffle            Toss a coin for who starts white");
    println!("  --quiet, -q          Suppress per-game progress lines");
    println!();
    println!("Examples:");
    println!("  arena negamax random --games 20 --depth 2");
    println!("  arena negamax:3 negamax:1 --games 10 --shuffle");
}

fn create_engine(spec: &str, default_depth: u8) -> Box<dyn Engine> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "negamax" | "nm" => {
            let depth = if parts.len() > 1 {
                parts[1].parse().unwrap_or(default_depth)
            } else {
                default_depth
            };
            Box::new(NegamaxEngine::with_depth(depth))
        }
        "random" | "rand" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {} (using random)", spec);
            Box::new(RandomEngine::new())
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h" || a == "help") {
        print_usage();
        return;
    }

    let mut config = MatchConfig::default();
    let mut out_path = String::from("arena_results.json");
    let mut positional: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.depth = args[i + 1].parse().unwrap_or(config.depth);
                    i += 1;
                }
            }
            "--max-plies" => {
                if i + 1 < args.len() {
                    config.max_plies = args[i + 1].parse().unwrap_or(config.max_plies);
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match MatchConfig::from_toml_file(&args[i + 1]) {
                        Ok(loaded) => config = loaded,
                        Err(e) => eprintln!("Warning: {}", e),
                    }
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--no-alternate" => config.alternate_colors = false,
            "--shuffle" => config.shuffle_start = true,
            "--quiet" | "-q" => config.verbose = false,
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let engine1_spec = positional.first().cloned().unwrap_or_else(|| "negamax".to_string());
    let engine2_spec = positional.get(1).cloned().unwrap_or_else(|| "random".to_string());

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Depth: {}, Ply cap: {}",
        config.num_games, config.depth, config.max_plies
    );
    println!();

    let mut engine1 = create_engine(&engine1_spec, config.depth);
    let mut engine2 = create_engine(&engine2_spec, config.depth);

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    println!();

    let mut results = ArenaResults::new(
        &format!("{} vs {}", engine1_spec, engine2_spec),
        vec![engine1_spec.clone(), engine2_spec.clone()],
        config,
    );
    results.add_match(&engine1_spec, &engine2_spec, result);
    results.print_report();

    if let Err(e) = results.save(Path::new(&out_path)) {
        eprintln!("Warning: Failed to save results: {}", e);
    } else {
        println!("Results written to {}", out_path);
    }
}
