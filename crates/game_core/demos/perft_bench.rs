//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p game_core -- [depth] [scramble_plies]
//!
//! Examples:
//!   # Default: depth 4 from the starting position
//!   cargo flamegraph --example perft_bench -p game_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p game_core -- 5
//!
//!   # Depth 4 after 12 seeded random opening plies
//!   cargo flamegraph --example perft_bench -p game_core -- 4 12

use std::env;
use std::time::Instant;

use game_core::{legal_moves, move_text, perft, Position};
use rand::prelude::*;

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);
    let scramble: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    let mut pos = Position::new();
    if scramble > 0 {
        // Fixed seed so repeated profiling runs hit the same position.
        let mut rng = StdRng::seed_from_u64(42);
        let mut line = Vec::new();
        for _ in 0..scramble {
            let moves = legal_moves(&mut pos);
            let mv = match moves.choose(&mut rng) {
                Some(&m) => m,
                None => break,
            };
            pos.make_move(mv);
            line.push(move_text(mv));
        }
        println!("Scrambled opening: {}", line.join(" "));
    } else {
        println!("Position: standard start");
    }
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&mut pos, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = perft(&mut pos, depth);
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}
