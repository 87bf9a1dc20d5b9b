//! Move generation benchmark for profiling with cargo-flamegraph.
//!
//! Runs many iterations of legal_moves on positions reached through
//! fixed opening lines, covering different board textures.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p game_core

use std::time::Instant;

use game_core::{legal_moves, notation::parse_square_pair, Position};

/// Named positions given as move sequences from the standard start.
const TEST_LINES: &[(&str, &[&str])] = &[
    ("Start", &[]),
    ("King's pawn", &["e2e4"]),
    ("Sicilian", &["e2e4", "c7c5", "g1f3"]),
    (
        "Italian",
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5"],
    ),
    ("Queen's gambit", &["d2d4", "d7d5", "c2c4"]),
    (
        "Castled",
        &[
            "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1", "f8e7",
        ],
    ),
];

const ITERATIONS: usize = 20_000;

fn position_after(line: &[&str]) -> Position {
    let mut pos = Position::new();
    for text in line {
        let legal = legal_moves(&mut pos);
        let (from, to) = parse_square_pair(text).expect("bad move text in line");
        let mv = legal
            .iter()
            .copied()
            .find(|m| m.from == from && m.to == to)
            .unwrap_or_else(|| panic!("{text} is not legal in this line"));
        pos.make_move(mv);
    }
    pos
}

fn main() {
    println!("=== Move Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut total_moves = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, line) in TEST_LINES {
        let mut pos = position_after(line);

        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_generated = 0usize;

        for _ in 0..ITERATIONS {
            moves_generated += legal_moves(&mut pos).len();
        }

        let elapsed = start.elapsed();
        total_moves += moves_generated;
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / ITERATIONS as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {moves_per_pos:>5.1} moves/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    let avg_pps = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * TEST_LINES.len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_moves} moves in {total_time:.3?} ({avg_pps:.0} positions/sec)");
}
