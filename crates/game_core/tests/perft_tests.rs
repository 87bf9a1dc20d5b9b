use std::time::Instant;

use rayon::prelude::*;

use game_core::{perft, Position};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 100_000;

// Known node counts from the standard starting position.
const START_COUNTS: [(u8, u64); 5] = [
    (1, 20),
    (2, 400),
    (3, 8_902),
    (4, 197_281),
    (5, 4_865_609),
];

#[test]
fn perft_zero_depth_counts_one() {
    let mut pos = Position::new();
    assert_eq!(perft(&mut pos, 0), 1);
}

#[test]
fn perft_from_start_position() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    let cases: Vec<(u8, u64)> = START_COUNTS
        .iter()
        .copied()
        .filter(|&(depth, expected)| {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping perft depth {} ({} nodes); set {}=1 to run it.",
                    depth, expected, FULL_PERFT_ENV
                );
                return false;
            }
            true
        })
        .collect();

    cases.par_iter().for_each(|&(depth, expected)| {
        let start = Instant::now();
        let mut pos = Position::new();
        let got = perft(&mut pos, depth);
        assert_eq!(
            got, expected,
            "perft mismatch at depth {}: expected {}, got {}",
            depth, expected, got
        );
        eprintln!(
            "perft depth {} = {} nodes in {:.2?}",
            depth,
            got,
            start.elapsed()
        );
    });
}
