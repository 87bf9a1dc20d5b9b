//! Random Move Engine
//!
//! Picks uniformly at random from the legal moves it is handed.
//! Useful for:
//! - Baseline comparisons (any real engine should easily beat this)
//! - Fallback play when a stronger engine declines to move
//! - Stress testing move generation through long playouts

use game_core::{Engine, Move, Position};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// Selects a move uniformly at random from a legal move set.
///
/// Returns `None` when the set is empty, which matches the engine
/// contract for checkmated and stalemated positions.
pub fn random_move(legal: &[Move]) -> Option<Move> {
    legal.choose(&mut thread_rng()).copied()
}

/// An engine that plays random legal moves.
///
/// It does no evaluation at all, so it doubles as the simplest
/// possible opponent and as the fallback mover the drivers use.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, _pos: &mut Position, legal: &[Move]) -> Option<Move> {
        random_move(legal)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
