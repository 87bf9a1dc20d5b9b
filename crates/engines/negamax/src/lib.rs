//! Negamax Chess Engine
//!
//! Fixed-depth negamax with alpha-beta pruning over a plain material
//! evaluation. The project's reference opponent: strong enough to
//! punish hung pieces, cheap enough to answer instantly at the default
//! depth.

mod eval;
mod search;

use game_core::{Engine, Move, Position};

pub use eval::{evaluate, material, piece_value, MATE_SCORE, STALEMATE_SCORE};
pub use search::{search, SearchOutcome};

pub const DEFAULT_DEPTH: u8 = 2;

/// Engine wrapper around the negamax search.
#[derive(Debug, Clone)]
pub struct NegamaxEngine {
    depth: u8,
}

impl NegamaxEngine {
    pub fn new() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for NegamaxEngine {
    fn choose_move(&mut self, pos: &mut Position, legal: &[Move]) -> Option<Move> {
        search::search(pos, legal, self.depth).best_move
    }

    fn name(&self) -> &str {
        "Negamax v1.0"
    }
}
