pub mod board;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export the game model (not engine-specific)
pub use board::*;
pub use movegen::*;
pub use moves::Move;
pub use notation::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait - implemented by all move-choosing engines
// =============================================================================

/// Trait that all engines must implement.
///
/// Drivers hand the engine the live position plus the legal moves they
/// just fetched for it; the engine may simulate on the position as long
/// as it leaves it exactly as received.
pub trait Engine: Send {
    /// Pick a move from `legal`. None means the engine has nothing to
    /// offer (no legal moves, or a search that came back empty); the
    /// caller is expected to fall back to a random legal move if any
    /// exist.
    fn choose_move(&mut self, pos: &mut Position, legal: &[Move]) -> Option<Move>;

    /// Display name for reports and logs.
    fn name(&self) -> &str;
}
