use crate::board::Position;
use crate::types::*;

/// A fully described move: where it goes, what it moves, what it takes.
/// Carrying the captured piece on the move itself is what lets `undo`
/// restore the board without re-deriving anything.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
}

impl Move {
    pub fn new(from: Square, to: Square, moved: Piece, captured: Option<Piece>) -> Self {
        let is_promotion = moved.kind == PieceKind::Pawn
            && ((moved.color == Color::White && to.row == 0)
                || (moved.color == Color::Black && to.row == 7));
        Self {
            from,
            to,
            moved,
            captured,
            is_en_passant: false,
            is_castle: false,
            is_promotion,
        }
    }

    /// En-passant capture: the landing square is empty, the victim pawn
    /// stands beside it on the from-row.
    pub fn en_passant(from: Square, to: Square, moved: Piece) -> Self {
        Self {
            from,
            to,
            moved,
            captured: Some(Piece::new(moved.color.other(), PieceKind::Pawn)),
            is_en_passant: true,
            is_castle: false,
            is_promotion: false,
        }
    }

    /// Castling, encoded as the king's two-square shift. The rook
    /// relocation is handled by `Position::make_move`.
    pub fn castle(from: Square, to: Square, moved: Piece) -> Self {
        Self {
            from,
            to,
            moved,
            captured: None,
            is_en_passant: false,
            is_castle: true,
            is_promotion: false,
        }
    }

    /// Build a move from a square pair by reading the current board.
    /// Returns None when the from-square is empty. Drivers use this to
    /// turn user input into a probe that is then matched (by identity)
    /// against the legal-move list, so the castle and en-passant flags
    /// stay false here; the matched list entry carries the real ones.
    pub fn describe(from: Square, to: Square, pos: &Position) -> Option<Move> {
        let moved = pos.piece_at(from)?;
        Some(Move::new(from, to, moved, pos.piece_at(to)))
    }

    /// Deterministic identity: four board coordinates packed in decimal.
    /// Two moves over the same squares are the same move regardless of
    /// how much else they happen to describe.
    pub fn id(self) -> u32 {
        self.from.row as u32 * 1000
            + self.from.col as u32 * 100
            + self.to.row as u32 * 10
            + self.to.col as u32
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.id() == other.id()
    }
}
impl Eq for Move {}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
