//! Material-based position evaluation

use game_core::{Color, PieceKind, Position, Square};

/// Score of a delivered mate; search windows open at plus/minus this.
pub const MATE_SCORE: i32 = 1000;
pub const STALEMATE_SCORE: i32 = 0;

/// Evaluates the position from white's perspective: positive favors
/// white, negative favors black. The terminal flags take precedence
/// over material, so this must be called with the flags current for
/// the position (i.e. after its legal moves were enumerated).
pub fn evaluate(pos: &Position) -> i32 {
    if pos.checkmate {
        return match pos.side_to_move {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        };
    }
    if pos.stalemate {
        return STALEMATE_SCORE;
    }
    material(pos)
}

/// Plain material count, white minus black.
pub fn material(pos: &Position) -> i32 {
    let mut score = 0i32;
    for row in 0..8 {
        for col in 0..8 {
            if let Some(pc) = pos.piece_at(Square::new(row, col)) {
                let v = piece_value(pc.kind);
                score += if pc.color == Color::White { v } else { -v };
            }
        }
    }
    score
}

#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 10,
        PieceKind::King => 0,
    }
}
