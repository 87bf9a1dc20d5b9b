use crate::board::Position;
use crate::moves::Move;
use crate::types::*;

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, 1), (-1, -1), (1, -1), (1, 1)];
const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];
const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Generate all legal moves for the side to move and refresh the
/// position's terminal flags: an empty result sets checkmate when the
/// king is attacked and stalemate otherwise, a non-empty result clears
/// both. Simulation runs on the position itself; every make is paired
/// with an undo, so the caller sees it unchanged apart from the flags.
pub fn legal_moves(pos: &mut Position) -> Vec<Move> {
    let mover = pos.side_to_move;
    let mut out = pseudo_moves(pos, mover);
    castle_moves(pos, mover, &mut out);

    // Filter out anything that leaves the mover's own king en prise.
    out.retain(|&mv| {
        pos.make_move(mv);
        let illegal = in_check(pos, mover);
        pos.undo();
        !illegal
    });

    if out.is_empty() {
        if in_check(pos, mover) {
            pos.checkmate = true;
        } else {
            pos.stalemate = true;
        }
    } else {
        pos.checkmate = false;
        pos.stalemate = false;
    }
    out
}

/// Every geometrically possible move for `side`, ignoring king safety.
/// Castling is not included here; see `castle_moves`.
pub fn pseudo_moves(pos: &Position, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for row in 0..8 {
        for col in 0..8 {
            let from = Square::new(row, col);
            let pc = match pos.piece_at(from) {
                Some(p) => p,
                None => continue,
            };
            if pc.color != side {
                continue;
            }
            match pc.kind {
                PieceKind::Pawn => gen_pawn(pos, from, pc, &mut out),
                PieceKind::Rook => ray_moves(pos, from, pc, &ROOK_DIRS, &mut out),
                PieceKind::Knight => gen_knight(pos, from, pc, &mut out),
                PieceKind::Bishop => ray_moves(pos, from, pc, &BISHOP_DIRS, &mut out),
                PieceKind::Queen => ray_moves(pos, from, pc, &QUEEN_DIRS, &mut out),
                PieceKind::King => gen_king(pos, from, pc, &mut out),
            }
        }
    }
    out
}

fn gen_pawn(pos: &Position, from: Square, pc: Piece, out: &mut Vec<Move>) {
    let dir: i8 = match pc.color {
        Color::White => -1,
        Color::Black => 1,
    };
    let home_row = match pc.color {
        Color::White => 6,
        Color::Black => 1,
    };

    // Pushes. The double step hides behind an empty single step.
    if let Some(one) = from.offset(dir, 0) {
        if pos.piece_at(one).is_none() {
            out.push(Move::new(from, one, pc, None));
            if from.row == home_row {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if pos.piece_at(two).is_none() {
                        out.push(Move::new(from, two, pc, None));
                    }
                }
            }
        }
    }

    // Diagonal captures, ordinary or en passant.
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            match pos.piece_at(to) {
                Some(target) if target.color != pc.color => {
                    out.push(Move::new(from, to, pc, Some(target)));
                }
                None if pos.en_passant == Some(to) => {
                    out.push(Move::en_passant(from, to, pc));
                }
                _ => {}
            }
        }
    }
}

fn gen_knight(pos: &Position, from: Square, pc: Piece, out: &mut Vec<Move>) {
    for (dr, dc) in KNIGHT_JUMPS {
        if let Some(to) = from.offset(dr, dc) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to, pc, None)),
                Some(target) if target.color != pc.color => {
                    out.push(Move::new(from, to, pc, Some(target)))
                }
                _ => {}
            }
        }
    }
}

fn gen_king(pos: &Position, from: Square, pc: Piece, out: &mut Vec<Move>) {
    for (dr, dc) in KING_STEPS {
        if let Some(to) = from.offset(dr, dc) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to, pc, None)),
                Some(target) if target.color != pc.color => {
                    out.push(Move::new(from, to, pc, Some(target)))
                }
                _ => {}
            }
        }
    }
}

/// Walk each direction until the board edge or the first occupied square,
/// which is included only when it holds an opposing piece. Shared by
/// rook, bishop and queen through their direction tables.
fn ray_moves(pos: &Position, from: Square, pc: Piece, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut next = from.offset(dr, dc);
        while let Some(to) = next {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to, pc, None)),
                Some(target) => {
                    if target.color != pc.color {
                        out.push(Move::new(from, to, pc, Some(target)));
                    }
                    break;
                }
            }
            next = to.offset(dr, dc);
        }
    }
}

/// Append castling candidates for `side`: the right must survive, the
/// squares between king and rook must be empty, and the king may not
/// stand on, cross, or land on an attacked square. The move itself only
/// encodes the king's two-square shift.
pub fn castle_moves(pos: &Position, side: Color, out: &mut Vec<Move>) {
    let king = pos.king_square(side);
    if square_under_attack(pos, king, side.other()) {
        return; // no castling out of check
    }
    if pos.castling.kingside(side) {
        kingside_castle(pos, king, side, out);
    }
    if pos.castling.queenside(side) {
        queenside_castle(pos, king, side, out);
    }
}

fn kingside_castle(pos: &Position, king: Square, side: Color, out: &mut Vec<Move>) {
    let (one, two) = match (king.offset(0, 1), king.offset(0, 2)) {
        (Some(a), Some(b)) => (a, b),
        _ => return,
    };
    if pos.piece_at(one).is_none()
        && pos.piece_at(two).is_none()
        && !square_under_attack(pos, one, side.other())
        && !square_under_attack(pos, two, side.other())
    {
        out.push(Move::castle(king, two, Piece::new(side, PieceKind::King)));
    }
}

fn queenside_castle(pos: &Position, king: Square, side: Color, out: &mut Vec<Move>) {
    let (one, two, three) = match (king.offset(0, -1), king.offset(0, -2), king.offset(0, -3)) {
        (Some(a), Some(b), Some(c)) => (a, b, c),
        _ => return,
    };
    if pos.piece_at(one).is_none()
        && pos.piece_at(two).is_none()
        && pos.piece_at(three).is_none()
        && !square_under_attack(pos, one, side.other())
        && !square_under_attack(pos, two, side.other())
    {
        out.push(Move::castle(king, two, Piece::new(side, PieceKind::King)));
    }
}

/// Whether `by` could move onto `sq` next ply, decided by generating the
/// full pseudo-legal set and scanning destinations. Pawn pushes land in
/// that set, so the squares in front of a pawn count as attacked.
pub fn square_under_attack(pos: &Position, sq: Square, by: Color) -> bool {
    pseudo_moves(pos, by).iter().any(|m| m.to == sq)
}

pub fn in_check(pos: &Position, side: Color) -> bool {
    square_under_attack(pos, pos.king_square(side), side.other())
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
