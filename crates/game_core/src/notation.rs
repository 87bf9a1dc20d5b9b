use crate::moves::Move;
use crate::types::Square;

/// File letter plus rank digit, e.g. row 6 col 4 -> "e2".
pub fn square_text(sq: Square) -> String {
    let f = (b'a' + sq.col) as char;
    let r = (b'8' - sq.row) as char;
    format!("{f}{r}")
}

fn square_from_bytes(f: u8, r: u8) -> Option<Square> {
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    Some(Square::new(b'8' - r, f - b'a'))
}

pub fn parse_square(text: &str) -> Option<Square> {
    let b = text.as_bytes();
    if b.len() != 2 {
        return None;
    }
    square_from_bytes(b[0], b[1])
}

/// Four-character move text: from-square then to-square, nothing else.
/// Castling reads as the king's two-square shift and promotions carry
/// no suffix.
pub fn move_text(mv: Move) -> String {
    format!("{}{}", square_text(mv.from), square_text(mv.to))
}

/// Split four characters into the (from, to) square pair, validating
/// both coordinates. This is the whole range check; squares that reach
/// the core are always on the board.
pub fn parse_square_pair(text: &str) -> Option<(Square, Square)> {
    let b = text.as_bytes();
    if b.len() != 4 {
        return None;
    }
    let from = square_from_bytes(b[0], b[1])?;
    let to = square_from_bytes(b[2], b[3])?;
    Some((from, to))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
