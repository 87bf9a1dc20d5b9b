use super::*;
use crate::types::{Color, Piece, PieceKind};

#[test]
fn test_square_text_mapping() {
    assert_eq!(square_text(Square::new(6, 4)), "e2");
    assert_eq!(square_text(Square::new(0, 0)), "a8");
    assert_eq!(square_text(Square::new(7, 7)), "h1");
    assert_eq!(square_text(Square::new(7, 0)), "a1");
}

#[test]
fn test_parse_square_round_trip() {
    for row in 0..8 {
        for col in 0..8 {
            let sq = Square::new(row, col);
            assert_eq!(parse_square(&square_text(sq)), Some(sq));
        }
    }
}

#[test]
fn test_parse_square_rejects_bad_input() {
    assert_eq!(parse_square(""), None);
    assert_eq!(parse_square("e"), None);
    assert_eq!(parse_square("e22"), None);
    assert_eq!(parse_square("i4"), None);
    assert_eq!(parse_square("e9"), None);
    assert_eq!(parse_square("e0"), None);
    assert_eq!(parse_square("E2"), None);
    assert_eq!(parse_square("4e"), None);
}

#[test]
fn test_move_text_is_four_characters() {
    let pawn = Piece::new(Color::White, PieceKind::Pawn);
    let mv = Move::new(Square::new(6, 4), Square::new(4, 4), pawn, None);
    assert_eq!(move_text(mv), "e2e4");

    // Promotion carries no suffix; castling reads as the king shift.
    let promo = Move::new(Square::new(1, 6), Square::new(0, 6), pawn, None);
    assert_eq!(move_text(promo), "g7g8");

    let king = Piece::new(Color::White, PieceKind::King);
    let castle = Move::castle(Square::new(7, 4), Square::new(7, 6), king);
    assert_eq!(move_text(castle), "e1g1");
}

#[test]
fn test_parse_square_pair() {
    let (from, to) = parse_square_pair("e2e4").unwrap();
    assert_eq!(from, Square::new(6, 4));
    assert_eq!(to, Square::new(4, 4));

    assert!(parse_square_pair("e2e").is_none());
    assert!(parse_square_pair("e2e44").is_none());
    assert!(parse_square_pair("e2x4").is_none());
    assert!(parse_square_pair("").is_none());
    // Four bytes but not four square characters.
    assert!(parse_square_pair("a\u{e9}4").is_none());
}
