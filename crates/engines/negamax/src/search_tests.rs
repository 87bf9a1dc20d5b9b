use super::*;
use crate::NegamaxEngine;
use game_core::{Engine, Piece, PieceKind, Square};

fn king(c: Color) -> Piece {
    Piece::new(c, PieceKind::King)
}

fn find(legal: &[Move], from: Square, to: Square) -> Move {
    legal
        .iter()
        .copied()
        .find(|m| m.from == from && m.to == to)
        .expect("expected move missing from legal set")
}

#[test]
fn test_start_position_depth_two() {
    let mut pos = Position::new();
    let baseline = pos.clone();
    let legal = legal_moves(&mut pos);
    assert_eq!(legal.len(), 20);

    let outcome = search(&mut pos, &legal, 2);
    let best = outcome.best_move.expect("start position must yield a move");
    assert!(legal.contains(&best));
    assert!((-MATE_SCORE..=MATE_SCORE).contains(&outcome.score));

    // Search simulates on the live position but must hand it back intact.
    assert_eq!(pos.board, baseline.board);
    assert_eq!(pos.side_to_move, baseline.side_to_move);
    assert_eq!(pos.castling, baseline.castling);
    assert_eq!(pos.en_passant, baseline.en_passant);
}

#[test]
fn test_single_reply_is_taken() {
    // White king in the corner with exactly one safe square.
    let mut pos = Position::from_pieces(
        Color::White,
        &[
            (Square::new(7, 0), king(Color::White)),
            (Square::new(6, 2), king(Color::Black)),
        ],
    );
    let legal = legal_moves(&mut pos);
    assert_eq!(legal.len(), 1);

    let outcome = search(&mut pos, &legal, 1);
    assert_eq!(outcome.best_move, Some(legal[0]));
}

#[test]
fn test_finds_back_rank_mate() {
    // Ra8 mates: the black king is fenced in by its own pawns.
    let mut pos = Position::from_pieces(
        Color::White,
        &[
            (Square::new(7, 4), king(Color::White)),
            (Square::new(7, 0), Piece::new(Color::White, PieceKind::Rook)),
            (Square::new(0, 7), king(Color::Black)),
            (Square::new(1, 6), Piece::new(Color::Black, PieceKind::Pawn)),
            (Square::new(1, 7), Piece::new(Color::Black, PieceKind::Pawn)),
        ],
    );
    let legal = legal_moves(&mut pos);
    let mate = find(&legal, Square::new(7, 0), Square::new(0, 0));

    let outcome = search(&mut pos, &legal, 2);
    assert_eq!(outcome.best_move, Some(mate));
    assert_eq!(outcome.score, MATE_SCORE);
}

#[test]
fn test_black_mates_with_same_score_sign() {
    // Mirrored back-rank mate with black on move; the root score is
    // from the mover's point of view, so it is the same +MATE_SCORE.
    let mut pos = Position::from_pieces(
        Color::Black,
        &[
            (Square::new(0, 4), king(Color::Black)),
            (Square::new(0, 0), Piece::new(Color::Black, PieceKind::Rook)),
            (Square::new(7, 7), king(Color::White)),
            (Square::new(6, 6), Piece::new(Color::White, PieceKind::Pawn)),
            (Square::new(6, 7), Piece::new(Color::White, PieceKind::Pawn)),
        ],
    );
    let legal = legal_moves(&mut pos);
    let mate = find(&legal, Square::new(0, 0), Square::new(7, 0));

    let outcome = search(&mut pos, &legal, 2);
    assert_eq!(outcome.best_move, Some(mate));
    assert_eq!(outcome.score, MATE_SCORE);
}

#[test]
fn test_takes_the_hanging_queen() {
    let mut pos = Position::from_pieces(
        Color::White,
        &[
            (Square::new(6, 7), king(Color::White)),
            (Square::new(7, 0), Piece::new(Color::White, PieceKind::Rook)),
            (Square::new(0, 7), king(Color::Black)),
            (Square::new(0, 0), Piece::new(Color::Black, PieceKind::Queen)),
        ],
    );
    let legal = legal_moves(&mut pos);
    let capture = find(&legal, Square::new(7, 0), Square::new(0, 0));

    let outcome = search(&mut pos, &legal, 2);
    assert_eq!(outcome.best_move, Some(capture));
    // Rook survives, queen is gone: bare material count.
    assert_eq!(outcome.score, 5);
}

#[test]
fn test_stalemating_move_scores_as_mate() {
    // Kg6 leaves black without a move; the child node has nothing to
    // play, so its score floor negates into a full win at the root.
    let mut pos = Position::from_pieces(
        Color::White,
        &[
            (Square::new(2, 5), king(Color::White)),
            (Square::new(1, 6), Piece::new(Color::White, PieceKind::Pawn)),
            (Square::new(0, 6), king(Color::Black)),
        ],
    );
    let legal = legal_moves(&mut pos);
    let boxing = find(&legal, Square::new(2, 5), Square::new(2, 6));

    let outcome = search(&mut pos, &legal, 2);
    assert_eq!(outcome.best_move, Some(boxing));
    assert_eq!(outcome.score, MATE_SCORE);
}

#[test]
fn test_zero_depth_offers_no_move() {
    let mut pos = Position::new();
    let legal = legal_moves(&mut pos);
    let outcome = search(&mut pos, &legal, 0);
    assert!(outcome.best_move.is_none());
    assert_eq!(outcome.score, 0);

    let mut engine = NegamaxEngine::with_depth(0);
    assert!(engine.choose_move(&mut pos, &legal).is_none());
}

#[test]
fn test_engine_defaults() {
    let mut engine = NegamaxEngine::new();
    assert_eq!(engine.depth(), crate::DEFAULT_DEPTH);

    let mut pos = Position::new();
    let legal = legal_moves(&mut pos);
    let chosen = engine
        .choose_move(&mut pos, &legal)
        .expect("engine must move in the start position");
    assert!(legal.contains(&chosen));
}
