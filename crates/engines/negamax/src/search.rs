//! Negamax search with alpha-beta pruning

use game_core::{legal_moves, Color, Move, Position};

use crate::eval::{evaluate, MATE_SCORE};

/// What a finished search reports: the score of the principal line from
/// the mover's point of view and the move that starts it.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    pub score: i32,
    pub best_move: Option<Move>,
}

/// Search `depth` plies ahead over the supplied legal moves.
///
/// `legal` must be the current legal set for `pos` (fresh from
/// `legal_moves`, so the terminal flags are in step with it). The
/// position is simulated on in place and handed back exactly as it
/// came in.
pub fn search(pos: &mut Position, legal: &[Move], depth: u8) -> SearchOutcome {
    let sign = match pos.side_to_move {
        Color::White => 1,
        Color::Black => -1,
    };
    let (score, best_move) = negamax(pos, legal, depth, -MATE_SCORE, MATE_SCORE, sign);
    SearchOutcome { score, best_move }
}

/// Returns the best reachable score for the side on move, paired with
/// the move that reaches it. A leaf (depth 0) evaluates statically and
/// carries no move; a node with nothing to play keeps the running
/// maximum at its mate floor, which the parent negates into a win.
fn negamax(
    pos: &mut Position,
    moves: &[Move],
    depth: u8,
    mut alpha: i32,
    beta: i32,
    sign: i32,
) -> (i32, Option<Move>) {
    if depth == 0 {
        return (sign * evaluate(pos), None);
    }

    let mut best_score = -MATE_SCORE;
    let mut best_move = None;

    for &mv in moves {
        pos.make_move(mv);
        let replies = legal_moves(pos);
        let (reply_score, _) = negamax(pos, &replies, depth - 1, -beta, -alpha, -sign);
        let score = -reply_score;
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        pos.undo();
        // Window updates come after the undo so a cutoff can never skip it.
        if best_score > alpha {
            alpha = best_score;
        }
        if alpha >= beta {
            break;
        }
    }

    (best_score, best_move)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
