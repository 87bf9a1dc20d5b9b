use crate::board::Position;
use crate::movegen::legal_moves;

/// Pure perft node count: the number of leaves of the legal-move tree at
/// `depth`. Exercises generation, make and undo together; any drift in
/// one of them shows up as a wrong count.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(pos);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0u64;
    for mv in moves {
        pos.make_move(mv);
        nodes += perft(pos, depth - 1);
        pos.undo();
    }
    nodes
}
