use crate::moves::Move;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    pub fn kingside(self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }
}

/// One ply of history: the move plus value snapshots of the state that
/// `make_move` overwrites. Snapshots are plain copies, so no entry can
/// alias another ply's rights.
#[derive(Clone, Copy, Debug)]
pub struct HistoryEntry {
    pub mv: Move,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

#[derive(Clone, Debug)]
pub struct Position {
    pub board: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub white_king: Square,
    pub black_king: Square,
    pub castling: CastlingRights,
    /// Square a pawn just passed over, capturable for exactly one ply.
    pub en_passant: Option<Square>,
    /// Terminal flags, refreshed by every legal-move enumeration.
    pub checkmate: bool,
    pub stalemate: bool,
    pub history: Vec<HistoryEntry>,
}

impl Position {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        let mut p = Position {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
            white_king: Square::new(7, 4),
            black_king: Square::new(0, 4),
            castling: CastlingRights::all(),
            en_passant: None,
            checkmate: false,
            stalemate: false,
            history: Vec::new(),
        };

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            p.board[0][col] = Some(Piece::new(Color::Black, kind));
            p.board[7][col] = Some(Piece::new(Color::White, kind));
        }
        for col in 0..8 {
            p.board[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            p.board[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
        }
        p
    }

    /// Build a position from an explicit piece list. Castling rights start
    /// cleared and there is no en-passant target; tests that need either
    /// set the public fields directly.
    ///
    /// Panics unless the list places exactly one king per side.
    pub fn from_pieces(side_to_move: Color, pieces: &[(Square, Piece)]) -> Self {
        let mut board = [[None; 8]; 8];
        let mut white_king = None;
        let mut black_king = None;
        for &(sq, pc) in pieces {
            board[sq.row as usize][sq.col as usize] = Some(pc);
            if pc.kind == PieceKind::King {
                let slot = match pc.color {
                    Color::White => &mut white_king,
                    Color::Black => &mut black_king,
                };
                assert!(slot.is_none(), "duplicate {:?} king", pc.color);
                *slot = Some(sq);
            }
        }
        Position {
            board,
            side_to_move,
            white_king: white_king.expect("position needs a white king"),
            black_king: black_king.expect("position needs a black king"),
            castling: CastlingRights::none(),
            en_passant: None,
            checkmate: false,
            stalemate: false,
            history: Vec::new(),
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.row as usize][sq.col as usize]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq.row as usize][sq.col as usize] = pc;
    }

    pub fn king_square(&self, c: Color) -> Square {
        match c {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|e| e.mv)
    }

    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn make_move(&mut self, mv: Move) {
        // Snapshot before anything below can overwrite it.
        self.history.push(HistoryEntry {
            mv,
            castling: self.castling,
            en_passant: self.en_passant,
        });

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(mv.moved));

        if mv.moved.kind == PieceKind::King {
            match mv.moved.color {
                Color::White => self.white_king = mv.to,
                Color::Black => self.black_king = mv.to,
            }
        }

        if mv.is_promotion {
            self.set_piece(mv.to, Some(Piece::new(mv.moved.color, PieceKind::Queen)));
        }

        if mv.is_en_passant {
            // The victim pawn sits beside the landing square, on the from-row.
            self.set_piece(Square::new(mv.from.row, mv.to.col), None);
        }

        // A two-square pawn advance leaves a capture target behind it;
        // everything else expires the old one.
        if mv.moved.kind == PieceKind::Pawn && (mv.from.row as i8 - mv.to.row as i8).abs() == 2 {
            self.en_passant = Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col));
        } else {
            self.en_passant = None;
        }

        if mv.is_castle {
            if mv.to.col > mv.from.col {
                // Kingside: rook hops from the corner to the king's near side.
                let rook = self.piece_at(Square::new(mv.to.row, mv.to.col + 1));
                self.set_piece(Square::new(mv.to.row, mv.to.col - 1), rook);
                self.set_piece(Square::new(mv.to.row, mv.to.col + 1), None);
            } else {
                let rook = self.piece_at(Square::new(mv.to.row, mv.to.col - 2));
                self.set_piece(Square::new(mv.to.row, mv.to.col + 1), rook);
                self.set_piece(Square::new(mv.to.row, mv.to.col - 2), None);
            }
        }

        self.update_castle_rights(mv);
        self.side_to_move = self.side_to_move.other();
    }

    /// A king move forfeits both rights; a rook move off its original
    /// corner forfeits that flank. Capturing a rook on its corner does
    /// not touch the opponent's rights.
    fn update_castle_rights(&mut self, mv: Move) {
        match (mv.moved.color, mv.moved.kind) {
            (Color::White, PieceKind::King) => {
                self.castling.wk = false;
                self.castling.wq = false;
            }
            (Color::Black, PieceKind::King) => {
                self.castling.bk = false;
                self.castling.bq = false;
            }
            (Color::White, PieceKind::Rook) => {
                if mv.from.row == 7 {
                    if mv.from.col == 0 {
                        self.castling.wq = false;
                    } else if mv.from.col == 7 {
                        self.castling.wk = false;
                    }
                }
            }
            (Color::Black, PieceKind::Rook) => {
                if mv.from.row == 0 {
                    if mv.from.col == 0 {
                        self.castling.bq = false;
                    } else if mv.from.col == 7 {
                        self.castling.bk = false;
                    }
                }
            }
            _ => {}
        }
    }

    /// Exact inverse of `make_move`. Does nothing when there is no history.
    pub fn undo(&mut self) {
        let entry = match self.history.pop() {
            Some(e) => e,
            None => return,
        };
        let mv = entry.mv;

        self.set_piece(mv.from, Some(mv.moved));
        self.set_piece(mv.to, mv.captured);

        if mv.moved.kind == PieceKind::King {
            match mv.moved.color {
                Color::White => self.white_king = mv.from,
                Color::Black => self.black_king = mv.from,
            }
        }

        if mv.is_en_passant {
            // The landing square was empty; the victim goes back beside it.
            self.set_piece(mv.to, None);
            self.set_piece(Square::new(mv.from.row, mv.to.col), mv.captured);
        }

        if mv.is_castle {
            if mv.to.col > mv.from.col {
                let rook = self.piece_at(Square::new(mv.to.row, mv.to.col - 1));
                self.set_piece(Square::new(mv.to.row, mv.to.col + 1), rook);
                self.set_piece(Square::new(mv.to.row, mv.to.col - 1), None);
            } else {
                let rook = self.piece_at(Square::new(mv.to.row, mv.to.col + 1));
                self.set_piece(Square::new(mv.to.row, mv.to.col - 2), rook);
                self.set_piece(Square::new(mv.to.row, mv.to.col + 1), None);
            }
        }

        self.castling = entry.castling;
        self.en_passant = entry.en_passant;
        self.side_to_move = self.side_to_move.other();

        // Whatever was terminal before the undo no longer is.
        self.checkmate = false;
        self.stalemate = false;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
