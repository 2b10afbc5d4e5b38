//! The board: an 8x8 grid of optional occupants plus the transient state
//! needed for en-passant resolution.
//!
//! The board is deliberately "dumb": `set_piece` and `move_piece` perform no
//! rule checking beyond ownership by the side to move. Destination legality
//! lives in move generation; front ends are expected to offer only generated
//! destinations.

use crate::board::piece::{Piece, PieceKind};
use crate::board::player::Player;
use crate::board::square::{Square, BOARD_SIZE};
use crate::board::undo_state::MoveUndo;
use crate::chess_errors::ChessError;

/// Board state: occupancy grid, side to move, and the square of a pawn that
/// just advanced two rows (cleared after every non-double-pawn move).
#[derive(Debug, Clone)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    current_player: Player,
    last_move_pawn: Option<Square>,
}

impl Board {
    /// An empty board, White to move.
    pub fn empty() -> Self {
        Self {
            grid: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            current_player: Player::White,
            last_move_pawn: None,
        }
    }

    /// The canonical starting layout: White on rows 0-1, Black on rows 6-7.
    pub fn at_starting_position() -> Self {
        let mut board = Self::empty();

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (col, kind) in back_rank.into_iter().enumerate() {
            let col = col as i8;
            board.set_piece(Square::at(0, col), Some(Piece::new(kind, Player::White)));
            board.set_piece(Square::at(7, col), Some(Piece::new(kind, Player::Black)));
        }
        for col in 0..BOARD_SIZE {
            board.set_piece(
                Square::at(1, col),
                Some(Piece::new(PieceKind::Pawn, Player::White)),
            );
            board.set_piece(
                Square::at(6, col),
                Some(Piece::new(PieceKind::Pawn, Player::Black)),
            );
        }

        board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Square of the pawn that advanced two rows on the previous move, if any.
    #[inline]
    pub fn last_move_pawn(&self) -> Option<Square> {
        self.last_move_pawn
    }

    /// Unconditional occupancy write. Overwrites any existing occupant; used
    /// for setup and inside move application.
    #[inline]
    pub fn set_piece(&mut self, square: Square, occupant: Option<Piece>) {
        self.grid[square.row() as usize][square.col() as usize] = occupant;
    }

    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn in_bounds(&self, square: Square) -> bool {
        (0..BOARD_SIZE).contains(&square.row()) && (0..BOARD_SIZE).contains(&square.col())
    }

    #[inline]
    pub fn is_square_empty(&self, square: Square) -> bool {
        self.get_piece(square).is_none()
    }

    #[inline]
    pub fn is_square_full(&self, square: Square) -> bool {
        !self.is_square_empty(square)
    }

    /// True iff `square` holds a piece not owned by `mover`.
    #[inline]
    pub fn is_square_attackable(&self, square: Square, mover: Player) -> bool {
        match self.get_piece(square) {
            Some(piece) => piece.player != mover,
            None => false,
        }
    }

    /// Row-major scan for the first square holding a piece equal to `piece`.
    ///
    /// Pieces are values, so duplicates (two pawns of one side) resolve to
    /// the first match. A miss means the caller holds a reference to a piece
    /// that was captured or promoted away, which is an invariant violation.
    pub fn find_piece(&self, piece: Piece) -> Result<Square, ChessError> {
        Square::all()
            .find(|&square| self.get_piece(square) == Some(piece))
            .ok_or(ChessError::PieceNotFound(piece))
    }

    /// Destination squares for the occupant of `square`; empty when the
    /// square is empty. This is the front-end query contract.
    pub fn available_moves_from(&self, square: Square) -> Vec<Square> {
        match self.get_piece(square) {
            Some(piece) => piece.available_moves(self, square),
            None => Vec::new(),
        }
    }

    /// The core mutation: relocate the piece at `from` to `to`.
    ///
    /// Silently ignored when `from` is empty or holds an opponent piece (a
    /// deliberate no-op policy, not an error). Otherwise applies, in order:
    /// relocation, en-passant deletion, pawn promotion, en-passant
    /// bookkeeping, and the turn flip.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let _ = self.make_move(from, to);
    }

    /// `move_piece` that also returns the undo record needed to reverse it,
    /// or `None` when the request was the documented no-op. Used by the
    /// one-ply search to avoid copying the board per candidate.
    pub fn make_move(&mut self, from: Square, to: Square) -> Option<MoveUndo> {
        let moving = match self.get_piece(from) {
            Some(piece) if piece.player == self.current_player => piece,
            _ => return None,
        };

        let mut undo = MoveUndo {
            from,
            to,
            moved: moving,
            captured: self.get_piece(to),
            en_passant_victim: None,
            prev_last_move_pawn: self.last_move_pawn,
        };

        self.set_piece(to, Some(moving));
        self.set_piece(from, None);

        // En-passant deletion first: it keys off the pawn's pre-promotion
        // identity and the previous move's double-step square.
        if moving.kind == PieceKind::Pawn {
            if let Some(victim_square) = self.last_move_pawn {
                let lands_behind_victim = to.col() == victim_square.col()
                    && to.row() == victim_square.row() + moving.player.pawn_direction();
                if lands_behind_victim {
                    undo.en_passant_victim =
                        self.get_piece(victim_square).map(|p| (victim_square, p));
                    self.set_piece(victim_square, None);
                }
            }
        }

        self.promote_if_on_far_rank(to);

        // Bookkeeping overwrites last_move_pawn only after the deletion above
        // has consumed the old value.
        if moving.kind == PieceKind::Pawn && (to.row() - from.row()).abs() == 2 {
            self.last_move_pawn = Some(to);
        } else {
            self.last_move_pawn = None;
        }

        self.current_player = self.current_player.opponent();
        Some(undo)
    }

    /// Exact reversal of a `make_move` application.
    pub fn unmake_move(&mut self, undo: MoveUndo) {
        self.current_player = self.current_player.opponent();
        self.last_move_pawn = undo.prev_last_move_pawn;
        if let Some((square, victim)) = undo.en_passant_victim {
            self.set_piece(square, Some(victim));
        }
        self.set_piece(undo.to, undo.captured);
        self.set_piece(undo.from, Some(undo.moved));
    }

    fn promote_if_on_far_rank(&mut self, to: Square) {
        if let Some(piece) = self.get_piece(to) {
            if piece.kind == PieceKind::Pawn && (to.row() == 0 || to.row() == BOARD_SIZE - 1) {
                self.set_piece(to, Some(Piece::new(PieceKind::Queen, piece.player)));
            }
        }
    }
}
