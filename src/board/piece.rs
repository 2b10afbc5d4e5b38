//! Piece representation and move-generation dispatch.
//!
//! A piece is a plain value: kind plus owning player. Position is not piece
//! state; callers supply the square the piece stands on when asking for its
//! moves, which keeps the board the single source of truth for occupancy.

use crate::board::board::Board;
use crate::board::player::Player;
use crate::board::square::Square;
use crate::move_generation::{
    bishop_moves::generate_bishop_moves, king_moves::generate_king_moves,
    knight_moves::generate_knight_moves, pawn_moves::generate_pawn_moves,
    queen_moves::generate_queen_moves, rook_moves::generate_rook_moves,
};

/// Piece kind (the owning player is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// A piece on (or destined for) the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub player: Player,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, player: Player) -> Self {
        Self { kind, player }
    }

    /// Destination squares this piece may move to from `from` on `board`.
    ///
    /// Pure read; scan-generated destinations come out nearest-first and no
    /// destination appears twice. Promotion and en-passant deletion are side
    /// effects of `Board::move_piece`, never of generation.
    pub fn available_moves(&self, board: &Board, from: Square) -> Vec<Square> {
        let mut out = Vec::new();
        match self.kind {
            PieceKind::Pawn => generate_pawn_moves(board, from, self.player, &mut out),
            PieceKind::Knight => generate_knight_moves(board, from, self.player, &mut out),
            PieceKind::Bishop => generate_bishop_moves(board, from, self.player, &mut out),
            PieceKind::Rook => generate_rook_moves(board, from, self.player, &mut out),
            PieceKind::Queen => generate_queen_moves(board, from, self.player, &mut out),
            PieceKind::King => generate_king_moves(board, from, self.player, &mut out),
        }
        out
    }
}
