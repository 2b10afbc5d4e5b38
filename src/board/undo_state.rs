//! Undo record for the make/unmake move workflow.

use crate::board::piece::Piece;
use crate::board::square::Square;

/// Single undo record for `Board::make_move` / `Board::unmake_move`.
///
/// Captures enough to restore the board exactly: the moved piece is stored
/// pre-promotion, and an en-passant victim is remembered together with the
/// square it was deleted from (which is never the move's destination).
#[derive(Debug, Clone, Copy)]
pub struct MoveUndo {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) moved: Piece,
    pub(crate) captured: Option<Piece>,
    pub(crate) en_passant_victim: Option<(Square, Piece)>,
    pub(crate) prev_last_move_pawn: Option<Square>,
}
