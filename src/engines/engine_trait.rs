//! Engine abstraction layer.
//!
//! Defines the common move-selection interface so different strategies can be
//! swapped behind a single trait, plus the candidate enumeration every
//! strategy starts from. An empty candidate set is reported as
//! `ChessError::NoLegalMoves` rather than retried.

use crate::board::board::Board;
use crate::board::player::Player;
use crate::board::square::Square;
use crate::chess_errors::ChessError;

/// A selected (origin, destination) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub from: Square,
    pub to: Square,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Selects a move for the side to move on `board`, without applying it.
    fn choose_move(&mut self, board: &Board) -> Result<ChosenMove, ChessError>;
}

/// Every (own piece, destination) pair available to `player`, in row-major
/// piece order with each piece's destinations in generation order.
pub fn candidate_moves(board: &Board, player: Player) -> Vec<ChosenMove> {
    let mut out = Vec::new();
    for from in Square::all() {
        let Some(piece) = board.get_piece(from) else {
            continue;
        };
        if piece.player != player {
            continue;
        }
        for to in piece.available_moves(board, from) {
            out.push(ChosenMove { from, to });
        }
    }
    out
}

/// Asks `engine` for a move and applies it to `board`.
pub fn play_move(engine: &mut dyn Engine, board: &mut Board) -> Result<ChosenMove, ChessError> {
    let chosen = engine.choose_move(board)?;
    board.move_piece(chosen.from, chosen.to);
    Ok(chosen)
}
