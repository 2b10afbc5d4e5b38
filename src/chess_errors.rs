//! Errors used throughout the crate.
//!
//! Illegal `move_piece` requests are deliberately not represented here: the
//! board declines them silently. The variants below cover the two failure
//! modes callers can actually observe.

use thiserror::Error;

use crate::board::piece::Piece;

/// Unified error type for board queries and engine move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A piece queried for its position is not on any square. This indicates
    /// a dangling piece reference (captured or promoted away) and is an
    /// invariant violation rather than a recoverable condition.
    #[error("piece {0:?} is not on the board")]
    PieceNotFound(Piece),

    /// The side to move has no legal destination anywhere. Engines surface
    /// this instead of retrying so callers can end the game.
    #[error("no legal moves available for the side to move")]
    NoLegalMoves,
}
