//! One-ply greedy engine.
//!
//! Tries every candidate move on a scratch board via make/unmake, scores the
//! resulting position by material for both sides, and keeps the maximum. A
//! small random perturbation added at scoring time breaks ties, so equal
//! positions do not always resolve to the first candidate enumerated.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::board::Board;
use crate::board::piece::PieceKind;
use crate::board::player::Player;
use crate::board::square::Square;
use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{candidate_moves, ChosenMove, Engine};

/// Material scores are multiples of ten, so a sub-ten perturbation can only
/// reorder exact ties.
const TIE_BREAK_RANGE: i32 = 10;

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic construction for reproducible matches and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    /// Material balance from `player`'s point of view.
    fn score_board(board: &Board, player: Player) -> i32 {
        let mut score = 0;
        for square in Square::all() {
            if let Some(piece) = board.get_piece(square) {
                let value = Self::piece_value(piece.kind);
                if piece.player == player {
                    score += value;
                } else {
                    score -= value;
                }
            }
        }
        score
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Quince Greedy"
    }

    fn choose_move(&mut self, board: &Board) -> Result<ChosenMove, ChessError> {
        let player = board.current_player();
        let candidates = candidate_moves(board, player);

        let mut scratch = board.clone();
        let mut best: Option<(i32, ChosenMove)> = None;

        for candidate in candidates {
            let Some(undo) = scratch.make_move(candidate.from, candidate.to) else {
                continue;
            };
            let score = Self::score_board(&scratch, player)
                + self.rng.random_range(0..TIE_BREAK_RANGE);
            scratch.unmake_move(undo);

            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, candidate));
            }
        }

        best.map(|(_, candidate)| candidate)
            .ok_or(ChessError::NoLegalMoves)
    }
}
