//! Random-move engine.
//!
//! Selects uniformly from all available (piece, destination) pairs. Primarily
//! used for diagnostics, harness baselines, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::board::board::Board;
use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{candidate_moves, ChosenMove, Engine};

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Quince Random"
    }

    fn choose_move(&mut self, board: &Board) -> Result<ChosenMove, ChessError> {
        let candidates = candidate_moves(board, board.current_player());
        let mut rng = rand::rng();
        candidates
            .as_slice()
            .choose(&mut rng)
            .copied()
            .ok_or(ChessError::NoLegalMoves)
    }
}
