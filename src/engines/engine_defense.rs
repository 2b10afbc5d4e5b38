//! Danger-avoiding random engine.
//!
//! Plays like the random engine but refuses destinations that sit inside any
//! opponent piece's current destination set (a one-ply "don't move into an
//! attacked square" filter). When every candidate is filtered out it falls
//! back to the unfiltered set, so a cornered side still moves.

use std::collections::HashSet;

use rand::prelude::IndexedRandom;

use crate::board::board::Board;
use crate::board::player::Player;
use crate::board::square::Square;
use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{candidate_moves, ChosenMove, Engine};

pub struct DefenseEngine;

impl DefenseEngine {
    pub fn new() -> Self {
        Self
    }

    /// Union of every opponent piece's destination squares.
    fn attacked_squares(board: &Board, opponent: Player) -> HashSet<Square> {
        candidate_moves(board, opponent)
            .into_iter()
            .map(|candidate| candidate.to)
            .collect()
    }
}

impl Default for DefenseEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for DefenseEngine {
    fn name(&self) -> &str {
        "Quince Defense"
    }

    fn choose_move(&mut self, board: &Board) -> Result<ChosenMove, ChessError> {
        let player = board.current_player();
        let candidates = candidate_moves(board, player);
        if candidates.is_empty() {
            return Err(ChessError::NoLegalMoves);
        }

        let death_squares = Self::attacked_squares(board, player.opponent());
        let safe: Vec<ChosenMove> = candidates
            .iter()
            .copied()
            .filter(|candidate| !death_squares.contains(&candidate.to))
            .collect();

        let pool = if safe.is_empty() { &candidates } else { &safe };
        let mut rng = rand::rng();
        pool.as_slice()
            .choose(&mut rng)
            .copied()
            .ok_or(ChessError::NoLegalMoves)
    }
}
