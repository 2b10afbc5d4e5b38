//! Head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other without any front
//! end: White moves first, each applied move is reported to the injected
//! sink, and the game ends when a side has no legal move or the ply limit is
//! reached.

use crate::board::board::Board;
use crate::board::player::Player;
use crate::chess_errors::ChessError;
use crate::engines::engine_trait::Engine;
use crate::utils::move_log::MoveSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// `stuck` had no legal move on its turn.
    NoLegalMoves { stuck: Player },
    MaxPliesReached,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 300 }
    }
}

#[derive(Debug)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub white_move_count: u32,
    pub black_move_count: u32,
}

pub fn run_match<'a>(
    white: &'a mut dyn Engine,
    black: &'a mut dyn Engine,
    config: &MatchConfig,
    sink: &mut dyn MoveSink,
) -> Result<MatchResult, ChessError> {
    let mut board = Board::at_starting_position();
    let mut white_move_count = 0;
    let mut black_move_count = 0;

    for _ in 0..config.max_plies {
        let mover = board.current_player();
        let engine = match mover {
            Player::White => &mut *white,
            Player::Black => &mut *black,
        };

        match engine.choose_move(&board) {
            Ok(chosen) => {
                board.move_piece(chosen.from, chosen.to);
                sink.record_move(mover, chosen.from, chosen.to);
                match mover {
                    Player::White => white_move_count += 1,
                    Player::Black => black_move_count += 1,
                }
            }
            Err(ChessError::NoLegalMoves) => {
                return Ok(MatchResult {
                    outcome: MatchOutcome::NoLegalMoves { stuck: mover },
                    final_board: board,
                    white_move_count,
                    black_move_count,
                });
            }
            Err(other) => return Err(other),
        }
    }

    Ok(MatchResult {
        outcome: MatchOutcome::MaxPliesReached,
        final_board: board,
        white_move_count,
        black_move_count,
    })
}
