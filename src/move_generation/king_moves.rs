//! King move generation: the eight unit steps. No castling and no
//! check-safety filtering.

use crate::board::board::Board;
use crate::board::player::Player;
use crate::board::square::Square;
use crate::move_generation::shared::{step_direction, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

pub fn generate_king_moves(board: &Board, from: Square, mover: Player, out: &mut Vec<Square>) {
    for (d_row, d_col) in ORTHOGONAL_DIRECTIONS.into_iter().chain(DIAGONAL_DIRECTIONS) {
        step_direction(board, from, mover, d_row, d_col, out);
    }
}
