//! Bishop move generation: four diagonal slides.

use crate::board::board::Board;
use crate::board::player::Player;
use crate::board::square::Square;
use crate::move_generation::shared::{scan_direction, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(board: &Board, from: Square, mover: Player, out: &mut Vec<Square>) {
    for (d_row, d_col) in DIAGONAL_DIRECTIONS {
        scan_direction(board, from, mover, d_row, d_col, out);
    }
}
