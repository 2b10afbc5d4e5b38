//! Knight move generation: the eight fixed (±1,±2)/(±2,±1) steps.

use crate::board::board::Board;
use crate::board::player::Player;
use crate::board::square::Square;
use crate::move_generation::shared::step_direction;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(board: &Board, from: Square, mover: Player, out: &mut Vec<Square>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        step_direction(board, from, mover, d_row, d_col, out);
    }
}
