//! Queen move generation: the union of the rook and bishop slides.

use crate::board::board::Board;
use crate::board::player::Player;
use crate::board::square::Square;
use crate::move_generation::bishop_moves::generate_bishop_moves;
use crate::move_generation::rook_moves::generate_rook_moves;

pub fn generate_queen_moves(board: &Board, from: Square, mover: Player, out: &mut Vec<Square>) {
    generate_rook_moves(board, from, mover, out);
    generate_bishop_moves(board, from, mover, out);
}
