//! Direction-scanning helpers shared by the per-piece generators.

use crate::board::board::Board;
use crate::board::player::Player;
use crate::board::square::Square;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Slide from `from` in unit direction `(d_row, d_col)`, collecting
/// destinations nearest-first: empty squares are pushed and the slide
/// continues, an opponent square is pushed and stops it, a friendly square
/// stops it without being pushed.
pub fn scan_direction(
    board: &Board,
    from: Square,
    mover: Player,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<Square>,
) {
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        if board.is_square_empty(next) {
            out.push(next);
            current = next;
        } else {
            if board.is_square_attackable(next, mover) {
                out.push(next);
            }
            break;
        }
    }
}

/// Single-square variant of the same admission rule, for Knight and King
/// offsets: in bounds and either empty or opponent-occupied.
pub fn step_direction(
    board: &Board,
    from: Square,
    mover: Player,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<Square>,
) {
    if let Some(next) = from.offset(d_row, d_col) {
        if board.is_square_empty(next) || board.is_square_attackable(next, mover) {
            out.push(next);
        }
    }
}
