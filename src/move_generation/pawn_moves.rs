//! Pawn move generation.
//!
//! Forward advances must land on empty squares; a blocked first square kills
//! the double advance too. Diagonal squares one row ahead are destinations
//! only when they hold an opponent piece. Promotion and en-passant deletion
//! are handled by the move applier, never generated here.

use crate::board::board::Board;
use crate::board::player::Player;
use crate::board::square::{Square, BOARD_SIZE};

pub fn generate_pawn_moves(board: &Board, from: Square, mover: Player, out: &mut Vec<Square>) {
    let forward = mover.pawn_direction();

    // A pawn already standing on either far rank (only reachable through
    // direct setup; normal play promotes it first) skips the forward logic
    // entirely but still reports capture destinations.
    let on_far_rank = from.row() == 0 || from.row() == BOARD_SIZE - 1;
    if !on_far_rank {
        let advance_limit = if from.row() == mover.pawn_start_row() {
            2
        } else {
            1
        };
        let mut current = from;
        for _ in 0..advance_limit {
            match current.offset(forward, 0) {
                Some(next) if board.is_square_empty(next) => {
                    out.push(next);
                    current = next;
                }
                _ => break,
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = from.offset(forward, d_col) {
            if board.is_square_attackable(target, mover) {
                out.push(target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{Piece, PieceKind};

    fn pawn_moves(board: &Board, square: Square, player: Player) -> Vec<Square> {
        let mut out = Vec::new();
        generate_pawn_moves(board, square, player, &mut out);
        out
    }

    fn place_pawn(board: &mut Board, square: Square, player: Player) {
        board.set_piece(square, Some(Piece::new(PieceKind::Pawn, player)));
    }

    #[test]
    fn white_pawn_advances_one_and_two_from_its_start_row() {
        let mut board = Board::empty();
        place_pawn(&mut board, Square::at(1, 4), Player::White);

        let moves = pawn_moves(&board, Square::at(1, 4), Player::White);

        assert_eq!(moves, vec![Square::at(2, 4), Square::at(3, 4)]);
    }

    #[test]
    fn black_pawn_advances_one_and_two_from_its_start_row() {
        let mut board = Board::empty();
        place_pawn(&mut board, Square::at(6, 4), Player::Black);

        let moves = pawn_moves(&board, Square::at(6, 4), Player::Black);

        assert_eq!(moves, vec![Square::at(5, 4), Square::at(4, 4)]);
    }

    #[test]
    fn pawn_loses_the_double_advance_after_moving() {
        let mut board = Board::at_starting_position();
        board.move_piece(Square::at(1, 4), Square::at(2, 4));

        let moves = pawn_moves(&board, Square::at(2, 4), Player::White);

        assert_eq!(moves, vec![Square::at(3, 4)]);
    }

    #[test]
    fn blocked_pawn_has_no_forward_moves() {
        let mut board = Board::empty();
        place_pawn(&mut board, Square::at(4, 4), Player::White);
        place_pawn(&mut board, Square::at(5, 4), Player::Black);

        assert!(pawn_moves(&board, Square::at(4, 4), Player::White).is_empty());

        let mut board = Board::empty();
        place_pawn(&mut board, Square::at(4, 4), Player::Black);
        place_pawn(&mut board, Square::at(3, 4), Player::White);

        assert!(pawn_moves(&board, Square::at(4, 4), Player::Black).is_empty());
    }

    #[test]
    fn blocked_first_square_kills_the_double_advance_too() {
        let mut board = Board::empty();
        place_pawn(&mut board, Square::at(1, 4), Player::White);
        place_pawn(&mut board, Square::at(2, 4), Player::Black);

        let moves = pawn_moves(&board, Square::at(1, 4), Player::White);

        assert!(!moves.contains(&Square::at(3, 4)));
        assert!(moves.is_empty());
    }

    #[test]
    fn piece_two_ahead_blocks_only_the_double_advance() {
        let mut board = Board::empty();
        place_pawn(&mut board, Square::at(1, 4), Player::White);
        place_pawn(&mut board, Square::at(3, 4), Player::Black);

        let moves = pawn_moves(&board, Square::at(1, 4), Player::White);

        assert_eq!(moves, vec![Square::at(2, 4)]);
    }

    #[test]
    fn pawn_captures_diagonally_on_both_sides() {
        let mut board = Board::empty();
        place_pawn(&mut board, Square::at(3, 4), Player::White);
        place_pawn(&mut board, Square::at(4, 3), Player::Black);
        place_pawn(&mut board, Square::at(4, 5), Player::Black);

        let moves = pawn_moves(&board, Square::at(3, 4), Player::White);

        assert!(moves.contains(&Square::at(4, 3)));
        assert!(moves.contains(&Square::at(4, 5)));
    }

    #[test]
    fn pawn_does_not_move_diagonally_except_to_capture() {
        let mut board = Board::empty();
        place_pawn(&mut board, Square::at(3, 4), Player::White);
        place_pawn(&mut board, Square::at(4, 5), Player::White);

        let moves = pawn_moves(&board, Square::at(3, 4), Player::White);

        assert!(!moves.contains(&Square::at(4, 3)));
        assert!(!moves.contains(&Square::at(4, 5)));
    }

    #[test]
    fn captures_clamp_at_the_edge_columns() {
        let mut board = Board::empty();
        place_pawn(&mut board, Square::at(3, 0), Player::White);
        place_pawn(&mut board, Square::at(4, 1), Player::Black);

        let moves = pawn_moves(&board, Square::at(3, 0), Player::White);

        assert_eq!(moves, vec![Square::at(4, 0), Square::at(4, 1)]);
    }

    #[test]
    fn pawn_on_the_far_rank_has_no_forward_moves() {
        let mut board = Board::empty();
        place_pawn(&mut board, Square::at(7, 4), Player::White);
        assert!(pawn_moves(&board, Square::at(7, 4), Player::White).is_empty());

        let mut board = Board::empty();
        place_pawn(&mut board, Square::at(0, 4), Player::Black);
        assert!(pawn_moves(&board, Square::at(0, 4), Player::Black).is_empty());
    }

    #[test]
    fn pawn_on_the_far_rank_still_reports_captures() {
        // Only reachable through direct setup; the documented quirk is that
        // forward logic is skipped while capture destinations remain.
        let mut board = Board::empty();
        place_pawn(&mut board, Square::at(0, 4), Player::White);
        place_pawn(&mut board, Square::at(1, 3), Player::Black);

        let moves = pawn_moves(&board, Square::at(0, 4), Player::White);

        assert_eq!(moves, vec![Square::at(1, 3)]);
    }

    #[test]
    fn black_pawn_one_step_from_promotion_has_a_single_advance() {
        let mut board = Board::empty();
        place_pawn(&mut board, Square::at(1, 4), Player::Black);

        let moves = pawn_moves(&board, Square::at(1, 4), Player::Black);

        assert_eq!(moves.len(), 1);
        assert_eq!(moves, vec![Square::at(0, 4)]);
    }
}
