//! Crate root module declarations for the Quince Chess project.
//!
//! This file exposes all top-level subsystems (board model, per-piece move
//! generation, engines, and utility helpers) so binaries, tests, and external
//! front ends can import stable module paths.

pub mod chess_errors;

pub mod board {
    pub mod board;
    pub mod piece;
    pub mod player;
    pub mod square;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod shared;
}

pub mod engines {
    pub mod engine_defense;
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod match_harness;
    pub mod move_log;
    pub mod render_board;
}
