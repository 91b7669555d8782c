//! Crate root module declarations for the chess match rules engine.
//!
//! This file exposes the board and piece model, the per-kind move patterns,
//! the match core (move execution, rollback, check and checkmate detection),
//! the engine abstraction used for self-play, and utility helpers so
//! binaries, tests and benchmarks can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_matrix;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod chess_match {
    pub mod check_detection;
    pub mod match_config;
    pub mod match_state;
    pub mod move_execution;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod layout_generator;
    pub mod layout_parser;
    pub mod match_harness;
}
