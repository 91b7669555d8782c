//! Bishop movement: diagonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::move_matrix::MoveMatrix;
use crate::moves::move_shared::{trace_ray, DIAGONAL_STEPS};

#[inline]
pub fn bishop_moves(board: &Board, color: Color, from: Position, out: &mut MoveMatrix) {
    for step in DIAGONAL_STEPS {
        trace_ray(board, color, from, step, out);
    }
}
