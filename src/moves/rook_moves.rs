//! Rook movement: orthogonal rays stopped by the first occupied cell.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::move_matrix::MoveMatrix;
use crate::moves::move_shared::{trace_ray, ORTHOGONAL_STEPS};

#[inline]
pub fn rook_moves(board: &Board, color: Color, from: Position, out: &mut MoveMatrix) {
    for step in ORTHOGONAL_STEPS {
        trace_ray(board, color, from, step, out);
    }
}
