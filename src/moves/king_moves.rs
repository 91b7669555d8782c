//! King movement: one step in any direction. Castling is not supported.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::move_matrix::MoveMatrix;
use crate::moves::move_shared::mark_steps;

pub const KING_STEPS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_moves(board: &Board, color: Color, from: Position, out: &mut MoveMatrix) {
    mark_steps(board, color, from, &KING_STEPS, out);
}
