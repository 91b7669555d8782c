//! Knight movement: L-shaped jumps, ignoring anything in between.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::move_matrix::MoveMatrix;
use crate::moves::move_shared::mark_steps;

pub const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_moves(board: &Board, color: Color, from: Position, out: &mut MoveMatrix) {
    mark_steps(board, color, from, &KNIGHT_JUMPS, out);
}
