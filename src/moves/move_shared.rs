use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::move_matrix::MoveMatrix;

/// Orthogonal directions as (row step, column step).
pub const ORTHOGONAL_STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
/// Diagonal directions as (row step, column step).
pub const DIAGONAL_STEPS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A mover of `color` may land on `position`: on the board and not held by
/// its own side.
#[inline]
pub fn can_land_on(board: &Board, color: Color, position: Position) -> bool {
    board.contains(position)
        && board
            .occupant(position)
            .map_or(true, |occupant| occupant.color() != color)
}

/// Walk from `from` in one direction, marking cells until the edge or the
/// first occupied cell. That cell is included when it holds an enemy piece.
pub fn trace_ray(
    board: &Board,
    color: Color,
    from: Position,
    step: (isize, isize),
    out: &mut MoveMatrix,
) {
    let mut current = from.offset(step.0, step.1);

    while let Some(target) = current.filter(|&p| board.contains(p)) {
        match board.occupant(target) {
            None => out.mark(target),
            Some(occupant) => {
                if occupant.color() != color {
                    out.mark(target);
                }
                break;
            }
        }
        current = target.offset(step.0, step.1);
    }
}

/// Mark each single-step target that is on the board and not friendly.
pub fn mark_steps(
    board: &Board,
    color: Color,
    from: Position,
    steps: &[(isize, isize)],
    out: &mut MoveMatrix,
) {
    for &(d_row, d_column) in steps {
        if let Some(target) = from.offset(d_row, d_column) {
            if can_land_on(board, color, target) {
                out.mark(target);
            }
        }
    }
}
