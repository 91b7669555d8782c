//! Queen movement: union of rook and bishop rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::move_matrix::MoveMatrix;
use crate::moves::rook_moves::rook_moves;

#[inline]
pub fn queen_moves(board: &Board, color: Color, from: Position, out: &mut MoveMatrix) {
    rook_moves(board, color, from, out);
    bishop_moves(board, color, from, out);
}

#[cfg(test)]
mod tests {
    use super::queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Position};
    use crate::moves::move_matrix::MoveMatrix;

    #[test]
    fn queen_in_centre_reaches_twenty_seven_cells() {
        let board = Board::new(8, 8).expect("8x8 board");
        let mut out = MoveMatrix::new(8, 8);
        queen_moves(&board, Color::White, Position::new(4, 3), &mut out);
        assert_eq!(out.count(), 27);
    }
}
