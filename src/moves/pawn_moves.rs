//! Pawn movement without en passant or promotion.
//!
//! White advances toward row 0, Black toward the last row. A pawn that has
//! not moved yet may advance two cells when both are empty. Captures are one
//! cell diagonally forward onto an enemy piece.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::move_matrix::MoveMatrix;

#[inline]
pub const fn forward_step(color: Color) -> isize {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

pub fn pawn_moves(
    board: &Board,
    color: Color,
    from: Position,
    moves_count: u32,
    out: &mut MoveMatrix,
) {
    let forward = forward_step(color);

    let single = from.offset(forward, 0).filter(|&p| board.contains(p));
    if let Some(one) = single.filter(|&p| !board.is_occupied(p)) {
        out.mark(one);
        if moves_count == 0 {
            if let Some(two) = one
                .offset(forward, 0)
                .filter(|&p| board.contains(p) && !board.is_occupied(p))
            {
                out.mark(two);
            }
        }
    }

    for side in [-1, 1] {
        let Some(target) = from.offset(forward, side) else {
            continue;
        };
        if board
            .occupant(target)
            .is_some_and(|occupant| occupant.color() != color)
        {
            out.mark(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Position};
    use crate::moves::move_matrix::MoveMatrix;

    #[test]
    fn unmoved_pawn_may_advance_two() {
        let board = Board::new(8, 8).expect("8x8 board");
        let mut out = MoveMatrix::new(8, 8);
        pawn_moves(&board, Color::White, Position::new(6, 4), 0, &mut out);
        assert!(out.get(Position::new(5, 4)));
        assert!(out.get(Position::new(4, 4)));
        assert_eq!(out.count(), 2);

        let mut moved = MoveMatrix::new(8, 8);
        pawn_moves(&board, Color::White, Position::new(6, 4), 1, &mut moved);
        assert_eq!(moved.count(), 1);
    }

    #[test]
    fn blocked_pawn_only_captures_diagonally() {
        let mut board = Board::new(8, 8).expect("8x8 board");
        let blocker = board.add_piece(PieceKind::Knight, Color::White);
        let victim = board.add_piece(PieceKind::Rook, Color::White);
        let friend = board.add_piece(PieceKind::Rook, Color::Black);
        board.place(blocker, Position::new(2, 4)).expect("empty cell");
        board.place(victim, Position::new(2, 3)).expect("empty cell");
        board.place(friend, Position::new(2, 5)).expect("empty cell");

        let mut out = MoveMatrix::new(8, 8);
        pawn_moves(&board, Color::Black, Position::new(1, 4), 0, &mut out);
        assert_eq!(out.positions().collect::<Vec<_>>(), vec![Position::new(2, 3)]);
    }

    #[test]
    fn pawn_on_last_row_has_no_moves() {
        let board = Board::new(8, 8).expect("8x8 board");
        let mut out = MoveMatrix::new(8, 8);
        pawn_moves(&board, Color::White, Position::new(0, 4), 3, &mut out);
        assert!(!out.any());
    }
}
