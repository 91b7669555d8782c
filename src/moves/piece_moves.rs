//! Per-kind dispatch of the move patterns.
//!
//! These are the piece-level queries the match consumes: the reachable-cell
//! matrix for a piece given the current occupancy, whether any cell is
//! reachable, and whether a given cell is. None of them look at check.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceId, PieceKind, Position};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::move_matrix::MoveMatrix;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Reachable cells for piece `id`. A piece that is off the board reaches nothing.
pub fn possible_moves(board: &Board, id: PieceId) -> ChessResult<MoveMatrix> {
    let piece = board.piece(id)?;
    let mut out = MoveMatrix::new(board.rows(), board.columns());
    let Some(from) = piece.position() else {
        return Ok(out);
    };
    let color = piece.color();

    match piece.kind() {
        PieceKind::Pawn => pawn_moves(board, color, from, piece.moves_count(), &mut out),
        PieceKind::Knight => knight_moves(board, color, from, &mut out),
        PieceKind::Bishop => bishop_moves(board, color, from, &mut out),
        PieceKind::Rook => rook_moves(board, color, from, &mut out),
        PieceKind::Queen => queen_moves(board, color, from, &mut out),
        PieceKind::King => king_moves(board, color, from, &mut out),
    }

    Ok(out)
}

#[inline]
pub fn has_any_possible_move(board: &Board, id: PieceId) -> ChessResult<bool> {
    Ok(possible_moves(board, id)?.any())
}

#[inline]
pub fn can_move_to(board: &Board, id: PieceId, destination: Position) -> ChessResult<bool> {
    Ok(possible_moves(board, id)?.get(destination))
}
