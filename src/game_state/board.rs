//! Grid of cells backed by an arena of pieces.
//!
//! Cells store piece identifiers, the arena stores the pieces themselves.
//! `place` and `remove` are the only operations that touch a cell, and each
//! updates the cell and the piece's recorded position together.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Color, PieceId, PieceKind, Position, FILE_COUNT};
use crate::game_state::piece::Piece;

/// Columns are named by a single file letter.
pub const MAX_COLUMNS: usize = FILE_COUNT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Option<PieceId>>,
    arena: Vec<Piece>,
}

impl Board {
    pub fn new(rows: usize, columns: usize) -> ChessResult<Self> {
        if rows == 0 || columns == 0 || columns > MAX_COLUMNS {
            return Err(ChessErrors::InvalidBoardDimensions { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
            arena: Vec::new(),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.column < self.columns
    }

    #[inline]
    fn cell_index(&self, position: Position) -> ChessResult<usize> {
        if self.contains(position) {
            Ok(position.row * self.columns + position.column)
        } else {
            Err(ChessErrors::PositionOutOfBounds(position))
        }
    }

    /// Create an unplaced piece in the arena and return its identifier.
    pub fn add_piece(&mut self, kind: PieceKind, color: Color) -> PieceId {
        self.arena.push(Piece::new(kind, color));
        self.arena.len() - 1
    }

    pub fn piece(&self, id: PieceId) -> ChessResult<&Piece> {
        self.arena.get(id).ok_or(ChessErrors::UnknownPiece(id))
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> ChessResult<&mut Piece> {
        self.arena.get_mut(id).ok_or(ChessErrors::UnknownPiece(id))
    }

    /// Every piece the arena ever issued, in creation order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.arena.iter().enumerate()
    }

    /// Identifier of the piece on `position`; `None` for empty or off-board cells.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<PieceId> {
        let index = self.cell_index(position).ok()?;
        self.cells[index]
    }

    #[inline]
    pub fn occupant(&self, position: Position) -> Option<&Piece> {
        self.piece_at(position).and_then(|id| self.arena.get(id))
    }

    #[inline]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.piece_at(position).is_some()
    }

    /// Put a lifted piece on an empty cell.
    pub fn place(&mut self, id: PieceId, position: Position) -> ChessResult<()> {
        let index = self.cell_index(position)?;
        if self.cells[index].is_some() {
            return Err(ChessErrors::SquareOccupied(position));
        }
        let piece = self.piece_mut(id)?;
        if let Some(current) = piece.position() {
            return Err(ChessErrors::PieceAlreadyPlaced {
                piece: id,
                position: current,
            });
        }
        piece.set_position(Some(position));
        self.cells[index] = Some(id);
        Ok(())
    }

    /// Lift whatever stands on `position`, if anything.
    pub fn remove(&mut self, position: Position) -> ChessResult<Option<PieceId>> {
        let index = self.cell_index(position)?;
        let Some(id) = self.cells[index].take() else {
            return Ok(None);
        };
        self.piece_mut(id)?.set_position(None);
        Ok(Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{Color, PieceKind, Position};

    #[test]
    fn place_and_remove_keep_piece_position_in_sync() {
        let mut board = Board::new(8, 8).expect("8x8 board");
        let rook = board.add_piece(PieceKind::Rook, Color::White);
        let d4 = Position::new(4, 3);

        board.place(rook, d4).expect("empty cell accepts a piece");
        assert_eq!(board.piece_at(d4), Some(rook));
        assert_eq!(board.piece(rook).expect("rook exists").position(), Some(d4));

        assert_eq!(board.remove(d4).expect("in bounds"), Some(rook));
        assert_eq!(board.piece_at(d4), None);
        assert_eq!(board.piece(rook).expect("rook exists").position(), None);
        assert_eq!(board.remove(d4).expect("in bounds"), None);
    }

    #[test]
    fn place_rejects_occupied_and_off_board_cells() {
        let mut board = Board::new(8, 8).expect("8x8 board");
        let first = board.add_piece(PieceKind::King, Color::White);
        let second = board.add_piece(PieceKind::King, Color::Black);
        let cell = Position::new(0, 0);

        board.place(first, cell).expect("empty cell");
        assert_eq!(board.place(second, cell), Err(ChessErrors::SquareOccupied(cell)));
        assert_eq!(
            board.place(second, Position::new(8, 0)),
            Err(ChessErrors::PositionOutOfBounds(Position::new(8, 0)))
        );
        assert_eq!(board.piece_at(Position::new(9, 9)), None);
    }

    #[test]
    fn placed_piece_must_be_lifted_before_moving() {
        let mut board = Board::new(8, 8).expect("8x8 board");
        let rook = board.add_piece(PieceKind::Rook, Color::Black);
        board.place(rook, Position::new(1, 1)).expect("empty cell");
        assert_eq!(
            board.place(rook, Position::new(2, 2)),
            Err(ChessErrors::PieceAlreadyPlaced {
                piece: rook,
                position: Position::new(1, 1),
            })
        );
        assert!(!board.is_occupied(Position::new(2, 2)));
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(Board::new(0, 8).is_err());
        assert!(Board::new(8, 27).is_err());
        assert!(Board::new(3, 5).is_ok());
    }
}
