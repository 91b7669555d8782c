use crate::game_state::chess_types::{Color, PieceKind, Position};

/// A piece owned by the board's arena.
///
/// `position` is written only by `Board::place` / `Board::remove`, so it always
/// agrees with the cell that references the piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Option<Position>,
    moves_count: u32,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            position: None,
            moves_count: 0,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current cell, `None` while lifted off the board or captured.
    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    #[inline]
    pub fn moves_count(&self) -> u32 {
        self.moves_count
    }

    pub(crate) fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }

    pub(crate) fn increment_moves_count(&mut self) {
        self.moves_count = self.moves_count.saturating_add(1);
    }

    pub(crate) fn decrement_moves_count(&mut self) {
        self.moves_count = self.moves_count.saturating_sub(1);
    }
}
