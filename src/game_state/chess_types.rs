//! Core value types shared by the board, the move patterns and the match.

use std::fmt;

/// Side owning a piece. Assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is stored separately on the piece).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Upper-case letter used by layout notation.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A board cell. Row 0 is the rank farthest from White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Offset by a signed delta, `None` when the result would be negative.
    /// Upper bounds are the board's concern.
    #[inline]
    pub fn offset(self, d_row: isize, d_column: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let column = self.column.checked_add_signed(d_column)?;
        Some(Self { row, column })
    }

    /// This cell as named on a board `rows` high.
    #[inline]
    pub const fn square(self, rows: usize) -> Square {
        Square {
            position: self,
            rows,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Number of file letters, `a` through `z`.
pub const FILE_COUNT: usize = 26;

/// A cell together with the height of its board, displayed in file/rank
/// notation (`e4`). Cells with no such name fall back to `(row, column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub position: Position,
    pub rows: usize,
}

impl Square {
    #[inline]
    pub const fn has_name(self) -> bool {
        self.position.row < self.rows && self.position.column < FILE_COUNT
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_name() {
            return write!(f, "{}", self.position);
        }
        let file = char::from(b'a' + self.position.column as u8);
        write!(f, "{file}{}", self.rows - self.position.row)
    }
}

/// Stable identifier of a piece inside the board's arena.
pub type PieceId = usize;

#[cfg(test)]
mod tests {
    use super::{Color, PieceKind, Position};

    #[test]
    fn opposite_color_is_an_involution() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::White.opposite().opposite(), Color::White);
    }

    #[test]
    fn piece_letters_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_letter(kind.letter()), Some(kind));
            assert_eq!(
                PieceKind::from_letter(kind.letter().to_ascii_lowercase()),
                Some(kind)
            );
        }
        assert_eq!(PieceKind::from_letter('x'), None);
    }

    #[test]
    fn offset_rejects_negative_cells() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 2), Some(Position::new(1, 2)));
    }

    #[test]
    fn squares_display_as_file_and_rank() {
        assert_eq!(Position::new(7, 2).square(8).to_string(), "c1");
        assert_eq!(Position::new(0, 0).square(8).to_string(), "a8");
        assert_eq!(Position::new(0, 1).square(10).to_string(), "b10");
        assert_eq!(Position::new(8, 0).square(8).to_string(), "(8, 0)");
    }
}
