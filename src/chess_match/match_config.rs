//! Match configuration: board size and initial placement.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::{STANDARD_COLUMNS, STANDARD_ROWS};
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::utils::layout_parser::parse_layout;

/// One piece of the initial layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub rows: usize,
    pub columns: usize,
    pub layout: Vec<Placement>,
}

impl MatchConfig {
    pub fn from_layout(rows: usize, columns: usize, layout: &str) -> ChessResult<Self> {
        Ok(Self {
            rows,
            columns,
            layout: parse_layout(layout, rows, columns)?,
        })
    }

    /// Layout on a standard 8x8 board.
    pub fn standard_board(layout: &str) -> ChessResult<Self> {
        Self::from_layout(STANDARD_ROWS, STANDARD_COLUMNS, layout)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rows: STANDARD_ROWS,
            columns: STANDARD_COLUMNS,
            layout: vec![
                Placement {
                    kind: PieceKind::Rook,
                    color: Color::White,
                    position: Position::new(7, 2),
                },
                Placement {
                    kind: PieceKind::King,
                    color: Color::White,
                    position: Position::new(7, 3),
                },
                Placement {
                    kind: PieceKind::Rook,
                    color: Color::White,
                    position: Position::new(1, 7),
                },
                Placement {
                    kind: PieceKind::King,
                    color: Color::Black,
                    position: Position::new(0, 0),
                },
                Placement {
                    kind: PieceKind::Rook,
                    color: Color::Black,
                    position: Position::new(0, 1),
                },
            ],
        }
    }
}
