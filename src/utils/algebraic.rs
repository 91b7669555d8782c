//! Conversions between file/rank notation (for example `c1`) and grid cells.
//!
//! Files are lower-case letters from `a`, ranks count from 1 at the row
//! nearest White. Row 0 therefore holds the highest rank.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Position;

/// Translate a file letter and rank number on a `rows` x `columns` board.
pub fn chess_position_to_position(
    file: char,
    rank: usize,
    rows: usize,
    columns: usize,
) -> ChessResult<Position> {
    if !file.is_ascii_lowercase() {
        return Err(ChessErrors::InvalidAlgebraic(format!("{file}{rank}")));
    }
    let column = (file as u8 - b'a') as usize;
    if column >= columns || rank == 0 || rank > rows {
        return Err(ChessErrors::InvalidAlgebraic(format!("{file}{rank}")));
    }
    Ok(Position::new(rows - rank, column))
}

/// Parse a square such as `e4` (or `b10` on taller boards).
pub fn algebraic_to_position(square: &str, rows: usize, columns: usize) -> ChessResult<Position> {
    let mut chars = square.chars();
    let file = chars
        .next()
        .ok_or_else(|| ChessErrors::InvalidAlgebraic(square.to_owned()))?;
    let rank = chars
        .as_str()
        .parse::<usize>()
        .map_err(|_| ChessErrors::InvalidAlgebraic(square.to_owned()))?;
    chess_position_to_position(file, rank, rows, columns)
}

/// Render a grid cell of a board with `rows` rows as file/rank notation.
pub fn position_to_algebraic(position: Position, rows: usize) -> ChessResult<String> {
    let square = position.square(rows);
    if !square.has_name() {
        return Err(ChessErrors::PositionOutOfBounds(position));
    }
    Ok(square.to_string())
}
