//! Render the pieces in play back to layout notation.
//!
//! Tokens are ordered from the lowest rank up, files left to right, which is
//! the order the bundled layouts are written in.

use crate::chess_match::match_state::ChessMatch;
use crate::game_state::chess_types::{Color, Position};
use crate::utils::algebraic::position_to_algebraic;

pub fn generate_layout(chess_match: &ChessMatch) -> String {
    let board = chess_match.board();
    let mut tokens = Vec::<String>::new();

    for row in (0..board.rows()).rev() {
        for column in 0..board.columns() {
            let position = Position::new(row, column);
            let Some(piece) = board.occupant(position) else {
                continue;
            };
            let Ok(square) = position_to_algebraic(position, board.rows()) else {
                continue;
            };
            let letter = match piece.color() {
                Color::White => piece.kind().letter(),
                Color::Black => piece.kind().letter().to_ascii_lowercase(),
            };
            tokens.push(format!("{letter}{square}"));
        }
    }

    tokens.join(" ")
}
