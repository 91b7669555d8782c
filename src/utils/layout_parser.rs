//! Layout-notation parser.
//!
//! A layout lists one token per piece, separated by whitespace or commas.
//! Each token is a piece letter (`K Q R B N P`) followed by a square in
//! file/rank notation. Upper-case letters are White, lower-case are Black.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::chess_match::match_config::Placement;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::utils::algebraic::algebraic_to_position;

pub fn parse_layout(layout: &str, rows: usize, columns: usize) -> ChessResult<Vec<Placement>> {
    layout
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| parse_placement(token, rows, columns))
        .collect()
}

fn parse_placement(token: &str, rows: usize, columns: usize) -> ChessResult<Placement> {
    let mut chars = token.chars();
    let letter = chars
        .next()
        .ok_or_else(|| ChessErrors::InvalidLayoutToken(token.to_owned()))?;
    let kind = PieceKind::from_letter(letter)
        .ok_or_else(|| ChessErrors::InvalidLayoutToken(token.to_owned()))?;
    let color = if letter.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let position = algebraic_to_position(chars.as_str(), rows, columns)
        .map_err(|_| ChessErrors::InvalidLayoutToken(token.to_owned()))?;

    Ok(Placement {
        kind,
        color,
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_layout;
    use crate::chess_errors::ChessErrors;
    use crate::chess_match::match_config::Placement;
    use crate::game_state::chess_rules::{DEFAULT_LAYOUT, STANDARD_LAYOUT};
    use crate::game_state::chess_types::{Color, PieceKind, Position};

    #[test]
    fn parses_default_layout() {
        let placements = parse_layout(DEFAULT_LAYOUT, 8, 8).expect("default layout should parse");
        assert_eq!(placements.len(), 5);
        assert_eq!(
            placements[0],
            Placement {
                kind: PieceKind::Rook,
                color: Color::White,
                position: Position::new(7, 2),
            }
        );
        assert_eq!(
            placements[3],
            Placement {
                kind: PieceKind::King,
                color: Color::Black,
                position: Position::new(0, 0),
            }
        );
    }

    #[test]
    fn accepts_commas_and_extra_whitespace() {
        let placements =
            parse_layout(" Ke1,ke8 ,\n Qd1 ", 8, 8).expect("separators should be tolerated");
        assert_eq!(placements.len(), 3);
        assert_eq!(placements[2].kind, PieceKind::Queen);
    }

    #[test]
    fn standard_layout_has_sixteen_pieces_per_side() {
        let placements = parse_layout(STANDARD_LAYOUT, 8, 8).expect("standard layout should parse");
        let white = placements.iter().filter(|p| p.color == Color::White).count();
        assert_eq!(white, 16);
        assert_eq!(placements.len(), 32);
    }

    #[test]
    fn rejects_bad_tokens() {
        for bad in ["Xa1", "K", "Ki9", "9a1"] {
            assert_eq!(
                parse_layout(bad, 8, 8),
                Err(ChessErrors::InvalidLayoutToken(bad.to_owned()))
            );
        }
    }
}
