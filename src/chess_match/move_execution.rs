//! Raw move execution and its exact inverse.
//!
//! `execute_move` performs no legality checks; it is shared by committed
//! moves and by speculative probes. Every execution must be undone with the
//! same origin/destination pair before anything else observes the match.
//! `probe_move` packages that pairing for read-only observations.

use tracing::trace;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::chess_match::match_state::ChessMatch;
use crate::game_state::chess_types::{PieceId, Position};

impl ChessMatch {
    /// Move the piece on `origin` to `destination`, capturing whatever stood
    /// there. Returns the captured piece.
    pub fn execute_move(
        &mut self,
        origin: Position,
        destination: Position,
    ) -> ChessResult<Option<PieceId>> {
        self.ensure_on_board(origin, destination)?;

        let moving = self
            .board
            .remove(origin)?
            .ok_or(ChessErrors::EmptySquare(origin))?;
        self.board.piece_mut(moving)?.increment_moves_count();

        let captured = self.board.remove(destination)?;
        if let Some(victim) = captured {
            self.captured.insert(victim);
        }
        self.board.place(moving, destination)?;

        trace!(%origin, %destination, captured = ?captured, "executed");
        Ok(captured)
    }

    /// Undo `execute_move(origin, destination)` given the piece it captured.
    pub fn undo_move(
        &mut self,
        origin: Position,
        destination: Position,
        captured: Option<PieceId>,
    ) -> ChessResult<()> {
        self.ensure_on_board(origin, destination)?;

        let moving = self
            .board
            .remove(destination)?
            .ok_or(ChessErrors::EmptySquare(destination))?;
        self.board.piece_mut(moving)?.decrement_moves_count();

        if let Some(victim) = captured {
            self.board.place(victim, destination)?;
            self.captured.remove(&victim);
        }
        self.board.place(moving, origin)?;

        trace!(%origin, %destination, captured = ?captured, "undone");
        Ok(())
    }

    /// Execute a move, observe the resulting position, then undo it.
    ///
    /// The observation cannot mutate the match, so the match is restored
    /// exactly whether or not the observation fails.
    pub fn probe_move<T>(
        &mut self,
        origin: Position,
        destination: Position,
        observe: impl FnOnce(&Self) -> ChessResult<T>,
    ) -> ChessResult<T> {
        let captured = self.execute_move(origin, destination)?;
        let observed = observe(self);
        self.undo_move(origin, destination, captured)?;
        observed
    }

    fn ensure_on_board(&self, origin: Position, destination: Position) -> ChessResult<()> {
        for position in [origin, destination] {
            if !self.board.contains(position) {
                return Err(ChessErrors::PositionOutOfBounds(position));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::chess_errors::ChessErrors;
    use crate::chess_match::match_config::MatchConfig;
    use crate::chess_match::match_state::ChessMatch;
    use crate::game_state::chess_types::{Color, Position};
    use crate::utils::algebraic::algebraic_to_position;

    fn sq(square: &str) -> Position {
        algebraic_to_position(square, 8, 8).expect("test square should parse")
    }

    fn match_from(layout: &str) -> ChessMatch {
        let config = MatchConfig::standard_board(layout).expect("test layout should parse");
        ChessMatch::new(config).expect("test layout should be playable")
    }

    #[test]
    fn execute_then_undo_restores_everything() {
        let mut game = match_from("Ke1 Rd1 kh8 rd5");
        let before = game.clone();
        let rook = game.board().piece_at(sq("d1")).expect("white rook on d1");
        let victim = game.board().piece_at(sq("d5")).expect("black rook on d5");

        let captured = game.execute_move(sq("d1"), sq("d5")).expect("cells are on the board");
        assert_eq!(captured, Some(victim));
        assert_eq!(game.board().piece_at(sq("d5")), Some(rook));
        assert_eq!(game.board().piece_at(sq("d1")), None);
        assert_eq!(game.piece(rook).expect("registered").moves_count(), 1);
        assert!(game.pieces_captured(Color::Black).contains(&victim));

        game.undo_move(sq("d1"), sq("d5"), captured).expect("pairs with execute");
        assert_eq!(game, before);
        assert_eq!(game.piece(rook).expect("registered").moves_count(), 0);
    }

    #[test]
    fn execute_from_empty_or_off_board_cell_changes_nothing() {
        let mut game = match_from("Ke1 kh8");
        let before = game.clone();

        assert_eq!(
            game.execute_move(sq("c3"), sq("c4")),
            Err(ChessErrors::EmptySquare(sq("c3")))
        );
        assert_eq!(
            game.execute_move(sq("e1"), Position::new(8, 4)),
            Err(ChessErrors::PositionOutOfBounds(Position::new(8, 4)))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn probe_observes_the_moved_position_and_restores_it() {
        let mut game = match_from("Ke1 Re2 ke8 re7");
        let before = game.clone();

        let exposed = game
            .probe_move(sq("e2"), sq("d2"), |probe| probe.is_in_check(Color::White))
            .expect("probe runs");
        assert!(exposed);
        assert_eq!(game, before);

        let failed = game.probe_move(sq("e2"), sq("e3"), |_| {
            Err::<(), _>(ChessErrors::MissingKingInvariant(Color::White))
        });
        assert!(failed.is_err());
        assert_eq!(game, before);
    }
}
