//! Engine abstraction used by the self-play harness.
//!
//! An engine only picks a move; the match decides whether it is legal.

use crate::chess_errors::ChessResult;
use crate::chess_match::match_state::ChessMatch;
use crate::game_state::chess_types::Position;

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick (origin, destination) for the player on move, or `None` when the
    /// engine has nothing to play.
    ///
    /// Takes the match mutably so engines can probe moves; the match must be
    /// left as it was found.
    fn choose_move(
        &mut self,
        chess_match: &mut ChessMatch,
    ) -> ChessResult<Option<(Position, Position)>>;
}
