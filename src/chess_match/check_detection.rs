//! Check, checkmate and legal-move inspection.
//!
//! Check is tested by asking every enemy piece in play whether its move
//! matrix reaches the king's cell. Checkmate and legal-move listing probe
//! every candidate move of a side with `probe_move`.

use tracing::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::chess_match::match_state::ChessMatch;
use crate::game_state::chess_types::{Color, PieceId, PieceKind, Position};
use crate::moves::piece_moves::possible_moves;

impl ChessMatch {
    /// The king of `color` still in play.
    pub fn king(&self, color: Color) -> ChessResult<PieceId> {
        self.pieces_in_play(color)
            .into_iter()
            .find(|&id| {
                self.board
                    .piece(id)
                    .is_ok_and(|piece| piece.kind() == PieceKind::King)
            })
            .ok_or(ChessErrors::MissingKingInvariant(color))
    }

    /// Whether any enemy piece in play can reach the king of `color`.
    pub fn is_in_check(&self, color: Color) -> ChessResult<bool> {
        let king = self.king(color)?;
        let king_position = self
            .board
            .piece(king)?
            .position()
            .ok_or(ChessErrors::MissingKingInvariant(color))?;

        for attacker in self.pieces_in_play(color.opposite()) {
            if possible_moves(&self.board, attacker)?.get(king_position) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether `color` is in check and no move of any of its pieces clears it.
    pub fn is_checkmate(&mut self, color: Color) -> ChessResult<bool> {
        if !self.is_in_check(color)? {
            return Ok(false);
        }

        let mut examined = 0usize;
        for (origin, destination) in self.candidate_moves(color)? {
            examined += 1;
            let still_in_check =
                self.probe_move(origin, destination, |probe| probe.is_in_check(color))?;
            if !still_in_check {
                debug!(%color, %origin, %destination, examined, "check can be cleared");
                return Ok(false);
            }
        }

        debug!(%color, examined, "no move clears check");
        Ok(true)
    }

    /// Every move of `color` that does not leave its own king attacked.
    pub fn legal_moves(&mut self, color: Color) -> ChessResult<Vec<(Position, Position)>> {
        let mut legal = Vec::new();
        for (origin, destination) in self.candidate_moves(color)? {
            let exposed = self.probe_move(origin, destination, |probe| probe.is_in_check(color))?;
            if !exposed {
                legal.push((origin, destination));
            }
        }
        Ok(legal)
    }

    /// Every (origin, destination) pair marked by the move matrices of the
    /// pieces `color` has in play.
    fn candidate_moves(&self, color: Color) -> ChessResult<Vec<(Position, Position)>> {
        let mut candidates = Vec::new();
        for id in self.pieces_in_play(color) {
            let Some(origin) = self.board.piece(id)?.position() else {
                continue;
            };
            let targets = possible_moves(&self.board, id)?;
            candidates.extend(targets.positions().map(|destination| (origin, destination)));
        }
        Ok(candidates)
    }
}
