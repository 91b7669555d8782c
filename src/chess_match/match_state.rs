//! Match state: turn sequencing, piece bookkeeping and the move protocol.
//!
//! `ChessMatch` owns the board (and through it every piece), the set of
//! captured pieces, the turn counter, the player on move, the check flag and
//! the terminal flag. Raw execution and rollback live in `move_execution`,
//! check and checkmate detection in `check_detection`.

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::chess_errors::{ChessErrors, ChessResult, OriginRejection};
use crate::chess_match::match_config::MatchConfig;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceId, PieceKind, Position};
use crate::game_state::piece::Piece;
use crate::moves::piece_moves::{can_move_to, has_any_possible_move};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMatch {
    pub(crate) board: Board,
    /// Every piece placed through `place_new_piece`, captured or not.
    pub(crate) registry: Vec<PieceId>,
    pub(crate) captured: BTreeSet<PieceId>,
    turn: u32,
    current_player: Color,
    terminated: bool,
    check: bool,
}

/// What a committed move changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub origin: Position,
    pub destination: Position,
    pub captured: Option<PieceId>,
    /// The mover's opponent is attacked after the move.
    pub check: bool,
    /// The mover's opponent has no move that clears the check.
    pub checkmate: bool,
    /// Turn number after the move.
    pub turn: u32,
    /// Player on move after the move (unchanged on checkmate).
    pub current_player: Color,
}

impl ChessMatch {
    /// Build a match from a board size and initial layout.
    ///
    /// The layout must give each side exactly one king, and Black must not
    /// start in check since White moves first.
    pub fn new(config: MatchConfig) -> ChessResult<Self> {
        let mut chess_match = Self {
            board: Board::new(config.rows, config.columns)?,
            registry: Vec::with_capacity(config.layout.len()),
            captured: BTreeSet::new(),
            turn: 1,
            current_player: Color::White,
            terminated: false,
            check: false,
        };

        for placement in &config.layout {
            chess_match.place_new_piece(placement.kind, placement.color, placement.position)?;
        }

        chess_match.validate_setup()?;
        chess_match.check = chess_match.is_in_check(Color::White)?;
        Ok(chess_match)
    }

    /// Create a piece and put it on an empty cell during setup.
    pub fn place_new_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        position: Position,
    ) -> ChessResult<PieceId> {
        if !self.board.contains(position) {
            return Err(ChessErrors::PositionOutOfBounds(position));
        }
        if self.board.is_occupied(position) {
            return Err(ChessErrors::SquareOccupied(position));
        }
        let id = self.board.add_piece(kind, color);
        self.board.place(id, position)?;
        self.registry.push(id);
        Ok(id)
    }

    fn validate_setup(&self) -> ChessResult<()> {
        for color in [Color::White, Color::Black] {
            let in_play = self.pieces_in_play(color);
            if in_play.is_empty() {
                return Err(ChessErrors::InvalidSetup(format!("{color} has no pieces")));
            }
            let kings = in_play
                .iter()
                .filter(|&&id| {
                    self.board
                        .piece(id)
                        .is_ok_and(|piece| piece.kind() == PieceKind::King)
                })
                .count();
            if kings != 1 {
                return Err(ChessErrors::InvalidSetup(format!(
                    "{color} must have exactly one king, found {kings}"
                )));
            }
        }
        if self.is_in_check(Color::Black)? {
            return Err(ChessErrors::InvalidSetup(
                "black starts in check with white to move".to_owned(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> ChessResult<&Piece> {
        self.board.piece(id)
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Whether the last committed move left its mover's opponent in check.
    #[inline]
    pub fn is_check(&self) -> bool {
        self.check
    }

    /// The side that delivered checkmate, once the match is over.
    pub fn winner(&self) -> Option<Color> {
        self.terminated.then_some(self.current_player)
    }

    /// Every piece ever placed, in placement order.
    pub fn registry(&self) -> &[PieceId] {
        &self.registry
    }

    pub fn pieces_captured(&self, color: Color) -> BTreeSet<PieceId> {
        self.captured
            .iter()
            .copied()
            .filter(|&id| self.has_color(id, color))
            .collect()
    }

    /// Registered pieces of `color` minus the captured ones.
    pub fn pieces_in_play(&self, color: Color) -> BTreeSet<PieceId> {
        let captured = self.pieces_captured(color);
        self.registry
            .iter()
            .copied()
            .filter(|&id| self.has_color(id, color) && !captured.contains(&id))
            .collect()
    }

    #[inline]
    fn has_color(&self, id: PieceId, color: Color) -> bool {
        self.board.piece(id).is_ok_and(|piece| piece.color() == color)
    }

    /// Check that `position` holds a piece of the player on move that has
    /// somewhere to go.
    pub fn validate_origin(&self, position: Position) -> ChessResult<()> {
        let square = position.square(self.board.rows());
        let reject = |reason| Err(ChessErrors::InvalidOrigin { square, reason });

        let Some(id) = self.board.piece_at(position) else {
            return reject(OriginRejection::EmptySquare);
        };
        if self.board.piece(id)?.color() != self.current_player {
            return reject(OriginRejection::NotYourPiece);
        }
        if !has_any_possible_move(&self.board, id)? {
            return reject(OriginRejection::NoPossibleMoves);
        }
        Ok(())
    }

    /// Check that the piece on `origin` can reach `destination`.
    pub fn validate_destination(&self, origin: Position, destination: Position) -> ChessResult<()> {
        let rows = self.board.rows();
        let Some(id) = self.board.piece_at(origin) else {
            return Err(ChessErrors::InvalidOrigin {
                square: origin.square(rows),
                reason: OriginRejection::EmptySquare,
            });
        };
        if !can_move_to(&self.board, id, destination)? {
            return Err(ChessErrors::InvalidDestination {
                origin: origin.square(rows),
                destination: destination.square(rows),
            });
        }
        Ok(())
    }

    /// Play a move for the player on move.
    ///
    /// The move is executed, then rolled back with `SelfCheckViolation` if it
    /// leaves the mover's king attacked. Otherwise the check flag is
    /// recomputed for the opponent, and the match either ends in checkmate or
    /// the turn passes. Any error leaves the match exactly as it was.
    pub fn play_move(&mut self, origin: Position, destination: Position) -> ChessResult<MoveOutcome> {
        if self.terminated {
            return Err(ChessErrors::MatchTerminated);
        }

        let mover = self.current_player;
        let opponent = mover.opposite();
        let captured = self.execute_move(origin, destination)?;

        let verdict = self.judge_committed_move(mover);
        let (check, checkmate) = match verdict {
            Ok(Some(flags)) => flags,
            Ok(None) => {
                self.undo_move(origin, destination, captured)?;
                let rows = self.board.rows();
                let (origin, destination) = (origin.square(rows), destination.square(rows));
                warn!(%mover, %origin, %destination, "rejected move leaving own king in check");
                return Err(ChessErrors::SelfCheckViolation {
                    origin,
                    destination,
                });
            }
            Err(error) => {
                self.undo_move(origin, destination, captured)?;
                return Err(error);
            }
        };

        self.check = check;
        if checkmate {
            self.terminated = true;
            info!(turn = self.turn, winner = %mover, "checkmate");
        } else {
            self.turn += 1;
            self.current_player = opponent;
        }

        info!(
            turn = self.turn,
            %mover,
            %origin,
            %destination,
            captured = captured.is_some(),
            check,
            "move committed"
        );

        Ok(MoveOutcome {
            origin,
            destination,
            captured,
            check,
            checkmate,
            turn: self.turn,
            current_player: self.current_player,
        })
    }

    /// `None` when the mover's own king is attacked, otherwise the opponent's
    /// (check, checkmate) flags.
    fn judge_committed_move(&mut self, mover: Color) -> ChessResult<Option<(bool, bool)>> {
        if self.is_in_check(mover)? {
            return Ok(None);
        }
        let opponent = mover.opposite();
        let check = self.is_in_check(opponent)?;
        let checkmate = self.is_checkmate(opponent)?;
        Ok(Some((check, checkmate)))
    }

    /// Validate origin and destination, then play the move.
    pub fn submit_move(&mut self, origin: Position, destination: Position) -> ChessResult<MoveOutcome> {
        if self.terminated {
            return Err(ChessErrors::MatchTerminated);
        }
        self.validate_origin(origin)?;
        self.validate_destination(origin, destination)?;
        self.play_move(origin, destination)
    }
}
