//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by the board, the
//! coordinate helpers, setup and the match itself. Variants carry the
//! positions involved so callers can report precise diagnostics.
//!
//! Usage guidelines:
//! - `InvalidOrigin`, `InvalidDestination` and `SelfCheckViolation` are
//!   caller-input errors. They name squares in file/rank notation. The match
//!   is left exactly as it was before the rejected call and the caller may
//!   retry with another move.
//! - Parsing and setup variants (`InvalidAlgebraic`, `InvalidLayoutToken`,
//!   `InvalidSetup`, `InvalidBoardDimensions`) are reported while building a
//!   match and are suitable for presenting to end users.
//! - `MissingKingInvariant` and the board-level variants raised from inside
//!   the match indicate corrupted state. They are not recoverable by normal
//!   library users.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceId, Position, Square};

/// Why a square was refused as the origin of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginRejection {
    /// No piece stands on the square.
    EmptySquare,
    /// The piece belongs to the player who is not on move.
    NotYourPiece,
    /// The piece has no reachable destination at all.
    NoPossibleMoves,
}

impl std::fmt::Display for OriginRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OriginRejection::EmptySquare => write!(f, "there is no piece on the origin square"),
            OriginRejection::NotYourPiece => write!(f, "the piece on the origin square is not yours"),
            OriginRejection::NoPossibleMoves => {
                write!(f, "the piece on the origin square has no possible moves")
            }
        }
    }
}

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// The origin square cannot start a move for the player on move.
    #[error("invalid origin {square}: {reason}")]
    InvalidOrigin {
        square: Square,
        reason: OriginRejection,
    },

    /// The destination is not reachable by the piece on the origin square.
    #[error("invalid destination {destination} for the piece on {origin}")]
    InvalidDestination {
        origin: Square,
        destination: Square,
    },

    /// The move would leave the mover's own king attacked. Raised only after
    /// the move has been rolled back.
    #[error("moving {origin} to {destination} would leave your own king in check")]
    SelfCheckViolation {
        origin: Square,
        destination: Square,
    },

    /// A color has no king in play while being tested for check.
    ///
    /// This represents corrupted setup or bookkeeping; callers should treat it
    /// as a fatal logic error.
    #[error("there is no {0} king on the board")]
    MissingKingInvariant(Color),

    /// A position lies outside the board grid.
    #[error("position {0} is outside the board")]
    PositionOutOfBounds(Position),

    /// Attempted to place a piece on a square that already holds one.
    #[error("position {0} is already occupied")]
    SquareOccupied(Position),

    /// Attempted to place a piece that already stands on `position`. It has
    /// to be removed first.
    #[error("piece {piece} already stands on {position}")]
    PieceAlreadyPlaced { piece: PieceId, position: Position },

    /// Attempted to lift a piece from an empty square.
    #[error("position {0} is empty")]
    EmptySquare(Position),

    /// A piece identifier that the arena never issued.
    #[error("unknown piece id {0}")]
    UnknownPiece(PieceId),

    /// A square in file/rank notation could not be translated.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A layout token could not be parsed.
    #[error("invalid layout token: {0}")]
    InvalidLayoutToken(String),

    /// The initial placement is not a playable position.
    #[error("invalid setup: {0}")]
    InvalidSetup(String),

    /// Board dimensions must be non-zero and fit file letters `a..=z`.
    #[error("invalid board dimensions {rows}x{columns}")]
    InvalidBoardDimensions { rows: usize, columns: usize },

    /// A move was submitted after checkmate ended the match.
    #[error("the match has already ended")]
    MatchTerminated,
}

pub type ChessResult<T> = Result<T, ChessErrors>;
