//! Uniform random legal-move engine.
//!
//! Used for self-play smoke runs, benchmarks and randomized tests.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};
use tracing::trace;

use crate::chess_errors::ChessResult;
use crate::chess_match::match_state::ChessMatch;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Position;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// Deterministic engine for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        chess_match: &mut ChessMatch,
    ) -> ChessResult<Option<(Position, Position)>> {
        let legal_moves = chess_match.legal_moves(chess_match.current_player())?;
        trace!(legal_moves = legal_moves.len(), "random engine choosing");
        Ok(legal_moves.as_slice().choose(&mut self.rng).copied())
    }
}
