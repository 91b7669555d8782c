//! Engine-vs-engine self-play harness.
//!
//! Drives a `ChessMatch` by alternating two `Engine`s through `submit_move`
//! until checkmate, a side without legal moves, or a ply cap.

use std::time::Instant;

use tracing::{debug, info};

use crate::chess_errors::ChessResult;
use crate::chess_match::match_config::MatchConfig;
use crate::chess_match::match_state::ChessMatch;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{Color, Position};
use crate::utils::algebraic::position_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    /// The side on move had no legal move while not in check.
    NoLegalMoves(Color),
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub max_plies: u32,
    pub match_config: MatchConfig,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            match_config: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_match: ChessMatch,
    /// Moves as origin+destination, for example `c1a1`.
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn report(&self) -> String {
        format!(
            "outcome={:?} plies={} turn={} white_moves={} black_moves={} white_ms={:.3} black_ms={:.3}",
            self.outcome,
            self.played_moves.len(),
            self.final_match.turn(),
            self.white_move_count,
            self.black_move_count,
            self.white_total_time_ns as f64 / 1_000_000.0,
            self.black_total_time_ns as f64 / 1_000_000.0
        )
    }
}

/// Play one match. `engine_white` moves first.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: SelfPlayConfig,
) -> ChessResult<MatchResult> {
    let mut chess_match = ChessMatch::new(config.match_config)?;
    engine_white.new_game();
    engine_black.new_game();

    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;
    let mut outcome = MatchOutcome::MaxPlies;

    for _ in 0..config.max_plies {
        if chess_match.is_terminated() {
            break;
        }

        let mover = chess_match.current_player();
        let started = Instant::now();
        let choice = match mover {
            Color::White => engine_white.choose_move(&mut chess_match)?,
            Color::Black => engine_black.choose_move(&mut chess_match)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        let Some((origin, destination)) = choice else {
            outcome = MatchOutcome::NoLegalMoves(mover);
            break;
        };

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        chess_match.submit_move(origin, destination)?;
        let notation = move_notation(origin, destination, chess_match.board().rows())?;
        debug!(%mover, notation = %notation, "played");
        played_moves.push(notation);
    }

    if let Some(winner) = chess_match.winner() {
        outcome = match winner {
            Color::White => MatchOutcome::WhiteWinCheckmate,
            Color::Black => MatchOutcome::BlackWinCheckmate,
        };
    }

    info!(outcome = ?outcome, plies = played_moves.len(), "match finished");

    Ok(MatchResult {
        outcome,
        final_match: chess_match,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

fn move_notation(origin: Position, destination: Position, rows: usize) -> ChessResult<String> {
    Ok(format!(
        "{}{}",
        position_to_algebraic(origin, rows)?,
        position_to_algebraic(destination, rows)?
    ))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::{play_engine_match, MatchOutcome, SelfPlayConfig};
    use crate::chess_errors::{ChessErrors, ChessResult};
    use crate::chess_match::match_config::MatchConfig;
    use crate::chess_match::match_state::ChessMatch;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_rules::STANDARD_LAYOUT;
    use crate::game_state::chess_types::{Color, Position};
    use crate::utils::algebraic::algebraic_to_position;

    struct ScriptedEngine {
        moves: VecDeque<(Position, Position)>,
    }

    impl ScriptedEngine {
        fn new(moves: &[(&str, &str)]) -> Self {
            let sq = |s: &str| algebraic_to_position(s, 8, 8).expect("script square should parse");
            Self {
                moves: moves.iter().map(|(from, to)| (sq(from), sq(to))).collect(),
            }
        }
    }

    impl Engine for ScriptedEngine {
        fn name(&self) -> &str {
            "Scripted"
        }

        fn choose_move(
            &mut self,
            _chess_match: &mut ChessMatch,
        ) -> ChessResult<Option<(Position, Position)>> {
            Ok(self.moves.pop_front())
        }
    }

    #[test]
    fn scripted_mate_ends_the_match() {
        let mut white = ScriptedEngine::new(&[("c1", "a1")]);
        let mut black = ScriptedEngine::new(&[]);

        let result = play_engine_match(&mut white, &mut black, SelfPlayConfig::default())
            .expect("scripted game should run");
        assert_eq!(result.outcome, MatchOutcome::WhiteWinCheckmate);
        assert_eq!(result.played_moves, vec!["c1a1".to_owned()]);
        assert!(result.final_match.is_terminated());
        assert_eq!(result.black_move_count, 0);
    }

    #[test]
    fn exhausted_engine_is_not_credited_with_a_move() {
        let mut white = ScriptedEngine::new(&[("c1", "c2")]);
        let mut black = ScriptedEngine::new(&[]);

        let result = play_engine_match(&mut white, &mut black, SelfPlayConfig::default())
            .expect("scripted game should run");
        assert_eq!(result.outcome, MatchOutcome::NoLegalMoves(Color::Black));
        assert_eq!(result.played_moves, vec!["c1c2".to_owned()]);
        assert_eq!(result.white_move_count, 1);
        assert_eq!(result.black_move_count, 0);
        assert_eq!(result.black_total_time_ns, 0);
    }

    #[test]
    fn illegal_script_is_reported() {
        let mut white = ScriptedEngine::new(&[("c1", "d2")]);
        let mut black = ScriptedEngine::new(&[]);

        let result = play_engine_match(&mut white, &mut black, SelfPlayConfig::default());
        assert!(matches!(result, Err(ChessErrors::InvalidDestination { .. })));
    }

    #[test]
    fn random_self_play_respects_ply_cap() {
        let mut white = RandomEngine::seeded(21);
        let mut black = RandomEngine::seeded(22);
        let config = SelfPlayConfig {
            max_plies: 30,
            match_config: MatchConfig::standard_board(STANDARD_LAYOUT)
                .expect("layout should parse"),
        };

        let result = play_engine_match(&mut white, &mut black, config).expect("self-play runs");
        assert!(result.played_moves.len() <= 30);
        match result.outcome {
            MatchOutcome::WhiteWinCheckmate | MatchOutcome::BlackWinCheckmate => {
                assert!(result.final_match.is_terminated());
            }
            MatchOutcome::MaxPlies => assert_eq!(result.played_moves.len(), 30),
            MatchOutcome::NoLegalMoves(_) => assert!(!result.final_match.is_check()),
        }
    }
}
