//! Standalone random self-play runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `CHESS_MATCH_LAYOUT="Kd4 Ra6 Rb1 kh7 rh1 rh2" CHESS_MATCH_SEED=7 RUST_LOG=debug cargo run --bin self_play`

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use chess_match::chess_match::match_config::MatchConfig;
use chess_match::engines::engine_random::RandomEngine;
use chess_match::engines::engine_trait::Engine;
use chess_match::game_state::chess_rules::DEFAULT_LAYOUT;
use chess_match::utils::layout_generator::generate_layout;
use chess_match::utils::match_harness::{play_engine_match, SelfPlayConfig};

fn env_or<T: FromStr>(name: &str, default: T) -> Result<T, String> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{name} has an invalid value: {value}")),
        Err(_) => Ok(default),
    }
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let layout = env_or("CHESS_MATCH_LAYOUT", DEFAULT_LAYOUT.to_owned())?;
    let seed = env_or("CHESS_MATCH_SEED", 0u64)?;
    let max_plies = env_or("CHESS_MATCH_MAX_PLIES", 200u32)?;

    let match_config = MatchConfig::standard_board(&layout).map_err(|e| e.to_string())?;
    let mut white = RandomEngine::seeded(seed);
    let mut black = RandomEngine::seeded(seed.wrapping_add(1));
    tracing::info!(white = white.name(), black = black.name(), seed, max_plies, "starting self-play");

    let result = play_engine_match(
        &mut white,
        &mut black,
        SelfPlayConfig {
            max_plies,
            match_config,
        },
    )
    .map_err(|e| e.to_string())?;

    println!("{}", result.report());
    println!("moves: {}", result.played_moves.join(" "));
    println!("final layout: {}", generate_layout(&result.final_match));
    Ok(())
}
