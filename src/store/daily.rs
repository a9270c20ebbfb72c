//! Deterministic daily-indexed store.
//!
//! Nothing is stored: a game id is the number of UTC calendar days since the
//! anchor day, and the game is recomputed from the id on every request. The
//! same id reproduces the same game across process restarts.

use chrono::Utc;

use crate::phrases::SAMPLE_PHRASES;
use crate::types::Game;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// 2026-01-01 UTC. Day 1. Chosen to keep game ids small and human-friendly.
const GAME_EPOCH_UTC_MS: i64 = 1_767_225_600_000;

/// Compute the game id for a moment in time: UTC days elapsed since the
/// anchor, plus one. Clamped to 1 for any time at or before the anchor day,
/// so ids are always positive and grow by exactly one per calendar day.
pub fn daily_game_id(now_ms: i64) -> u64 {
    let today = now_ms.div_euclid(MS_PER_DAY);
    let epoch_day = GAME_EPOCH_UTC_MS / MS_PER_DAY;
    (today - epoch_day + 1).max(1) as u64
}

fn game_for_day(id: u64) -> Game {
    let phrase = SAMPLE_PHRASES[((id - 1) % SAMPLE_PHRASES.len() as u64) as usize];
    Game::from_phrase(id.to_string(), phrase)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DailyStore;

impl DailyStore {
    /// Derive today's game from the wall clock.
    pub fn start_game(&self) -> Game {
        game_for_day(daily_game_id(Utc::now().timestamp_millis()))
    }

    /// Re-derive a game from its id. Ids must parse as positive base-10
    /// integers; anything else is treated as an unknown game.
    pub fn get_game(&self, raw_id: &str) -> Option<Game> {
        let id: u64 = raw_id.parse().ok().filter(|id| *id > 0)?;
        Some(game_for_day(id))
    }
}
