//! Random session-keyed store.
//!
//! Each start request mints a fresh game with a randomly chosen phrase and
//! keeps it in process memory for the lifetime of the server. There is no
//! eviction and no deletion path; unbounded growth is an accepted limitation
//! of this demo-scale variant.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;

use crate::phrases::SAMPLE_PHRASES;
use crate::types::{Game, GameId};

#[derive(Clone, Default)]
pub struct SessionStore {
    games: Arc<RwLock<HashMap<GameId, Game>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game with a uniformly random registry phrase and a fresh id.
    pub async fn create_game(&self) -> Game {
        let phrase = {
            let mut rng = rand::rng();
            SAMPLE_PHRASES[rng.random_range(0..SAMPLE_PHRASES.len())]
        };

        let mut game = Game::from_phrase(ulid::Ulid::new().to_string(), phrase);
        game.created_at = Some(chrono::Utc::now().to_rfc3339());

        self.games
            .write()
            .await
            .insert(game.id.clone(), game.clone());
        game
    }

    pub async fn get_game(&self, id: &str) -> Option<Game> {
        self.games.read().await.get(id).cloned()
    }
}
