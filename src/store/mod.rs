//! Game stores: two mutually exclusive designs behind one interface.
//!
//! The daily store derives one deterministic game per UTC calendar day and
//! stores nothing; the session store mints random games into an in-memory
//! map. The variant is picked once at startup via configuration.

mod daily;
mod session;

pub use daily::{daily_game_id, DailyStore};
pub use session::SessionStore;

use crate::types::Game;

/// Which store design to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreVariant {
    Daily,
    Session,
}

pub enum GameStore {
    Daily(DailyStore),
    Session(SessionStore),
}

impl GameStore {
    pub fn new(variant: StoreVariant) -> Self {
        match variant {
            StoreVariant::Daily => Self::Daily(DailyStore),
            StoreVariant::Session => Self::Session(SessionStore::new()),
        }
    }

    /// Start (or for the daily variant, derive) the current game.
    pub async fn start_game(&self) -> Game {
        match self {
            Self::Daily(store) => store.start_game(),
            Self::Session(store) => store.create_game().await,
        }
    }

    /// Look up a game by id. `None` for unknown session ids and for daily
    /// ids that are not positive integers.
    pub async fn get_game(&self, id: &str) -> Option<Game> {
        match self {
            Self::Daily(store) => store.get_game(id),
            Self::Session(store) => store.get_game(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_daily_variant_start_is_retrievable() {
        let store = GameStore::new(StoreVariant::Daily);
        let game = store.start_game().await;
        let fetched = store.get_game(&game.id).await.unwrap();
        assert_eq!(fetched.phrase, game.phrase);
    }

    #[tokio::test]
    async fn test_session_variant_start_is_retrievable() {
        let store = GameStore::new(StoreVariant::Session);
        let game = store.start_game().await;
        let fetched = store.get_game(&game.id).await.unwrap();
        assert_eq!(fetched.phrase, game.phrase);
    }
}
