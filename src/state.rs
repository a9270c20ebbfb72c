use crate::similarity::SimilarityEstimator;
use crate::store::{GameStore, StoreVariant};

/// Shared application state
pub struct AppState {
    pub store: GameStore,
    pub similarity: Box<dyn SimilarityEstimator>,
}

impl AppState {
    pub fn new(variant: StoreVariant, similarity: Box<dyn SimilarityEstimator>) -> Self {
        Self {
            store: GameStore::new(variant),
            similarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::PseudoEstimator;

    #[tokio::test]
    async fn test_state_serves_games() {
        let state = AppState::new(StoreVariant::Daily, Box::new(PseudoEstimator));
        let game = state.store.start_game().await;
        assert!(state.store.get_game(&game.id).await.is_some());
    }
}
