//! HTTP API endpoints for the game.
//!
//! Three routes: start a game, fetch its phrase, and submit a guess. The
//! router is built here so integration tests can drive it without a socket.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::guess::check_word;
use crate::similarity::pseudo_similarity_percent;
use crate::state::AppState;
use crate::types::{GameId, Reveal, WordMeta};

/// Build the API router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/game/start", post(start_game))
        .route("/api/game/{game_id}/phrase", get(get_phrase))
        .route("/api/game/{game_id}/try", post(submit_guess))
        .with_state(state)
}

/// Response for a started game: id plus masked word metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameResponse {
    pub game_id: GameId,
    pub words: Vec<WordMeta>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhraseResponse {
    pub phrase: String,
}

/// Guess payload. `word` is kept loose on purpose: a missing, empty, or
/// non-string value is the same "missing word" input error, not a parse
/// failure of the whole body.
#[derive(Debug, Clone, Deserialize)]
pub struct TryRequest {
    pub word: Option<serde_json::Value>,
}

/// Response for a guess. `reveals` is present iff the guess matched,
/// `similarity` iff it did not.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TryResponse {
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reveals: Option<Vec<Reveal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<u8>,
}

/// Start a game (or derive today's, depending on the store variant).
///
/// POST /api/game/start
///
/// Always succeeds. Returns only word positions and lengths so the client
/// can render masked placeholders without seeing any content.
pub async fn start_game(State(state): State<Arc<AppState>>) -> Json<StartGameResponse> {
    let game = state.store.start_game().await;
    tracing::debug!("Started game {}", game.id);

    Json(StartGameResponse {
        words: game.word_meta(),
        game_id: game.id,
    })
}

/// Fetch the full phrase of a game (give-up / debugging endpoint).
///
/// GET /api/game/{game_id}/phrase
pub async fn get_phrase(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
) -> Result<Json<PhraseResponse>, ApiError> {
    let game = state
        .store
        .get_game(&game_id)
        .await
        .ok_or(ApiError::NotFound)?;

    Ok(Json(PhraseResponse {
        phrase: game.phrase,
    }))
}

/// Submit a guess for a game.
///
/// POST /api/game/{game_id}/try
///
/// A matching guess reveals every position holding that word; a miss gets a
/// similarity hint instead. If the remote similarity backend fails, the
/// local estimator answers so this route never errors over the hint.
pub async fn submit_guess(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
    body: Result<Json<TryRequest>, JsonRejection>,
) -> Result<Json<TryResponse>, ApiError> {
    let game = state
        .store
        .get_game(&game_id)
        .await
        .ok_or(ApiError::NotFound)?;

    let Json(request) = body.map_err(|_| ApiError::MalformedRequest)?;
    let word = request
        .word
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    if word.is_empty() {
        return Err(ApiError::InvalidInput);
    }

    let outcome = check_word(&game, word);
    if !outcome.reveals.is_empty() {
        return Ok(Json(TryResponse {
            is_correct: true,
            reveals: Some(outcome.reveals),
            similarity: None,
        }));
    }

    let similarity = match state.similarity.score(word, &game.phrase).await {
        Ok(score) => score,
        Err(e) => {
            tracing::warn!(
                "Similarity estimator '{}' failed ({}), scoring locally",
                state.similarity.name(),
                e
            );
            pseudo_similarity_percent(word, &game.phrase)
        }
    };

    Ok(Json(TryResponse {
        is_correct: false,
        reveals: None,
        similarity: Some(similarity),
    }))
}
