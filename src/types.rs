use serde::{Deserialize, Serialize};

use crate::words::{normalize_word, tokenize};

/// Game identifier. Session games use ulid strings, daily games use the
/// decimal rendering of the day index; both travel as one path parameter.
pub type GameId = String;

/// A single game session bound to one phrase.
///
/// Immutable once created: `tokens` and `normalized_tokens` are parallel
/// arrays computed from the phrase at construction and never touched again.
/// Which positions have been revealed is the client's business, not ours.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub phrase: String,
    pub tokens: Vec<String>,
    pub normalized_tokens: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Game {
    /// Build a game from a phrase, tokenizing and normalizing up front.
    pub fn from_phrase(id: GameId, phrase: &str) -> Self {
        let tokens = tokenize(phrase);
        let normalized_tokens = tokens.iter().map(|t| normalize_word(t)).collect();
        Self {
            id,
            phrase: phrase.to_string(),
            tokens,
            normalized_tokens,
            created_at: None,
        }
    }

    /// Masked view of the phrase: one entry per token, exposing only its
    /// length so a client can render placeholders without seeing content.
    pub fn word_meta(&self) -> Vec<WordMeta> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(position, token)| WordMeta {
                position,
                size: token.chars().count(),
            })
            .collect()
    }
}

/// Per-token metadata safe to hand to an unrevealed client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordMeta {
    pub position: usize,
    pub size: usize,
}

/// One disclosed (position, original token) pair after a correct guess.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reveal {
    pub position: usize,
    pub word: String,
}

/// Result of evaluating a guess against a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessOutcome {
    pub normalized_guess: String,
    pub reveals: Vec<Reveal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_from_phrase_parallel_arrays() {
        let game = Game::from_phrase("g1".to_string(), "I want to play Minecraft!");
        assert_eq!(game.tokens.len(), game.normalized_tokens.len());
        assert_eq!(game.tokens, vec!["I", "want", "to", "play", "Minecraft!"]);
        assert_eq!(
            game.normalized_tokens,
            vec!["i", "want", "to", "play", "minecraft"]
        );
    }

    #[test]
    fn test_word_meta_exposes_lengths_only() {
        let game = Game::from_phrase("g1".to_string(), "I want to play Minecraft!");
        let meta = game.word_meta();
        assert_eq!(meta.len(), 5);
        assert_eq!(meta[0], WordMeta { position: 0, size: 1 });
        assert_eq!(meta[4], WordMeta { position: 4, size: 10 });
    }
}
