//! Guess evaluation: exact normalized matching against a game's tokens.

use crate::types::{Game, GuessOutcome, Reveal};
use crate::words::normalize_word;

/// Evaluate a raw guess against a game.
///
/// The guess is normalized the same way the phrase tokens were; every
/// position whose normalized token is non-empty and exactly equals the
/// normalized guess is revealed, in ascending position order. A phrase that
/// repeats a word reveals all its positions on one guess. Equality only,
/// no fuzzy matching.
pub fn check_word(game: &Game, raw_word: &str) -> GuessOutcome {
    let normalized_guess = normalize_word(raw_word);

    let reveals = game
        .normalized_tokens
        .iter()
        .enumerate()
        .filter(|(_, normalized)| !normalized.is_empty() && **normalized == normalized_guess)
        .map(|(position, _)| Reveal {
            position,
            word: game.tokens[position].clone(),
        })
        .collect();

    GuessOutcome {
        normalized_guess,
        reveals,
    }
}
