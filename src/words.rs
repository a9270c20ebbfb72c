//! Phrase tokenization and word normalization.
//!
//! Guesses and phrase tokens are compared in normalized form: lowercased,
//! with any run of non-alphanumeric characters stripped from both ends.
//! Interior punctuation (apostrophes, hyphens) is preserved, so "don't"
//! stays "don't" while "Minecraft!" becomes "minecraft".

/// Normalize a word for matching.
///
/// Empty or all-punctuation input normalizes to the empty string.
/// Idempotent: normalizing an already-normalized word is a no-op.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .trim_matches(|c: char| !c.is_ascii_alphanumeric())
        .to_string()
}

/// Split a phrase into word tokens on single spaces.
///
/// No multi-space collapsing; the registry phrases are single-spaced.
pub fn tokenize(phrase: &str) -> Vec<String> {
    phrase.split(' ').map(str::to_string).collect()
}
