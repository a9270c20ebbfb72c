//! Deterministic local similarity stand-in.

use super::*;

/// Hash a string to [0, 1) with a DJB2-style rolling hash.
///
/// Accumulates over UTF-16 code units with 32-bit wrapping arithmetic, then
/// reinterprets the accumulator as unsigned and normalizes by 2^32. Stable
/// across calls and across processes.
fn hash_to_unit_interval(input: &str) -> f64 {
    let mut h: i32 = 5381;
    for unit in input.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_add(h) ^ i32::from(unit);
    }
    f64::from(h as u32) / 4_294_967_296.0
}

/// Deterministic similarity in [0, 100] for a (guess, phrase) pair.
///
/// Purely a function of its inputs, joined with a fixed separator so that
/// ("ab", "c") and ("a", "bc") hash differently.
pub fn pseudo_similarity_percent(guess: &str, phrase: &str) -> u8 {
    let u = hash_to_unit_interval(&format!("{guess}::{phrase}"));
    (u * 100.0).round() as u8
}

/// Local estimator wrapping [`pseudo_similarity_percent`]. Never fails.
pub struct PseudoEstimator;

#[async_trait]
impl SimilarityEstimator for PseudoEstimator {
    async fn score(&self, guess: &str, phrase: &str) -> SimilarityResult<u8> {
        Ok(pseudo_similarity_percent(guess, phrase))
    }

    fn name(&self) -> &str {
        "pseudo"
    }
}
