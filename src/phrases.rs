//! Fixed phrase registry the stores draw from.

/// Sample phrases available to every store variant. Indexing is stable:
/// daily game ids map into this list, so reordering changes live games.
pub const SAMPLE_PHRASES: &[&str] = &[
    "I want to play Minecraft!",
    "The quick brown fox jumps over the lazy dog",
    "Ship small batches and iterate quickly",
];
