//! Similarity scoring for missed guesses.
//!
//! The score is a hint, not a grade: a deterministic stand-in until a real
//! semantic-similarity backend exists. Scoring is a pluggable strategy so
//! the guess path never has to know which backend produced the number.

mod pseudo;
mod remote;

use async_trait::async_trait;
use std::time::Duration;

pub use pseudo::{pseudo_similarity_percent, PseudoEstimator};
pub use remote::RemoteEstimator;

/// Result type for similarity scoring
pub type SimilarityResult<T> = Result<T, SimilarityError>;

/// Errors that can occur when scoring against a remote backend
#[derive(Debug, thiserror::Error)]
pub enum SimilarityError {
    #[error("backend request failed: {0}")]
    ApiError(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("response parsing failed: {0}")]
    ParseError(String),

    #[error("backend returned similarity {0} outside [0, 1]")]
    OutOfRange(f64),
}

/// Trait that all similarity estimators implement
#[async_trait]
pub trait SimilarityEstimator: Send + Sync {
    /// Score how close a guess is to the hidden phrase, as a percent in
    /// [0, 100].
    async fn score(&self, guess: &str, phrase: &str) -> SimilarityResult<u8>;

    /// Get the name of this estimator
    fn name(&self) -> &str;
}

/// Configuration for the similarity backend
#[derive(Debug, Clone)]
pub struct SimilarityConfig {
    /// Base URL of a remote scoring service; `None` means score locally
    pub backend_url: Option<String>,
    /// Timeout for remote scoring requests
    pub timeout: Duration,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            timeout: Duration::from_secs(5),
        }
    }
}

impl SimilarityConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let backend_url = std::env::var("PHRASECRACK_BACKEND_URL").ok().and_then(|url| {
            let trimmed = url.trim().trim_end_matches('/');
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        });

        Self {
            backend_url,
            timeout: std::env::var("PHRASECRACK_SIMILARITY_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(5)),
        }
    }

    /// Build the configured estimator: remote if a backend URL is set,
    /// otherwise the local deterministic one.
    pub fn build_estimator(&self) -> Box<dyn SimilarityEstimator> {
        match &self.backend_url {
            Some(url) => {
                tracing::info!("Using remote similarity backend at {}", url);
                Box::new(RemoteEstimator::new(url.clone(), self.timeout))
            }
            None => {
                tracing::info!("No similarity backend configured, scoring locally");
                Box::new(PseudoEstimator)
            }
        }
    }
}
