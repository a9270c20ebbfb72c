//! Remote similarity backend client.
//!
//! Talks to a future scoring service: `POST {base_url}/similarity` with the
//! guess and phrase, expecting a similarity in [0, 1]. Callers degrade to
//! the local estimator when this one fails.

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct RemoteEstimator {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl RemoteEstimator {
    /// Create a client for the scoring service at `base_url`.
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap();

        Self {
            base_url,
            timeout,
            client,
        }
    }
}

#[derive(Debug, Serialize)]
struct SimilarityRequest<'a> {
    guess: &'a str,
    phrase: &'a str,
}

#[derive(Debug, Deserialize)]
struct SimilarityResponse {
    /// Similarity score in the range [0, 1]
    similarity: f64,
}

#[async_trait]
impl SimilarityEstimator for RemoteEstimator {
    async fn score(&self, guess: &str, phrase: &str) -> SimilarityResult<u8> {
        let url = format!("{}/similarity", self.base_url);
        let request = SimilarityRequest { guess, phrase };

        let response = tokio::time::timeout(
            self.timeout,
            self.client.post(&url).json(&request).send(),
        )
        .await
        .map_err(|_| SimilarityError::Timeout(self.timeout))?
        .map_err(|e| SimilarityError::ApiError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SimilarityError::ApiError(format!(
                "backend returned status: {}",
                response.status()
            )));
        }

        let body: SimilarityResponse = response
            .json()
            .await
            .map_err(|e| SimilarityError::ParseError(e.to_string()))?;

        if !(0.0..=1.0).contains(&body.similarity) {
            return Err(SimilarityError::OutOfRange(body.similarity));
        }

        Ok((body.similarity * 100.0).round() as u8)
    }

    fn name(&self) -> &str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Only run with a scoring backend running locally
    async fn test_remote_score() {
        let estimator =
            RemoteEstimator::new("http://localhost:9000".to_string(), Duration::from_secs(5));

        let score = estimator
            .score("xyz", "Ship small batches and iterate quickly")
            .await
            .unwrap();

        assert!(score <= 100);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_an_api_error() {
        // Port 9 (discard) should refuse the connection quickly.
        let estimator =
            RemoteEstimator::new("http://127.0.0.1:9".to_string(), Duration::from_secs(2));

        let result = estimator.score("xyz", "anything").await;
        assert!(matches!(
            result,
            Err(SimilarityError::ApiError(_)) | Err(SimilarityError::Timeout(_))
        ));
    }
}
