//! Mock API client: a constant payload behind an artificial delay.
//!
//! Stands in for a real collaborator boundary. Every fetch suspends for the
//! configured latency and then resolves the same payload; calls are
//! independent of one another, and nothing is shared between them.

use crate::error::ApiError;
use crate::fixtures;
use crate::model::UserProfile;
use crate::timer::{Delay, DelayHandle};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shortest latency the client will simulate.
pub const MIN_DELAY: Duration = Duration::from_millis(500);

/// Longest latency the client will simulate.
pub const MAX_DELAY: Duration = Duration::from_millis(1000);

/// Envelope returned by every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the fetch succeeded. The mock always reports `true`.
    pub success: bool,
    /// The payload.
    pub data: UserProfile,
}

/// An in-flight fetch: the delay plus the payload it will resolve to.
#[derive(Debug)]
pub struct PendingFetch {
    delay: Delay,
    response: ApiResponse,
}

impl PendingFetch {
    /// Wait out the simulated latency and produce the response.
    ///
    /// # Errors
    ///
    /// [`ApiError::Cancelled`] if the paired handle fired first. No partial
    /// data accompanies a failure.
    pub async fn resolve(self) -> Result<ApiResponse, ApiError> {
        self.delay.wait().await?;
        tracing::debug!(user = %self.response.data.name, "mock fetch resolved");
        Ok(self.response)
    }
}

/// Fake API client with a fixed payload and simulated latency.
#[derive(Debug, Clone)]
pub struct MockApi {
    latency: Duration,
    payload: UserProfile,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new(fixtures::sample_user())
    }
}

impl MockApi {
    /// Create a client resolving `payload` after [`MIN_DELAY`].
    #[must_use]
    pub fn new(payload: UserProfile) -> Self {
        Self {
            latency: MIN_DELAY,
            payload,
        }
    }

    /// Set the simulated latency, clamped to `[MIN_DELAY, MAX_DELAY]`.
    #[must_use]
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency.clamp(MIN_DELAY, MAX_DELAY);
        self
    }

    /// The latency every fetch will wait.
    #[must_use]
    pub const fn configured_latency(&self) -> Duration {
        self.latency
    }

    /// Start a fetch, keeping a cancellation handle for the in-flight
    /// request.
    #[must_use]
    pub fn start_fetch(&self) -> (PendingFetch, DelayHandle) {
        let (delay, handle) = Delay::new(self.latency);
        tracing::debug!(latency_ms = self.latency.as_millis() as u64, "mock fetch started");
        (
            PendingFetch {
                delay,
                response: ApiResponse {
                    success: true,
                    data: self.payload.clone(),
                },
            },
            handle,
        )
    }

    /// Fetch the mock user, waiting the full latency.
    ///
    /// # Errors
    ///
    /// Mirrors the contract of a real client; the mock itself never fails.
    pub async fn fetch_user(&self) -> Result<ApiResponse, ApiError> {
        let (pending, _handle) = self.start_fetch();
        pending.resolve().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn client() -> MockApi {
        MockApi::default().latency(Duration::from_millis(500))
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_always_succeeds_with_fixed_payload() {
        let api = client();
        let response = api.fetch_user().await.unwrap();
        assert!(response.success);
        assert_eq!(response.data, fixtures::sample_user());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_at_least_the_configured_latency() {
        let api = client();
        let start = Instant::now();
        api.fetch_user().await.unwrap();
        assert!(start.elapsed() >= api.configured_latency());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refetch_is_referentially_identical() {
        let api = client();
        let first = api.fetch_user().await.unwrap();
        let second = api.fetch_user().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_fetches_resolve_independently() {
        let api = client();
        let start = Instant::now();
        let (a, b) = tokio::join!(api.fetch_user(), api.fetch_user());
        assert_eq!(a.unwrap(), b.unwrap());
        // Each waits its own full delay; overlapping timers do not extend
        // one another.
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert!(start.elapsed() < Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_fetch_yields_no_partial_data() {
        let api = client();
        let (pending, handle) = api.start_fetch();
        handle.cancel();
        assert_eq!(pending.resolve().await, Err(ApiError::Cancelled));
    }

    #[test]
    fn test_latency_is_clamped_to_contract_range() {
        let api = MockApi::default().latency(Duration::from_millis(50));
        assert_eq!(api.configured_latency(), MIN_DELAY);
        let api = MockApi::default().latency(Duration::from_secs(30));
        assert_eq!(api.configured_latency(), MAX_DELAY);
    }
}
