//! Cancellable one-shot delay used to simulate network latency.
//!
//! A [`Delay`] resolves after a fixed duration; the paired [`DelayHandle`]
//! can cancel it early. Once started, a delay with no surviving cancel
//! signal always runs to completion.

use std::fmt;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time;

/// The delay was cancelled through its handle before expiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("delay cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Handle that can cancel a pending [`Delay`].
///
/// Dropping the handle without calling [`cancel`](Self::cancel) lets the
/// delay run to completion.
#[derive(Debug)]
pub struct DelayHandle {
    cancel: Option<oneshot::Sender<()>>,
}

impl DelayHandle {
    /// Cancel the delay. The pending [`Delay::wait`] resolves with
    /// [`Cancelled`] immediately.
    pub fn cancel(mut self) {
        if let Some(tx) = self.cancel.take() {
            // The delay may already have completed; nothing to do then.
            let _ = tx.send(());
        }
    }
}

/// A one-shot timer that resolves after a fixed duration unless cancelled.
#[derive(Debug)]
pub struct Delay {
    duration: Duration,
    cancelled: oneshot::Receiver<()>,
}

impl Delay {
    /// Create a delay and its cancellation handle.
    #[must_use]
    pub fn new(duration: Duration) -> (Self, DelayHandle) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                duration,
                cancelled: rx,
            },
            DelayHandle { cancel: Some(tx) },
        )
    }

    /// Configured duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Wait out the full duration.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if the handle fired first.
    pub async fn wait(self) -> Result<(), Cancelled> {
        let sleep = time::sleep(self.duration);
        tokio::pin!(sleep);
        let mut cancelled = self.cancelled;
        let mut handle_live = true;
        loop {
            tokio::select! {
                () = &mut sleep => return Ok(()),
                result = &mut cancelled, if handle_live => match result {
                    Ok(()) => return Err(Cancelled),
                    // Handle dropped without firing; keep sleeping.
                    Err(_) => handle_live = false,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_wait_resolves_after_full_duration() {
        let (delay, _handle) = Delay::new(Duration::from_millis(500));
        let start = Instant::now();
        delay.wait().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_resolves_early() {
        let (delay, handle) = Delay::new(Duration::from_secs(3600));
        handle.cancel();
        let start = Instant::now();
        assert_eq!(delay.wait().await, Err(Cancelled));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_does_not_cancel() {
        let (delay, handle) = Delay::new(Duration::from_millis(750));
        drop(handle);
        let start = Instant::now();
        delay.wait().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(750));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_mid_flight() {
        let (delay, handle) = Delay::new(Duration::from_millis(500));
        let waiter = tokio::spawn(delay.wait());
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();
        let result = waiter.await.unwrap();
        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_duration_accessor() {
        let (delay, _handle) = Delay::new(Duration::from_millis(42));
        assert_eq!(delay.duration(), Duration::from_millis(42));
    }
}
