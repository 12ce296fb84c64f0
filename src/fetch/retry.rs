//! Bounded retry with exponential backoff for the archive fetcher.
//!
//! The loop is deliberately explicit: attempt counter, computed delay, no
//! hidden middleware defaults. Delays run through a [`Sleeper`] so tests can
//! observe the schedule without real wall-clock sleeps.

use crate::fetch::error::FetchError;
use futures_util::future::BoxFuture;
use log::warn;
use std::future::Future;
use std::time::Duration;

/// Parameters of the backoff schedule. The cumulative wall-clock budget is
/// bounded by `max_attempts` and `max_delay`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Treated as at least 1.
    pub max_attempts: u32,
    /// Delay after the first failed attempt.
    pub base_delay: Duration,
    /// Growth factor applied per subsequent attempt.
    pub multiplier: f64,
    /// Cap on any single computed delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(500),
            multiplier: 2.0,
            max_delay: Duration::from_secs(8),
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after the given (1-based) failed attempt.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = self.multiplier.powi(attempt.saturating_sub(1) as i32);
        let millis = (self.base_delay.as_millis() as f64 * factor)
            .min(self.max_delay.as_millis() as f64);
        Duration::from_millis(millis as u64)
    }
}

/// Executes delays between attempts. Production code uses [`TokioSleeper`];
/// tests substitute a recording implementation.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, delay: Duration) -> BoxFuture<'static, ()>;
}

/// Delays via `tokio::time::sleep`.
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, delay: Duration) -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(delay))
    }
}

/// Runs `operation` until it succeeds, fails terminally, or the attempt
/// budget is exhausted. The closure receives the 1-based attempt number.
/// Only errors reporting [`FetchError::is_transient`] are retried.
pub async fn run_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    sleeper: &dyn Sleeper,
    mut operation: F,
) -> Result<T, FetchError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let budget = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_transient() && attempt < budget => {
                let delay = policy.delay_for(attempt);
                warn!(
                    "attempt {attempt}/{budget} failed ({error}); retrying in {delay:?}"
                );
                sleeper.sleep(delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
