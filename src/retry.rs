use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

use crate::errors::{ScenarioError, ScenarioResult};

/// Bounded re-execution with (optionally) growing pauses between attempts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total number of attempts, the first one included.
    pub max_attempts: u32,
    /// Pause before the second attempt.
    pub interval: Duration,
    /// Multiplier applied to the pause after every failed attempt.
    pub backoff: f64,
    /// Upper bound for a single pause.
    pub max_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            interval: Duration::from_secs(1),
            backoff: 2.0,
            max_interval: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    pub fn fixed(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
            backoff: 1.0,
            max_interval: interval,
        }
    }

    pub fn none() -> Self {
        Self::fixed(1, Duration::ZERO)
    }

    pub fn with_backoff(mut self, backoff: f64, max_interval: Duration) -> Self {
        self.backoff = backoff;
        self.max_interval = max_interval;
        self
    }

    /// Pause to wait after the attempt numbered `attempt` (1-based) failed.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = self.backoff.max(1.0).powi(attempt.saturating_sub(1) as i32);
        let delay = self.interval.as_secs_f64() * factor;
        let max = self.max_interval.max(self.interval);
        if !delay.is_finite() || delay >= max.as_secs_f64() {
            max
        } else {
            Duration::from_secs_f64(delay)
        }
    }
}

/// Run `op` until it succeeds, fails with a non-retryable error, or the
/// policy's attempts are used up.
///
/// Only failures (see [`ScenarioError::is_failure`]) are retried; transport
/// errors surface immediately.
pub async fn retry<F, Fut, T>(policy: &RetryPolicy, label: &str, mut op: F) -> ScenarioResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ScenarioResult<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => {
                if attempt > 1 {
                    info!("{} passed on attempt {}/{}", label, attempt, max_attempts);
                }
                return Ok(value);
            }
            Err(e) if !e.is_failure() => return Err(e),
            Err(e) if attempt >= max_attempts => {
                if max_attempts == 1 {
                    return Err(e);
                }
                return Err(ScenarioError::RetriesExhausted {
                    attempts: attempt,
                    last: Box::new(e),
                });
            }
            Err(e) => {
                let delay = policy.delay_after(attempt);
                warn!(
                    "{} failed on attempt {}/{}: {} (retrying in {:?})",
                    label, attempt, max_attempts, e, delay
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
