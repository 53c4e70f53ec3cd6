// Fixed-interval throttle for remote API calls.
//
// Both APIs rate-limit their free tiers. Rather than reacting to 429s,
// every request waits until at least `interval` has passed since the
// previous one. Not adaptive: the interval never changes during a run.

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};
use tracing::trace;

/// Enforces a minimum interval between consecutive requests.
#[derive(Clone)]
pub struct Throttle {
    inner: Arc<Mutex<ThrottleInner>>,
}

struct ThrottleInner {
    /// Minimum time between requests
    interval: Duration,
    /// When the last request was allowed through
    last_request: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ThrottleInner {
                interval,
                last_request: None,
            })),
        }
    }

    /// A throttle that never waits. Used in tests.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Wait until the next request is allowed, then return.
    ///
    /// The first call returns immediately. The lock is held across the
    /// sleep, so concurrent callers queue up behind each other.
    pub async fn acquire(&self) {
        let mut inner = self.inner.lock().await;

        if let Some(last) = inner.last_request {
            let elapsed = last.elapsed();
            if elapsed < inner.interval {
                let wait = inner.interval - elapsed;
                trace!(wait_ms = wait.as_millis() as u64, "Throttling request");
                tokio::time::sleep(wait).await;
            }
        }

        inner.last_request = Some(Instant::now());
    }
}
