//! Token bucket rate limiter with a minimum spacing between requests.
//!
//! Each provider owns one limiter built from its [`RateLimit`]. Callers
//! `acquire().await` before every outgoing request.

use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::provider::RateLimit;

#[derive(Debug)]
struct BucketState {
    /// Current number of available tokens.
    tokens: f64,
    /// Last time the bucket was refilled.
    last_refill: Instant,
    /// When the previous request was let through.
    last_request: Option<Instant>,
}

/// Rate limiter for a single provider.
#[derive(Debug)]
pub struct RateLimiter {
    state: Mutex<BucketState>,
    /// Token refill rate (tokens per second). `None` disables the bucket.
    rate: Option<f64>,
    capacity: f64,
    min_delay: Duration,
}

impl RateLimiter {
    pub fn new(limit: &RateLimit) -> Self {
        let capacity = f64::from(limit.burst.max(1));
        Self {
            state: Mutex::new(BucketState {
                tokens: capacity,
                last_refill: Instant::now(),
                last_request: None,
            }),
            rate: limit
                .requests_per_minute
                .map(|rpm| f64::from(rpm.max(1)) / 60.0),
            capacity,
            min_delay: limit.min_delay,
        }
    }

    /// Lock the state, recovering from poison. A poisoned limiter at worst
    /// lets one request through early.
    fn lock_state(&self) -> MutexGuard<'_, BucketState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Rate limiter mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn refill(&self, state: &mut BucketState, now: Instant) {
        if let Some(rate) = self.rate {
            let elapsed = now.duration_since(state.last_refill).as_secs_f64();
            state.tokens = (state.tokens + elapsed * rate).min(self.capacity);
        }
        state.last_refill = now;
    }

    /// Returns how long the caller must wait, or `None` once a slot was taken.
    fn try_take(&self) -> Option<Duration> {
        let mut state = self.lock_state();
        let now = Instant::now();
        self.refill(&mut state, now);

        let spacing_wait = state
            .last_request
            .map(|at| self.min_delay.saturating_sub(now.duration_since(at)))
            .unwrap_or(Duration::ZERO);

        let token_wait = match self.rate {
            Some(rate) if state.tokens < 1.0 => {
                Duration::from_secs_f64((1.0 - state.tokens) / rate)
            }
            _ => Duration::ZERO,
        };

        if spacing_wait.is_zero() && token_wait.is_zero() {
            if self.rate.is_some() {
                state.tokens -= 1.0;
            }
            state.last_request = Some(now);
            None
        } else {
            Some(spacing_wait.max(token_wait))
        }
    }

    /// Wait until a request may be sent.
    pub async fn acquire(&self) {
        while let Some(wait) = self.try_take() {
            debug!("Rate limiter: waiting {:?}", wait);
            tokio::time::sleep(wait).await;
        }
    }
}
