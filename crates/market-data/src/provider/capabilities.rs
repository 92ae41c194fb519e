//! Rate limiting configuration for providers.

use std::time::Duration;

/// Rate limiting configuration for a provider.
///
/// Controls how aggressively we can call a provider to avoid
/// hitting their rate limits and getting blocked.
#[derive(Clone, Debug, PartialEq)]
pub struct RateLimit {
    /// Maximum requests allowed per minute. `None` leaves only the spacing.
    pub requests_per_minute: Option<u32>,

    /// Maximum burst before requests are spread out. Ignored without a cap.
    pub burst: u32,

    /// Minimum delay between two consecutive requests.
    pub min_delay: Duration,
}

impl Default for RateLimit {
    /// Requests are spaced 50 ms apart with no per-minute cap.
    fn default() -> Self {
        Self {
            requests_per_minute: None,
            burst: 1,
            min_delay: Duration::from_millis(50),
        }
    }
}
