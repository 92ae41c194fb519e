use std::time::Duration;

/// Minimum |target - current| gap, in percentage points, that produces a
/// rebalancing recommendation. Gaps at or below it are ignored.
pub const DEFAULT_REBALANCE_THRESHOLD_PCT: f64 = 2.0;

/// Gap above which a recommendation is HIGH priority
pub const HIGH_PRIORITY_GAP_PCT: f64 = 10.0;

/// Gap above which a recommendation is MEDIUM priority
pub const MEDIUM_PRIORITY_GAP_PCT: f64 = 5.0;

/// Uniform per-category target when auto mode is off
pub const UNIFORM_TARGET_PCT: f64 = 25.0;

/// Upper bound of any risk score
pub const MAX_RISK_SCORE: f64 = 100.0;

/// How often the market snapshot and holding prices are refreshed
pub const DEFAULT_MARKET_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Market-cap change (24h, %) above which the market is BULL; below its
/// negation it is BEAR
pub const MARKET_TREND_THRESHOLD_PCT: f64 = 2.0;

/// Number of holdings reported in top/worst performer lists
pub const PERFORMER_LIST_LEN: usize = 3;
