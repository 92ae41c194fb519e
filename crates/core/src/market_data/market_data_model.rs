use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MARKET_TREND_THRESHOLD_PCT;

use super::market_data_constants::{FALLBACK_BTC_DOMINANCE, FALLBACK_TOTAL_MARKET_CAP};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketTrend {
    Bull,
    Bear,
    #[default]
    Sideways,
}

impl MarketTrend {
    /// BULL above +2%, BEAR below -2%, SIDEWAYS otherwise (including NaN).
    pub fn from_market_cap_change(change_24h_pct: f64) -> Self {
        if change_24h_pct > MARKET_TREND_THRESHOLD_PCT {
            MarketTrend::Bull
        } else if change_24h_pct < -MARKET_TREND_THRESHOLD_PCT {
            MarketTrend::Bear
        } else {
            MarketTrend::Sideways
        }
    }
}

/// Global market state. A fresh snapshot replaces the previous one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    /// Bitcoin's share of total market cap, 0..=100
    pub btc_dominance: f64,
    pub total_market_cap: f64,
    #[serde(rename = "marketTrend")]
    pub trend: MarketTrend,
    pub fetched_at: DateTime<Utc>,
    /// True when the values are the built-in defaults, not provider data
    #[serde(default)]
    pub is_fallback: bool,
}

impl MarketSnapshot {
    pub fn fallback() -> Self {
        MarketSnapshot {
            btc_dominance: FALLBACK_BTC_DOMINANCE,
            total_market_cap: FALLBACK_TOTAL_MARKET_CAP,
            trend: MarketTrend::Sideways,
            fetched_at: Utc::now(),
            is_fallback: true,
        }
    }
}
