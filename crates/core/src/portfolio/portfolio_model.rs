use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::limits::{LimitProfile, LimitViolation};
use crate::market_data::MarketSnapshot;
use crate::portfolio::allocation::Allocation;
use crate::portfolio::analytics::PortfolioAnalytics;
use crate::portfolio::levels::{LevelProgress, PortfolioLevel};
use crate::rebalancing::Recommendation;
use crate::risk::RiskScore;

/// Where the target allocation came from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetSource {
    /// User-supplied custom allocation
    Custom,
    /// Step function over BTC dominance
    BtcDominance,
    /// Auto mode off
    Uniform,
}

/// Full evaluation of the portfolio against the current market.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub total_value: f64,
    pub holding_count: usize,
    pub level: PortfolioLevel,
    pub level_progress: LevelProgress,
    pub level_benefits: Vec<String>,
    pub allocation: Allocation,
    /// Allocation scaled by the level's limit reduction
    pub adjusted_allocation: Allocation,
    pub target_allocation: Allocation,
    pub target_source: TargetSource,
    pub adjusted_limits: LimitProfile,
    pub violations: Vec<LimitViolation>,
    pub recommendations: Vec<Recommendation>,
    /// Headline score from the first configured weight set
    pub risk_score: f64,
    pub risk_scores: Vec<RiskScore>,
    pub analytics: PortfolioAnalytics,
    pub market: MarketSnapshot,
    pub generated_at: DateTime<Utc>,
}
