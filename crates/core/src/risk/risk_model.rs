use serde::{Deserialize, Serialize};

use crate::constants::MAX_RISK_SCORE;
use crate::market_data::MarketTrend;
use crate::portfolio::allocation::Allocation;

pub const ANALYTICS_V1: &str = "analytics/v1";
pub const OVERVIEW_V1: &str = "overview/v1";

/// Score contribution per percentage point of each category.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskWeights {
    pub btc: f64,
    pub eth_bluechips: f64,
    pub stablecoins: f64,
    pub defi_altcoins: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendMultipliers {
    pub bull: f64,
    pub bear: f64,
    pub sideways: f64,
}

impl TrendMultipliers {
    pub fn for_trend(&self, trend: MarketTrend) -> f64 {
        match trend {
            MarketTrend::Bull => self.bull,
            MarketTrend::Bear => self.bear,
            MarketTrend::Sideways => self.sideways,
        }
    }
}

/// Discount for holding many tokens: the score is multiplied by
/// `1 - min(n / full_at_holdings, 1) × max_discount`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiversificationDiscount {
    pub full_at_holdings: usize,
    pub max_discount: f64,
}

/// A named, versioned scoring configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskWeightSet {
    /// `<name>/<version>`, e.g. `analytics/v1`
    pub id: String,
    pub weights: RiskWeights,
    /// Scale the DeFi/altcoin weight by `1 - limit_reduction / 100`
    #[serde(default)]
    pub defi_scaled_by_level: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_multipliers: Option<TrendMultipliers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diversification: Option<DiversificationDiscount>,
    /// Score an empty portfolio as 0 regardless of allocation
    #[serde(default)]
    pub zero_when_empty: bool,
    #[serde(default = "default_max_score")]
    pub max_score: f64,
}

fn default_max_score() -> f64 {
    MAX_RISK_SCORE
}

impl RiskWeightSet {
    /// Trend- and level-aware score shown with portfolio analytics.
    pub fn analytics_v1() -> Self {
        RiskWeightSet {
            id: ANALYTICS_V1.to_string(),
            weights: RiskWeights {
                btc: 0.6,
                eth_bluechips: 0.5,
                stablecoins: 0.1,
                defi_altcoins: 0.8,
            },
            defi_scaled_by_level: true,
            trend_multipliers: Some(TrendMultipliers {
                bull: 0.9,
                bear: 1.2,
                sideways: 1.0,
            }),
            diversification: None,
            zero_when_empty: false,
            max_score: MAX_RISK_SCORE,
        }
    }

    /// Diversification-discounted score shown on the portfolio overview.
    pub fn overview_v1() -> Self {
        RiskWeightSet {
            id: OVERVIEW_V1.to_string(),
            weights: RiskWeights {
                btc: 0.3,
                eth_bluechips: 0.5,
                stablecoins: 0.1,
                defi_altcoins: 0.8,
            },
            defi_scaled_by_level: false,
            trend_multipliers: None,
            diversification: Some(DiversificationDiscount {
                full_at_holdings: 10,
                max_discount: 0.2,
            }),
            zero_when_empty: true,
            max_score: MAX_RISK_SCORE,
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![Self::analytics_v1(), Self::overview_v1()]
    }
}

/// Everything a weight set may draw on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskInput {
    pub allocation: Allocation,
    pub trend: MarketTrend,
    /// Current level's limit reduction, in percent
    pub limit_reduction: f64,
    pub holding_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskScore {
    pub weight_set: String,
    pub score: f64,
}
