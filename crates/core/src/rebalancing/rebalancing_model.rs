use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_REBALANCE_THRESHOLD_PCT, HIGH_PRIORITY_GAP_PCT, MEDIUM_PRIORITY_GAP_PCT,
};
use crate::tokens::Category;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeAction {
    Buy,
    Sell,
}

/// Ordered LOW < MEDIUM < HIGH.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Gap thresholds in percentage points. All comparisons are strict.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RebalanceThresholds {
    /// Gaps at or below this produce no recommendation
    pub min_gap_pct: f64,
    pub high_priority_gap_pct: f64,
    pub medium_priority_gap_pct: f64,
}

impl RebalanceThresholds {
    pub fn with_min_gap(self, min_gap_pct: f64) -> Self {
        RebalanceThresholds {
            min_gap_pct,
            ..self
        }
    }

    pub fn priority_for(&self, gap: f64) -> Priority {
        if gap > self.high_priority_gap_pct {
            Priority::High
        } else if gap > self.medium_priority_gap_pct {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

impl Default for RebalanceThresholds {
    fn default() -> Self {
        RebalanceThresholds {
            min_gap_pct: DEFAULT_REBALANCE_THRESHOLD_PCT,
            high_priority_gap_pct: HIGH_PRIORITY_GAP_PCT,
            medium_priority_gap_pct: MEDIUM_PRIORITY_GAP_PCT,
        }
    }
}

/// Suggested trade moving one category toward its target.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: Category,
    pub action: TradeAction,
    pub current_percentage: f64,
    pub target_percentage: f64,
    /// Trade size in USD
    pub amount: f64,
    pub priority: Priority,
}
