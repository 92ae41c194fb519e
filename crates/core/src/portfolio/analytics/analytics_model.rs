use serde::{Deserialize, Serialize};

use crate::tokens::Category;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPerformance {
    pub category: Category,
    pub allocation: f64,
    /// Mean 24h price change of the category's tokens; 0 without tokens
    pub avg_price_change: f64,
    pub token_count: usize,
    pub total_value: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformerEntry {
    pub token_id: String,
    pub symbol: String,
    pub roi: f64,
}

/// Holdings without an ROI count as 0 throughout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoiSummary {
    pub average_roi: f64,
    pub profitable_count: usize,
    pub loss_count: usize,
    pub top_performers: Vec<PerformerEntry>,
    pub worst_performers: Vec<PerformerEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalytics {
    pub category_performance: Vec<CategoryPerformance>,
    pub roi: RoiSummary,
    /// Mean absolute 24h price change, in percent
    pub volatility: f64,
    /// 25 points per category with a non-zero share, capped at 100
    pub diversification_score: f64,
}
