use crate::market_data::MarketTrend;
use crate::portfolio::allocation::Allocation;

use super::{RiskInput, RiskScore, RiskWeightSet};

/// Weighted sum of category shares, adjusted by the set's modifiers and
/// capped at `max_score`. There is no lower clamp.
pub fn score(weight_set: &RiskWeightSet, input: &RiskInput) -> f64 {
    if weight_set.zero_when_empty && input.holding_count == 0 {
        return 0.0;
    }

    let weights = &weight_set.weights;
    let allocation = &input.allocation;

    let defi_weight = if weight_set.defi_scaled_by_level {
        weights.defi_altcoins * (1.0 - input.limit_reduction / 100.0)
    } else {
        weights.defi_altcoins
    };

    let mut risk = allocation.defi_altcoins * defi_weight
        + allocation.btc * weights.btc
        + allocation.eth_bluechips * weights.eth_bluechips
        + allocation.stablecoins * weights.stablecoins;

    if let Some(multipliers) = &weight_set.trend_multipliers {
        risk *= multipliers.for_trend(input.trend);
    }

    if let Some(discount) = &weight_set.diversification {
        let factor = if discount.full_at_holdings == 0 {
            1.0
        } else {
            (input.holding_count as f64 / discount.full_at_holdings as f64).min(1.0)
        };
        risk *= 1.0 - factor * discount.max_discount;
    }

    risk.min(weight_set.max_score)
}

/// Scores `input` under every weight set, in order.
pub fn score_all(weight_sets: &[RiskWeightSet], input: &RiskInput) -> Vec<RiskScore> {
    weight_sets
        .iter()
        .map(|set| RiskScore {
            weight_set: set.id.clone(),
            score: score(set, input),
        })
        .collect()
}

/// Score under the `analytics/v1` weight set.
pub fn score_risk(allocation: &Allocation, trend: MarketTrend, limit_reduction: f64) -> f64 {
    score(
        &RiskWeightSet::analytics_v1(),
        &RiskInput {
            allocation: *allocation,
            trend,
            limit_reduction,
            holding_count: 0,
        },
    )
}
