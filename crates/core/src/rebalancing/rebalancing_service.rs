use log::debug;

use crate::portfolio::allocation::Allocation;

use super::{RebalanceThresholds, Recommendation, TradeAction};

/// Buy/sell suggestions for every category whose gap to target exceeds the
/// minimum threshold.
///
/// Sorted by priority, highest first; ties keep category order.
pub fn recommend(
    current: &Allocation,
    target: &Allocation,
    total_value: f64,
    thresholds: &RebalanceThresholds,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = current
        .iter()
        .filter_map(|(category, current_pct)| {
            let target_pct = target.get(category);
            let difference = target_pct - current_pct;
            let gap = difference.abs();

            if gap <= thresholds.min_gap_pct {
                return None;
            }

            Some(Recommendation {
                category,
                action: if difference > 0.0 {
                    TradeAction::Buy
                } else {
                    TradeAction::Sell
                },
                current_percentage: current_pct,
                target_percentage: target_pct,
                amount: gap / 100.0 * total_value,
                priority: thresholds.priority_for(gap),
            })
        })
        .collect();

    // sort_by is stable
    recommendations.sort_by(|a, b| b.priority.cmp(&a.priority));

    debug!(
        "{} rebalancing recommendation(s) for portfolio value {:.2}",
        recommendations.len(),
        total_value
    );
    recommendations
}
