use std::cmp::Ordering;

use crate::constants::PERFORMER_LIST_LEN;
use crate::portfolio::allocation::Allocation;
use crate::portfolio::holdings::Holding;

use super::{CategoryPerformance, PerformerEntry, PortfolioAnalytics, RoiSummary};

pub fn category_performance(
    holdings: &[Holding],
    allocation: &Allocation,
) -> Vec<CategoryPerformance> {
    allocation
        .iter()
        .map(|(category, pct)| {
            let in_category: Vec<&Holding> = holdings
                .iter()
                .filter(|h| h.token.category == category)
                .collect();
            let count = in_category.len();
            let avg_price_change = if count > 0 {
                in_category
                    .iter()
                    .map(|h| h.token.price_change_percentage_24h)
                    .sum::<f64>()
                    / count as f64
            } else {
                0.0
            };

            CategoryPerformance {
                category,
                allocation: pct,
                avg_price_change,
                token_count: count,
                total_value: in_category.iter().map(|h| h.value).sum(),
            }
        })
        .collect()
}

fn roi_or_zero(holding: &Holding) -> f64 {
    holding.roi.unwrap_or(0.0)
}

fn performer(holding: &Holding) -> PerformerEntry {
    PerformerEntry {
        token_id: holding.token.id.clone(),
        symbol: holding.token.symbol.clone(),
        roi: roi_or_zero(holding),
    }
}

pub fn roi_summary(holdings: &[Holding]) -> RoiSummary {
    let average_roi = if holdings.is_empty() {
        0.0
    } else {
        holdings.iter().map(roi_or_zero).sum::<f64>() / holdings.len() as f64
    };

    let mut by_roi: Vec<&Holding> = holdings.iter().collect();
    // Stable sort, so equal ROIs keep insertion order in both lists
    by_roi.sort_by(|a, b| {
        roi_or_zero(b)
            .partial_cmp(&roi_or_zero(a))
            .unwrap_or(Ordering::Equal)
    });
    let top_performers = by_roi
        .iter()
        .take(PERFORMER_LIST_LEN)
        .map(|h| performer(h))
        .collect();

    by_roi.sort_by(|a, b| {
        roi_or_zero(a)
            .partial_cmp(&roi_or_zero(b))
            .unwrap_or(Ordering::Equal)
    });
    let worst_performers = by_roi
        .iter()
        .take(PERFORMER_LIST_LEN)
        .map(|h| performer(h))
        .collect();

    RoiSummary {
        average_roi,
        profitable_count: holdings.iter().filter(|h| roi_or_zero(h) > 0.0).count(),
        loss_count: holdings.iter().filter(|h| roi_or_zero(h) < 0.0).count(),
        top_performers,
        worst_performers,
    }
}

pub fn volatility(holdings: &[Holding]) -> f64 {
    let total: f64 = holdings
        .iter()
        .map(|h| h.token.price_change_percentage_24h.abs())
        .sum();
    total / holdings.len().max(1) as f64
}

pub fn diversification_score(allocation: &Allocation) -> f64 {
    let active = allocation.iter().filter(|(_, pct)| *pct > 0.0).count();
    (active as f64 * 25.0).min(100.0)
}

pub fn compute_analytics(holdings: &[Holding], allocation: &Allocation) -> PortfolioAnalytics {
    PortfolioAnalytics {
        category_performance: category_performance(holdings, allocation),
        roi: roi_summary(holdings),
        volatility: volatility(holdings),
        diversification_score: diversification_score(allocation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::allocation::calculate_allocation;
    use crate::portfolio::holdings::test_support::holding;
    use crate::tokens::Category;

    fn with_change_and_roi(mut h: Holding, change: f64, roi: Option<f64>) -> Holding {
        h.token.price_change_percentage_24h = change;
        h.roi = roi;
        h
    }

    fn sample() -> Vec<Holding> {
        vec![
            with_change_and_roi(holding("bitcoin", Category::Btc, 1.0, 500.0), 2.0, Some(25.0)),
            with_change_and_roi(
                holding("ethereum", Category::EthBluechips, 1.0, 300.0),
                -4.0,
                Some(-10.0),
            ),
            with_change_and_roi(
                holding("solana", Category::EthBluechips, 1.0, 100.0),
                6.0,
                None,
            ),
            with_change_and_roi(
                holding("uniswap", Category::DefiAltcoins, 10.0, 10.0),
                -8.0,
                Some(80.0),
            ),
        ]
    }

    #[test]
    fn test_category_performance() {
        let holdings = sample();
        let allocation = calculate_allocation(&holdings);
        let performance = category_performance(&holdings, &allocation);

        assert_eq!(performance.len(), 4);
        let eth = &performance[1];
        assert_eq!(eth.category, Category::EthBluechips);
        assert_eq!(eth.token_count, 2);
        assert_eq!(eth.avg_price_change, 1.0);
        assert_eq!(eth.total_value, 400.0);
        assert_eq!(eth.allocation, 40.0);

        let stable = &performance[2];
        assert_eq!(stable.token_count, 0);
        assert_eq!(stable.avg_price_change, 0.0);
        assert_eq!(stable.total_value, 0.0);
    }

    #[test]
    fn test_roi_summary_counts_missing_roi_as_zero() {
        let summary = roi_summary(&sample());

        assert_eq!(summary.average_roi, (25.0 - 10.0 + 0.0 + 80.0) / 4.0);
        assert_eq!(summary.profitable_count, 2);
        assert_eq!(summary.loss_count, 1);

        let top: Vec<_> = summary.top_performers.iter().map(|p| p.token_id.as_str()).collect();
        assert_eq!(top, vec!["uniswap", "bitcoin", "solana"]);
        let worst: Vec<_> = summary
            .worst_performers
            .iter()
            .map(|p| p.token_id.as_str())
            .collect();
        assert_eq!(worst, vec!["ethereum", "solana", "bitcoin"]);
        assert_eq!(summary.worst_performers[1].roi, 0.0);
    }

    #[test]
    fn test_empty_holdings() {
        let analytics = compute_analytics(&[], &Allocation::default());
        assert_eq!(analytics.roi.average_roi, 0.0);
        assert!(analytics.roi.top_performers.is_empty());
        assert_eq!(analytics.volatility, 0.0);
        assert_eq!(analytics.diversification_score, 0.0);
    }

    #[test]
    fn test_volatility_is_mean_absolute_change() {
        assert_eq!(volatility(&sample()), (2.0 + 4.0 + 6.0 + 8.0) / 4.0);
    }

    #[test]
    fn test_diversification_score() {
        assert_eq!(diversification_score(&Allocation::new(50.0, 50.0, 0.0, 0.0)), 50.0);
        assert_eq!(diversification_score(&Allocation::uniform(25.0)), 100.0);
        assert_eq!(
            diversification_score(&calculate_allocation(&sample())),
            75.0
        );
    }
}
