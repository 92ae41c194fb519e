use chrono::Utc;

use crate::limits::{LimitProfile, ViolationKind};
use crate::market_data::{MarketSnapshot, MarketTrend};
use crate::portfolio::allocation::Allocation;
use crate::portfolio::holdings::test_support::holding;
use crate::portfolio::holdings::Holding;
use crate::portfolio::{PortfolioEngine, TargetSource};
use crate::rebalancing::{Priority, TradeAction};
use crate::risk::{ANALYTICS_V1, OVERVIEW_V1};
use crate::settings::{EngineConfig, PortfolioSettings};
use crate::tokens::Category;

fn market(btc_dominance: f64, trend: MarketTrend) -> MarketSnapshot {
    MarketSnapshot {
        btc_dominance,
        total_market_cap: 2.4e12,
        trend,
        fetched_at: Utc::now(),
        is_fallback: false,
    }
}

/// 10 000 USD: BTC 10%, ETH 25%, STABLE 30%, DEFI 35%
fn sample_holdings() -> Vec<Holding> {
    vec![
        holding("bitcoin", Category::Btc, 0.02, 50_000.0),
        holding("ethereum", Category::EthBluechips, 1.0, 2_500.0),
        holding("usd-coin", Category::Stablecoins, 3_000.0, 1.0),
        holding("uniswap", Category::DefiAltcoins, 350.0, 10.0),
    ]
}

#[test]
fn test_empty_portfolio() {
    let engine = PortfolioEngine::default();
    let report = engine.evaluate(
        &[],
        &MarketSnapshot::fallback(),
        &PortfolioSettings::default(),
    );

    assert_eq!(report.total_value, 0.0);
    assert_eq!(report.allocation, Allocation::default());
    assert_eq!(report.level.level, 1);
    // every category sits below its 20% minimum
    assert_eq!(report.violations.len(), 4);
    assert!(report
        .violations
        .iter()
        .all(|v| v.kind == ViolationKind::BelowMinimum));
    assert!(report.recommendations.iter().all(|r| r.amount == 0.0));
    assert_eq!(report.risk_scores[1].score, 0.0);
}

#[test]
fn test_full_evaluation() {
    let engine = PortfolioEngine::default();
    let settings = PortfolioSettings::default();
    let report = engine.evaluate(
        &sample_holdings(),
        &market(52.0, MarketTrend::Bear),
        &settings,
    );

    assert_eq!(report.total_value, 10_000.0);
    assert_eq!(report.holding_count, 4);

    // 10 000 is level 3 (10% reduction)
    assert_eq!(report.level.level, 3);
    assert_eq!(report.level_progress.progress, 0.0);
    let btc_limit = report.adjusted_limits.get(Category::Btc).unwrap();
    assert_eq!(btc_limit.min_percentage, 18.0);
    assert_eq!(btc_limit.max_percentage, 27.0);
    assert_eq!(report.adjusted_allocation, report.allocation.scaled(0.9));
    assert!((report.adjusted_allocation.get(Category::Stablecoins) - 27.0).abs() < 1e-9);

    // dominance 52 targets 35/25/25/15
    assert_eq!(report.target_source, TargetSource::BtcDominance);
    assert_eq!(report.target_allocation, Allocation::new(35.0, 25.0, 25.0, 15.0));

    let recs: Vec<_> = report
        .recommendations
        .iter()
        .map(|r| (r.category, r.action, r.priority))
        .collect();
    assert_eq!(
        recs,
        vec![
            (Category::Btc, TradeAction::Buy, Priority::High),
            (Category::DefiAltcoins, TradeAction::Sell, Priority::High),
            (Category::Stablecoins, TradeAction::Sell, Priority::Low),
        ]
    );

    let violating: Vec<_> = report.violations.iter().map(|v| v.category).collect();
    assert_eq!(
        violating,
        vec![Category::Btc, Category::Stablecoins, Category::DefiAltcoins]
    );

    assert_eq!(report.risk_scores[0].weight_set, ANALYTICS_V1);
    assert_eq!(report.risk_scores[1].weight_set, OVERVIEW_V1);
    assert_eq!(report.risk_score, report.risk_scores[0].score);
    assert_eq!(report.analytics.diversification_score, 100.0);
}

#[test]
fn test_custom_allocation_overrides_policy() {
    let engine = PortfolioEngine::default();
    let settings = PortfolioSettings {
        custom_allocation: Some(Allocation::new(10.0, 25.0, 30.0, 35.0)),
        ..Default::default()
    };

    let report = engine.evaluate(
        &sample_holdings(),
        &market(60.0, MarketTrend::Sideways),
        &settings,
    );

    assert_eq!(report.target_source, TargetSource::Custom);
    assert!(report.recommendations.is_empty());
}

#[test]
fn test_manual_mode_targets_uniform_split() {
    let engine = PortfolioEngine::default();
    let settings = PortfolioSettings {
        auto_mode: false,
        ..Default::default()
    };
    let (target, source) = engine.target_for(&settings, &market(60.0, MarketTrend::Bull));
    assert_eq!(source, TargetSource::Uniform);
    assert_eq!(target, Allocation::uniform(25.0));
}

#[test]
fn test_settings_threshold_drives_recommendations() {
    let engine = PortfolioEngine::default();
    let settings = PortfolioSettings {
        rebalancing_threshold: 15.0,
        ..Default::default()
    };
    let report = engine.evaluate(
        &sample_holdings(),
        &market(52.0, MarketTrend::Sideways),
        &settings,
    );
    // BTC and DEFI gaps are 25 and 20; STABLE's 5 is now filtered out
    assert_eq!(report.recommendations.len(), 2);
}

#[test]
fn test_engine_uses_configured_levels_and_limits() {
    let config = EngineConfig {
        base_limits: LimitProfile::uniform(0.0, 100.0),
        ..Default::default()
    };
    let engine = PortfolioEngine::new(config.clone());
    let settings = PortfolioSettings::from_config(&config);

    let report = engine.evaluate(
        &sample_holdings(),
        &market(45.0, MarketTrend::Sideways),
        &settings,
    );

    assert!(report.violations.is_empty());
    assert_eq!(engine.level_table().levels().len(), 5);
}

#[test]
fn test_large_portfolio_uses_fallback_level() {
    let engine = PortfolioEngine::default();
    let holdings = vec![holding("bitcoin", Category::Btc, 3.0, 50_000.0)];
    let report = engine.evaluate(
        &holdings,
        &market(52.0, MarketTrend::Sideways),
        &PortfolioSettings::default(),
    );

    assert_eq!(report.total_value, 150_000.0);
    assert_eq!(report.level.level, 1);
    assert_eq!(report.adjusted_limits, LimitProfile::default());
}
