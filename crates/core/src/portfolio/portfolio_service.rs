use chrono::Utc;
use log::debug;

use crate::limits::{apply_level_reduction, detect_violations};
use crate::market_data::MarketSnapshot;
use crate::portfolio::allocation::{calculate_allocation, calculate_total_value, Allocation};
use crate::portfolio::analytics::compute_analytics;
use crate::portfolio::holdings::Holding;
use crate::portfolio::levels::{adjusted_allocation, LevelTable};
use crate::rebalancing::{recommend, target_allocation};
use crate::risk::{score_all, RiskInput};
use crate::settings::{EngineConfig, PortfolioSettings};

use super::{PortfolioReport, TargetSource};

/// Evaluates holdings against market conditions and user settings.
///
/// Stateless apart from its configuration; every call is a pure function of
/// its inputs and the wall clock used for `generated_at`.
pub struct PortfolioEngine {
    config: EngineConfig,
}

impl PortfolioEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn level_table(&self) -> &LevelTable {
        &self.config.level_table
    }

    /// Custom allocation when set, otherwise the dominance policy.
    pub fn target_for(
        &self,
        settings: &PortfolioSettings,
        market: &MarketSnapshot,
    ) -> (Allocation, TargetSource) {
        if let Some(custom) = settings.custom_allocation {
            return (custom, TargetSource::Custom);
        }
        let source = if settings.auto_mode {
            TargetSource::BtcDominance
        } else {
            TargetSource::Uniform
        };
        (
            target_allocation(market.btc_dominance, settings.auto_mode),
            source,
        )
    }

    pub fn evaluate(
        &self,
        holdings: &[Holding],
        market: &MarketSnapshot,
        settings: &PortfolioSettings,
    ) -> PortfolioReport {
        let total_value = calculate_total_value(holdings);
        let allocation = calculate_allocation(holdings);

        let levels = self.level_table();
        let level = levels.resolve(total_value).clone();
        let level_progress = levels.progress(total_value);
        let level_benefits = levels.benefits(&level);

        let (target, target_source) = self.target_for(settings, market);

        let adjusted_limits = apply_level_reduction(&settings.category_limits, &level);
        let adjusted_allocation = adjusted_allocation(&allocation, &level);
        let violations = detect_violations(&allocation, &adjusted_limits);

        let thresholds = self
            .config
            .rebalance_thresholds
            .with_min_gap(settings.rebalancing_threshold);
        let recommendations = recommend(&allocation, &target, total_value, &thresholds);

        let risk_scores = score_all(
            &self.config.risk_weight_sets,
            &RiskInput {
                allocation,
                trend: market.trend,
                limit_reduction: level.limit_reduction,
                holding_count: holdings.len(),
            },
        );
        let risk_score = risk_scores.first().map(|s| s.score).unwrap_or(0.0);

        debug!(
            "Evaluated portfolio: value {:.2}, level {}, {} violation(s), {} recommendation(s)",
            total_value,
            level.level,
            violations.len(),
            recommendations.len()
        );

        PortfolioReport {
            total_value,
            holding_count: holdings.len(),
            level,
            level_progress,
            level_benefits,
            allocation,
            adjusted_allocation,
            target_allocation: target,
            target_source,
            adjusted_limits,
            violations,
            recommendations,
            risk_score,
            risk_scores,
            analytics: compute_analytics(holdings, &allocation),
            market: market.clone(),
            generated_at: Utc::now(),
        }
    }
}

impl Default for PortfolioEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
