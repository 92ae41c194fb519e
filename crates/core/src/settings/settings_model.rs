use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::DEFAULT_REBALANCE_THRESHOLD_PCT;
use crate::errors::{Result, ValidationError};
use crate::limits::LimitProfile;
use crate::portfolio::allocation::Allocation;

use super::EngineConfig;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

/// User-editable portfolio settings. In-memory only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSettings {
    /// Derive the target from BTC dominance instead of a uniform split
    pub auto_mode: bool,
    /// Base limits before the level reduction
    pub category_limits: LimitProfile,
    /// Replaces the derived target when set
    pub custom_allocation: Option<Allocation>,
    /// Minimum gap, in percentage points, for a rebalancing recommendation
    pub rebalancing_threshold: f64,
    pub risk_tolerance: RiskTolerance,
}

impl PortfolioSettings {
    pub fn from_config(config: &EngineConfig) -> Self {
        PortfolioSettings {
            auto_mode: true,
            category_limits: config.base_limits.clone(),
            custom_allocation: None,
            rebalancing_threshold: config.rebalance_thresholds.min_gap_pct,
            risk_tolerance: RiskTolerance::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.category_limits.validate()?;

        if !self.rebalancing_threshold.is_finite() || self.rebalancing_threshold < 0.0 {
            return Err(ValidationError::InvalidInput(format!(
                "rebalancingThreshold must be a non-negative number, got {}",
                self.rebalancing_threshold
            ))
            .into());
        }

        if let Some(allocation) = &self.custom_allocation {
            if let Some((category, pct)) = allocation
                .iter()
                .find(|(_, pct)| !pct.is_finite() || *pct < 0.0)
            {
                return Err(ValidationError::InvalidInput(format!(
                    "customAllocation.{} must be a non-negative number, got {}",
                    category, pct
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Copy with every field present in `update` replaced.
    pub fn merged(&self, update: &SettingsUpdate) -> Self {
        PortfolioSettings {
            auto_mode: update.auto_mode.unwrap_or(self.auto_mode),
            category_limits: update
                .category_limits
                .clone()
                .unwrap_or_else(|| self.category_limits.clone()),
            custom_allocation: update.custom_allocation.unwrap_or(self.custom_allocation),
            rebalancing_threshold: update
                .rebalancing_threshold
                .unwrap_or(self.rebalancing_threshold),
            risk_tolerance: update.risk_tolerance.unwrap_or(self.risk_tolerance),
        }
    }
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        PortfolioSettings {
            auto_mode: true,
            category_limits: LimitProfile::default(),
            custom_allocation: None,
            rebalancing_threshold: DEFAULT_REBALANCE_THRESHOLD_PCT,
            risk_tolerance: RiskTolerance::default(),
        }
    }
}

/// Partial settings update. `customAllocation: null` clears the custom
/// allocation; omitting it leaves it unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub auto_mode: Option<bool>,
    pub category_limits: Option<LimitProfile>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub custom_allocation: Option<Option<Allocation>>,
    pub rebalancing_threshold: Option<f64>,
    pub risk_tolerance: Option<RiskTolerance>,
}

fn present_or_null<'de, D>(deserializer: D) -> std::result::Result<Option<Option<Allocation>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Allocation>::deserialize(deserializer).map(Some)
}
