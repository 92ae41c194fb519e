//! Engine configuration: every default the computations draw on.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::limits::LimitProfile;
use crate::portfolio::levels::LevelTable;
use crate::rebalancing::RebalanceThresholds;
use crate::risk::RiskWeightSet;

/// Passed to the engine at construction. Any field missing from a config
/// file keeps its default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Limits a fresh settings value starts from
    pub base_limits: LimitProfile,
    pub level_table: LevelTable,
    pub rebalance_thresholds: RebalanceThresholds,
    /// Scored in order; the first is the headline score
    pub risk_weight_sets: Vec<RiskWeightSet>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            base_limits: LimitProfile::default(),
            level_table: LevelTable::default(),
            rebalance_thresholds: RebalanceThresholds::default(),
            risk_weight_sets: RiskWeightSet::defaults(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&contents)?;
        info!("Loaded engine configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.base_limits.validate()?;

        if self.risk_weight_sets.is_empty() {
            return Err(Error::InvalidConfigValue(
                "riskWeightSets must contain at least one weight set".to_string(),
            ));
        }
        let thresholds = &self.rebalance_thresholds;
        if !(thresholds.min_gap_pct >= 0.0) {
            return Err(Error::InvalidConfigValue(format!(
                "rebalanceThresholds.minGapPct must be >= 0, got {}",
                thresholds.min_gap_pct
            )));
        }
        Ok(())
    }
}
