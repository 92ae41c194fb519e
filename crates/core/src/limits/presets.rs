//! Built-in limit presets keyed by BTC dominance, plus user-defined ones.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::portfolio::allocation::Allocation;
use crate::tokens::Category;

use super::{CategoryLimit, LimitProfile};

/// Preset returned when no dominance range matches
pub const DEFAULT_PRESET_ID: &str = "balanced";

/// Disambiguates custom presets created within the same millisecond.
static CUSTOM_PRESET_SEQ: AtomicU64 = AtomicU64::new(0);

/// Inclusive BTC dominance range a preset is meant for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DominanceRange {
    pub min: f64,
    pub max: f64,
}

impl DominanceRange {
    pub fn contains(&self, btc_dominance: f64) -> bool {
        btc_dominance >= self.min && btc_dominance <= self.max
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LimitPreset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub btc_dominance_range: DominanceRange,
    pub allocation: Allocation,
    pub category_limits: LimitProfile,
}

fn limits(bands: [(f64, f64); 4]) -> LimitProfile {
    LimitProfile::new(
        Category::ALL
            .into_iter()
            .zip(bands)
            .map(|(category, (min, max))| CategoryLimit::new(category, min, max))
            .collect(),
    )
}

fn preset(
    id: &str,
    name: &str,
    description: &str,
    range: (f64, f64),
    allocation: Allocation,
    bands: [(f64, f64); 4],
) -> LimitPreset {
    LimitPreset {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        btc_dominance_range: DominanceRange {
            min: range.0,
            max: range.1,
        },
        allocation,
        category_limits: limits(bands),
    }
}

/// The built-in presets in lookup order.
pub fn builtin_presets() -> Vec<LimitPreset> {
    vec![
        preset(
            "conservative",
            "Conservative",
            "High BTC dominance, focus on safety",
            (50.0, 100.0),
            Allocation::new(35.0, 25.0, 30.0, 10.0),
            [(30.0, 40.0), (20.0, 30.0), (25.0, 35.0), (5.0, 15.0)],
        ),
        preset(
            DEFAULT_PRESET_ID,
            "Balanced",
            "Medium BTC dominance, moderate risk",
            (40.0, 50.0),
            Allocation::new(30.0, 25.0, 25.0, 20.0),
            [(25.0, 35.0), (20.0, 30.0), (20.0, 30.0), (15.0, 25.0)],
        ),
        preset(
            "aggressive",
            "Aggressive",
            "Low BTC dominance, high risk and return",
            (0.0, 40.0),
            Allocation::new(25.0, 25.0, 20.0, 30.0),
            [(20.0, 30.0), (20.0, 30.0), (15.0, 25.0), (25.0, 35.0)],
        ),
        preset(
            "defi-focused",
            "DeFi focused",
            "Focus on decentralized finance",
            (0.0, 100.0),
            Allocation::new(20.0, 30.0, 15.0, 35.0),
            [(15.0, 25.0), (25.0, 35.0), (10.0, 20.0), (30.0, 40.0)],
        ),
        preset(
            "stable-focused",
            "Stability",
            "Focus on stable assets",
            (0.0, 100.0),
            Allocation::new(30.0, 20.0, 40.0, 10.0),
            [(25.0, 35.0), (15.0, 25.0), (35.0, 45.0), (5.0, 15.0)],
        ),
    ]
}

/// First built-in preset whose range contains `btc_dominance`; balanced
/// otherwise. Ranges overlap at their edges, so 50 selects conservative.
pub fn preset_for_dominance(btc_dominance: f64) -> LimitPreset {
    let mut presets = builtin_presets();
    let index = presets
        .iter()
        .position(|p| p.btc_dominance_range.contains(btc_dominance))
        .or_else(|| presets.iter().position(|p| p.id == DEFAULT_PRESET_ID))
        .unwrap_or(0);
    presets.swap_remove(index)
}

/// Builds a user preset applicable at any dominance.
pub fn create_custom_preset(
    name: &str,
    description: &str,
    allocation: Allocation,
    category_limits: LimitProfile,
) -> Result<LimitPreset> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    category_limits.validate()?;

    Ok(LimitPreset {
        id: format!(
            "custom-{}-{}",
            Utc::now().timestamp_millis(),
            CUSTOM_PRESET_SEQ.fetch_add(1, Ordering::Relaxed)
        ),
        name: name.trim().to_string(),
        description: description.to_string(),
        btc_dominance_range: DominanceRange {
            min: 0.0,
            max: 100.0,
        },
        allocation,
        category_limits,
    })
}
