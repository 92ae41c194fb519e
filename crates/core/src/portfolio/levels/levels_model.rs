use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Tier returned when a total value falls outside every tier range.
///
/// The default table ends at 100 000, so larger portfolios land here too.
pub const UNMATCHED_VALUE_FALLBACK_LEVEL: u8 = 1;

/// A value tier: [min_value, max_value) with its limit reduction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioLevel {
    pub level: u8,
    pub name: String,
    pub min_value: f64,
    pub max_value: f64,
    /// Percentage by which enabled limit bands are scaled down
    pub limit_reduction: f64,
    pub description: String,
}

impl PortfolioLevel {
    pub fn contains(&self, total_value: f64) -> bool {
        total_value >= self.min_value && total_value < self.max_value
    }
}

/// Where a value sits within its tier.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub current: PortfolioLevel,
    pub next: Option<PortfolioLevel>,
    /// 0..=100 within the current tier; 100 at the last tier
    pub progress: f64,
}

/// Ordered, non-empty, contiguous level tiers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "Vec<PortfolioLevel>", into = "Vec<PortfolioLevel>")]
pub struct LevelTable {
    levels: Vec<PortfolioLevel>,
}

impl LevelTable {
    pub fn new(levels: Vec<PortfolioLevel>) -> Result<Self> {
        let mut problems = Vec::new();

        if levels.is_empty() {
            problems.push("level table must contain at least one tier".to_string());
        }

        for (index, level) in levels.iter().enumerate() {
            let expected = index + 1;
            if usize::from(level.level) != expected {
                problems.push(format!(
                    "tier {} has level number {}, expected {}",
                    index + 1,
                    level.level,
                    expected
                ));
            }
            if !(level.min_value < level.max_value) {
                problems.push(format!(
                    "level {}: min value {} must be below max value {}",
                    level.level, level.min_value, level.max_value
                ));
            }
            if !(0.0..=100.0).contains(&level.limit_reduction) {
                problems.push(format!(
                    "level {}: limit reduction {} outside 0..=100",
                    level.level, level.limit_reduction
                ));
            }
        }

        for pair in levels.windows(2) {
            if pair[0].max_value != pair[1].min_value {
                problems.push(format!(
                    "level {} ends at {} but level {} starts at {}",
                    pair[0].level, pair[0].max_value, pair[1].level, pair[1].min_value
                ));
            }
        }

        if !problems.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Invalid level table: {}",
                problems.join("; ")
            ))));
        }

        Ok(LevelTable { levels })
    }

    pub fn levels(&self) -> &[PortfolioLevel] {
        &self.levels
    }

    pub fn get(&self, level: u8) -> Option<&PortfolioLevel> {
        self.levels.iter().find(|l| l.level == level)
    }
}

impl TryFrom<Vec<PortfolioLevel>> for LevelTable {
    type Error = Error;

    fn try_from(levels: Vec<PortfolioLevel>) -> Result<Self> {
        LevelTable::new(levels)
    }
}

impl From<LevelTable> for Vec<PortfolioLevel> {
    fn from(table: LevelTable) -> Self {
        table.levels
    }
}

fn tier(level: u8, name: &str, min_value: f64, max_value: f64, limit_reduction: f64) -> PortfolioLevel {
    let description = if limit_reduction == 0.0 {
        "Base limits unchanged".to_string()
    } else {
        format!("Limits reduced by {}%", limit_reduction)
    };
    PortfolioLevel {
        level,
        name: name.to_string(),
        min_value,
        max_value,
        limit_reduction,
        description,
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        LevelTable {
            levels: vec![
                tier(1, "Novice", 0.0, 5_000.0, 0.0),
                tier(2, "Beginner", 5_000.0, 10_000.0, 5.0),
                tier(3, "Intermediate", 10_000.0, 20_000.0, 10.0),
                tier(4, "Advanced", 20_000.0, 50_000.0, 15.0),
                tier(5, "Expert", 50_000.0, 100_000.0, 20.0),
            ],
        }
    }
}
