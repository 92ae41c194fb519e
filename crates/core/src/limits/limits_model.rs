//! Category limit domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::tokens::Category;

/// Allowed [min, max] percentage band for one category.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLimit {
    pub category: Category,
    pub min_percentage: f64,
    pub max_percentage: f64,
    pub enabled: bool,
}

impl CategoryLimit {
    pub const fn new(category: Category, min_percentage: f64, max_percentage: f64) -> Self {
        CategoryLimit {
            category,
            min_percentage,
            max_percentage,
            enabled: true,
        }
    }
}

/// One limit per category.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct LimitProfile {
    limits: Vec<CategoryLimit>,
}

impl LimitProfile {
    pub fn new(limits: Vec<CategoryLimit>) -> Self {
        LimitProfile { limits }
    }

    /// Same [min, max] band, enabled, for every category.
    pub fn uniform(min_percentage: f64, max_percentage: f64) -> Self {
        LimitProfile::new(
            Category::ALL
                .into_iter()
                .map(|c| CategoryLimit::new(c, min_percentage, max_percentage))
                .collect(),
        )
    }

    pub fn limits(&self) -> &[CategoryLimit] {
        &self.limits
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryLimit> {
        self.limits.iter()
    }

    pub fn get(&self, category: Category) -> Option<&CategoryLimit> {
        self.limits.iter().find(|l| l.category == category)
    }

    pub fn enabled(&self) -> impl Iterator<Item = &CategoryLimit> {
        self.limits.iter().filter(|l| l.enabled)
    }

    /// Checks that a feasible allocation exists for the enabled limits.
    ///
    /// Every problem is collected, not only the first.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        for category in Category::ALL {
            match self.limits.iter().filter(|l| l.category == category).count() {
                0 => problems.push(format!("{}: no limit defined", category)),
                1 => {}
                n => problems.push(format!("{}: defined {} times", category, n)),
            }
        }

        for limit in self.enabled() {
            if !(limit.min_percentage >= 0.0) {
                problems.push(format!(
                    "{}: minimum {} is below 0",
                    limit.category, limit.min_percentage
                ));
            }
            if !(limit.max_percentage <= 100.0) {
                problems.push(format!(
                    "{}: maximum {} is above 100",
                    limit.category, limit.max_percentage
                ));
            }
            if !(limit.min_percentage <= limit.max_percentage) {
                problems.push(format!(
                    "{}: minimum {} exceeds maximum {}",
                    limit.category, limit.min_percentage, limit.max_percentage
                ));
            }
        }

        let total_min: f64 = self.enabled().map(|l| l.min_percentage).sum();
        if total_min > 100.0 {
            problems.push(format!("minimums sum to {} (> 100)", total_min));
        }

        let has_enabled = self.enabled().next().is_some();
        let total_max: f64 = self.enabled().map(|l| l.max_percentage).sum();
        if has_enabled && total_max < 100.0 {
            problems.push(format!("maximums sum to {} (< 100)", total_max));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::InvalidLimits(problems).into())
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Default for LimitProfile {
    fn default() -> Self {
        LimitProfile::uniform(20.0, 30.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    BelowMinimum,
    AboveMaximum,
}

/// A category whose current share is outside its enabled band.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LimitViolation {
    pub category: Category,
    pub kind: ViolationKind,
    pub current_percentage: f64,
    /// The bound that was crossed
    pub limit_percentage: f64,
    pub message: String,
}

impl LimitViolation {
    pub fn below_minimum(category: Category, current: f64, min: f64) -> Self {
        LimitViolation {
            category,
            kind: ViolationKind::BelowMinimum,
            current_percentage: current,
            limit_percentage: min,
            message: format!("Below minimum ({:.1}% < {:.1}%)", current, min),
        }
    }

    pub fn above_maximum(category: Category, current: f64, max: f64) -> Self {
        LimitViolation {
            category,
            kind: ViolationKind::AboveMaximum,
            current_percentage: current,
            limit_percentage: max,
            message: format!("Above maximum ({:.1}% > {:.1}%)", current, max),
        }
    }
}
