use log::warn;

use crate::portfolio::allocation::Allocation;

use super::{LevelProgress, LevelTable, PortfolioLevel, UNMATCHED_VALUE_FALLBACK_LEVEL};

impl LevelTable {
    /// First tier whose [min, max) range contains `total_value`, otherwise
    /// the [`UNMATCHED_VALUE_FALLBACK_LEVEL`] tier.
    pub fn resolve(&self, total_value: f64) -> &PortfolioLevel {
        if let Some(level) = self.levels().iter().find(|l| l.contains(total_value)) {
            return level;
        }

        warn!(
            "Portfolio value {} outside every level tier, using level {}",
            total_value, UNMATCHED_VALUE_FALLBACK_LEVEL
        );
        self.fallback_level()
    }

    fn fallback_level(&self) -> &PortfolioLevel {
        match self.get(UNMATCHED_VALUE_FALLBACK_LEVEL) {
            Some(level) => level,
            // Non-empty by construction
            None => &self.levels()[0],
        }
    }

    pub fn next_level(&self, level: &PortfolioLevel) -> Option<&PortfolioLevel> {
        level.level.checked_add(1).and_then(|next| self.get(next))
    }

    pub fn progress(&self, total_value: f64) -> LevelProgress {
        let current = self.resolve(total_value);
        let next = self.next_level(current);

        let progress = match next {
            None => 100.0,
            Some(_) => {
                let range = current.max_value - current.min_value;
                ((total_value - current.min_value) / range * 100.0).min(100.0)
            }
        };

        LevelProgress {
            current: current.clone(),
            next: next.cloned(),
            progress,
        }
    }

    /// Human-readable summary lines for a tier.
    pub fn benefits(&self, level: &PortfolioLevel) -> Vec<String> {
        let mut benefits = vec![
            format!("Level {}: {}", level.level, level.name),
            level.description.clone(),
        ];

        if level.level > 1 {
            benefits.push(format!("Limit reduction: {}%", level.limit_reduction));
        }

        if let Some(next) = self.next_level(level) {
            benefits.push(format!(
                "Next level: {} (from ${})",
                next.name,
                group_thousands(next.min_value)
            ));
        }

        benefits
    }
}

/// Scales every category by the level's reduction factor.
pub fn adjusted_allocation(allocation: &Allocation, level: &PortfolioLevel) -> Allocation {
    if level.limit_reduction == 0.0 {
        return *allocation;
    }
    allocation.scaled((100.0 - level.limit_reduction) / 100.0)
}

fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}
