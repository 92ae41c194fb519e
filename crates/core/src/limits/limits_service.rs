use log::debug;

use crate::portfolio::allocation::Allocation;
use crate::portfolio::levels::PortfolioLevel;

use super::{CategoryLimit, LimitProfile, LimitViolation};

/// Scales every enabled band by the level's reduction.
///
/// A zero reduction returns an equal copy. Disabled limits pass through.
pub fn apply_level_reduction(profile: &LimitProfile, level: &PortfolioLevel) -> LimitProfile {
    if level.limit_reduction == 0.0 {
        return profile.clone();
    }

    let multiplier = (100.0 - level.limit_reduction) / 100.0;
    debug!(
        "Applying level {} reduction ({}%) to limit profile",
        level.level, level.limit_reduction
    );

    LimitProfile::new(
        profile
            .iter()
            .map(|limit| {
                if !limit.enabled {
                    return *limit;
                }
                CategoryLimit {
                    min_percentage: (limit.min_percentage * multiplier).max(0.0),
                    max_percentage: (limit.max_percentage * multiplier).min(100.0),
                    ..*limit
                }
            })
            .collect(),
    )
}

/// Enabled limits whose band does not contain the current share.
///
/// At most one violation per category, in profile order.
pub fn detect_violations(allocation: &Allocation, profile: &LimitProfile) -> Vec<LimitViolation> {
    profile
        .enabled()
        .filter_map(|limit| {
            let current = allocation.get(limit.category);
            if current < limit.min_percentage {
                Some(LimitViolation::below_minimum(
                    limit.category,
                    current,
                    limit.min_percentage,
                ))
            } else if current > limit.max_percentage {
                Some(LimitViolation::above_maximum(
                    limit.category,
                    current,
                    limit.max_percentage,
                ))
            } else {
                None
            }
        })
        .collect()
}
