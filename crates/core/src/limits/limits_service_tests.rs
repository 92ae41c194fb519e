use proptest::prelude::*;

use crate::errors::{Error, ValidationError};
use crate::limits::*;
use crate::portfolio::allocation::Allocation;
use crate::portfolio::levels::LevelTable;
use crate::tokens::Category;

fn profile_with_disabled(category: Category) -> LimitProfile {
    LimitProfile::new(
        LimitProfile::default()
            .iter()
            .map(|l| CategoryLimit {
                enabled: l.category != category,
                ..*l
            })
            .collect(),
    )
}

#[test]
fn test_zero_reduction_returns_equal_profile() {
    let table = LevelTable::default();
    let profile = LimitProfile::default();
    assert_eq!(apply_level_reduction(&profile, table.resolve(1000.0)), profile);
}

#[test]
fn test_reduction_scales_enabled_limits() {
    let table = LevelTable::default();
    let expert = table.resolve(75_000.0);
    let profile = profile_with_disabled(Category::Stablecoins);

    let adjusted = apply_level_reduction(&profile, expert);

    let btc = adjusted.get(Category::Btc).unwrap();
    assert_eq!(btc.min_percentage, 16.0);
    assert_eq!(btc.max_percentage, 24.0);

    let stable = adjusted.get(Category::Stablecoins).unwrap();
    assert!(!stable.enabled);
    assert_eq!(stable.min_percentage, 20.0);
    assert_eq!(stable.max_percentage, 30.0);
}

#[test]
fn test_detects_below_and_above() {
    let allocation = Allocation::new(35.0, 25.0, 12.34, 27.66);
    let violations = detect_violations(&allocation, &LimitProfile::default());

    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].category, Category::Btc);
    assert_eq!(violations[0].kind, ViolationKind::AboveMaximum);
    assert_eq!(violations[0].message, "Above maximum (35.0% > 30.0%)");
    assert_eq!(violations[1].category, Category::Stablecoins);
    assert_eq!(violations[1].kind, ViolationKind::BelowMinimum);
    assert_eq!(violations[1].message, "Below minimum (12.3% < 20.0%)");
}

#[test]
fn test_band_edges_are_not_violations() {
    let allocation = Allocation::new(20.0, 30.0, 25.0, 25.0);
    assert!(detect_violations(&allocation, &LimitProfile::default()).is_empty());
}

#[test]
fn test_disabled_limit_never_reports() {
    let allocation = Allocation::new(100.0, 0.0, 0.0, 0.0);
    let violations = detect_violations(&allocation, &profile_with_disabled(Category::Btc));
    assert!(violations.iter().all(|v| v.category != Category::Btc));
    assert_eq!(violations.len(), 3);
}

#[test]
fn test_validate_accepts_default() {
    assert!(LimitProfile::default().validate().is_ok());
}

#[test]
fn test_validate_rejects_infeasible_sums() {
    let too_high = LimitProfile::uniform(30.0, 40.0);
    let err = too_high.validate().unwrap_err();
    assert!(err.to_string().contains("minimums sum to 120"));

    let too_low = LimitProfile::uniform(10.0, 20.0);
    let err = too_low.validate().unwrap_err();
    assert!(err.to_string().contains("maximums sum to 80"));
}

#[test]
fn test_validate_collects_every_problem() {
    let profile = LimitProfile::new(vec![
        CategoryLimit::new(Category::Btc, -5.0, 120.0),
        CategoryLimit::new(Category::EthBluechips, 40.0, 30.0),
        CategoryLimit::new(Category::Stablecoins, 0.0, 50.0),
    ]);

    match profile.validate() {
        Err(Error::Validation(ValidationError::InvalidLimits(problems))) => {
            assert!(problems.iter().any(|p| p.contains("DEFI_ALTCOINS: no limit")));
            assert!(problems.iter().any(|p| p.contains("below 0")));
            assert!(problems.iter().any(|p| p.contains("above 100")));
            assert!(problems.iter().any(|p| p.contains("exceeds maximum")));
        }
        other => panic!("expected InvalidLimits, got {:?}", other),
    }
}

#[test]
fn test_validate_ignores_disabled_limits() {
    let profile = LimitProfile::new(
        LimitProfile::uniform(30.0, 40.0)
            .iter()
            .map(|l| CategoryLimit {
                enabled: l.category == Category::Btc,
                max_percentage: 100.0,
                ..*l
            })
            .collect(),
    );
    assert!(profile.validate().is_ok());
}

fn arb_limit() -> impl Strategy<Value = (f64, f64, bool)> {
    (0.0f64..=100.0, 0.0f64..=100.0, any::<bool>()).prop_map(|(a, b, enabled)| {
        if a <= b {
            (a, b, enabled)
        } else {
            (b, a, enabled)
        }
    })
}

fn arb_profile() -> impl Strategy<Value = LimitProfile> {
    prop::array::uniform4(arb_limit()).prop_map(|bands| {
        LimitProfile::new(
            Category::ALL
                .into_iter()
                .zip(bands)
                .map(|(category, (min, max, enabled))| CategoryLimit {
                    category,
                    min_percentage: min,
                    max_percentage: max,
                    enabled,
                })
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn prop_zero_reduction_is_identity(profile in arb_profile()) {
        let level = LevelTable::default().resolve(0.0).clone();
        prop_assert_eq!(apply_level_reduction(&profile, &level), profile);
    }

    #[test]
    fn prop_reduction_scales_and_keeps_order(
        profile in arb_profile(),
        reduction in 0.01f64..100.0,
    ) {
        let mut level = LevelTable::default().resolve(0.0).clone();
        level.limit_reduction = reduction;
        let multiplier = (100.0 - reduction) / 100.0;

        let adjusted = apply_level_reduction(&profile, &level);
        for (before, after) in profile.iter().zip(adjusted.iter()) {
            prop_assert_eq!(before.category, after.category);
            if before.enabled {
                prop_assert_eq!(after.min_percentage, (before.min_percentage * multiplier).max(0.0));
                prop_assert_eq!(after.max_percentage, (before.max_percentage * multiplier).min(100.0));
                prop_assert!(after.min_percentage <= after.max_percentage);
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn prop_disabled_limits_never_violate(
        profile in arb_profile(),
        shares in prop::array::uniform4(0.0f64..=100.0),
    ) {
        let allocation = Allocation::new(shares[0], shares[1], shares[2], shares[3]);
        for violation in detect_violations(&allocation, &profile) {
            let limit = profile.get(violation.category).unwrap();
            prop_assert!(limit.enabled);
        }
    }
}
