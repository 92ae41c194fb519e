use crate::constants::UNIFORM_TARGET_PCT;
use crate::portfolio::allocation::Allocation;

/// Exclusive lower dominance bound and the target it selects, checked
/// top-down.
const DOMINANCE_BUCKETS: [(f64, Allocation); 4] = [
    (55.0, Allocation::new(40.0, 25.0, 20.0, 15.0)),
    (50.0, Allocation::new(35.0, 25.0, 25.0, 15.0)),
    (45.0, Allocation::new(30.0, 25.0, 25.0, 20.0)),
    (40.0, Allocation::new(25.0, 25.0, 25.0, 25.0)),
];

const LOW_DOMINANCE_TARGET: Allocation = Allocation::new(20.0, 25.0, 25.0, 30.0);

/// Target allocation implied by BTC dominance.
///
/// Weight shifts from BTC toward DeFi/altcoins as dominance falls. With auto
/// mode off every category gets the same share.
pub fn target_allocation(btc_dominance: f64, auto_mode: bool) -> Allocation {
    if !auto_mode {
        return Allocation::uniform(UNIFORM_TARGET_PCT);
    }

    DOMINANCE_BUCKETS
        .iter()
        .find(|(lower_bound, _)| btc_dominance > *lower_bound)
        .map(|(_, target)| *target)
        .unwrap_or(LOW_DOMINANCE_TARGET)
}
