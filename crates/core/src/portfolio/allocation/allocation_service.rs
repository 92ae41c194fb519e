//! Derives the current category allocation from holdings.

use log::debug;

use crate::portfolio::holdings::Holding;

use super::Allocation;

/// Sum of all holding values.
pub fn calculate_total_value(holdings: &[Holding]) -> f64 {
    holdings.iter().map(|h| h.value).sum()
}

/// Percentage of total value held in each category.
///
/// All categories are 0 when the total is 0. NaN values propagate.
pub fn calculate_allocation(holdings: &[Holding]) -> Allocation {
    let total_value = calculate_total_value(holdings);
    let mut allocation = Allocation::default();

    if total_value == 0.0 {
        return allocation;
    }

    for holding in holdings {
        *allocation.get_mut(holding.token.category) += holding.value / total_value * 100.0;
    }

    debug!(
        "Allocation over {} holdings (total {:.2}): {:?}",
        holdings.len(),
        total_value,
        allocation
    );
    allocation
}
