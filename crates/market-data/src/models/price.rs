use std::collections::HashMap;

/// USD prices keyed by provider coin id.
///
/// Ids the provider did not price are absent rather than mapped to zero.
pub type PriceMap = HashMap<String, f64>;
