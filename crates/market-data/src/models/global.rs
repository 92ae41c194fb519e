use serde::{Deserialize, Serialize};

/// Global crypto market snapshot.
///
/// Every field is optional: providers omit figures during outages and
/// callers substitute their own defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalMarket {
    /// Bitcoin's share of total market capitalisation, 0-100
    pub btc_dominance: Option<f64>,

    /// Total market capitalisation in USD
    pub total_market_cap_usd: Option<f64>,

    /// 24h change of the total market capitalisation, in percent
    pub market_cap_change_percentage_24h_usd: Option<f64>,
}
