use serde::{Deserialize, Serialize};

/// Coin metadata as reported by a provider.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoinDetails {
    /// Provider coin id (e.g. "bitcoin", "usd-coin")
    pub id: String,

    /// Ticker symbol as sent by the provider (case not normalised)
    pub symbol: String,

    /// Display name
    pub name: String,

    /// Small logo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// USD market figures. `None` when the provider returned no market block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<CoinMarket>,
}

/// USD market figures for a single coin.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoinMarket {
    pub price_usd: Option<f64>,
    pub market_cap_usd: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
}
