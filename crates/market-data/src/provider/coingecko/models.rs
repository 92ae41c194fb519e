//! Raw CoinGecko API payloads.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{CoinDetails, CoinMarket, GlobalMarket};

/// `/simple/price` entry: `{"bitcoin": {"usd": 45000.0}}`
#[derive(Debug, Deserialize)]
pub(super) struct SimplePriceEntry {
    pub usd: Option<f64>,
}

/// A `{"usd": <number>}` object as used throughout `market_data`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct UsdValue {
    pub usd: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CoinImage {
    pub small: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CoinMarketData {
    #[serde(default)]
    pub current_price: UsdValue,
    #[serde(default)]
    pub market_cap: UsdValue,
    pub price_change_percentage_24h: Option<f64>,
}

/// `/coins/{id}` response (subset).
#[derive(Debug, Deserialize)]
pub(super) struct CoinResponse {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: Option<CoinImage>,
    pub market_data: Option<CoinMarketData>,
}

impl From<CoinResponse> for CoinDetails {
    fn from(raw: CoinResponse) -> Self {
        CoinDetails {
            id: raw.id,
            symbol: raw.symbol,
            name: raw.name,
            image: raw.image.and_then(|img| img.small),
            market: raw.market_data.map(|md| CoinMarket {
                price_usd: md.current_price.usd,
                market_cap_usd: md.market_cap.usd,
                price_change_percentage_24h: md.price_change_percentage_24h,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct GlobalData {
    #[serde(default)]
    pub market_cap_percentage: HashMap<String, f64>,
    #[serde(default)]
    pub total_market_cap: HashMap<String, f64>,
    pub market_cap_change_percentage_24h_usd: Option<f64>,
}

/// `/global` response: everything sits under `data`.
#[derive(Debug, Deserialize)]
pub(super) struct GlobalResponse {
    pub data: Option<GlobalData>,
}

impl From<GlobalData> for GlobalMarket {
    fn from(data: GlobalData) -> Self {
        GlobalMarket {
            btc_dominance: data.market_cap_percentage.get("btc").copied(),
            total_market_cap_usd: data.total_market_cap.get("usd").copied(),
            market_cap_change_percentage_24h_usd: data.market_cap_change_percentage_24h_usd,
        }
    }
}
