//! Fallback values used when the market-data provider fails.

use crate::tokens::{Category, Token};

pub const FALLBACK_BTC_DOMINANCE: f64 = 52.5;
pub const FALLBACK_TOTAL_MARKET_CAP: f64 = 2.5e12;

/// Price used for tokens missing from [`FALLBACK_PRICES`]
pub const DEFAULT_FALLBACK_PRICE: f64 = 1.0;

/// Last-known USD prices by provider id.
pub const FALLBACK_PRICES: &[(&str, f64)] = &[
    ("bitcoin", 45_000.0),
    ("ethereum", 2_500.0),
    ("usd-coin", 1.0),
    ("tether", 1.0),
    ("binancecoin", 300.0),
    ("cardano", 0.5),
    ("solana", 100.0),
    ("polkadot", 7.0),
];

pub fn fallback_price(token_id: &str) -> f64 {
    FALLBACK_PRICES
        .iter()
        .find(|(id, _)| *id == token_id)
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_FALLBACK_PRICE)
}

/// Built-in token data for the few tokens that have one.
pub fn fallback_token(token_id: &str) -> Option<Token> {
    let (symbol, name, price, market_cap, change, image, category) = match token_id {
        "bitcoin" => (
            "BTC",
            "Bitcoin",
            45_000.0,
            850e9,
            2.5,
            "https://assets.coingecko.com/coins/images/1/small/bitcoin.png",
            Category::Btc,
        ),
        "ethereum" => (
            "ETH",
            "Ethereum",
            2_500.0,
            300e9,
            1.8,
            "https://assets.coingecko.com/coins/images/279/small/ethereum.png",
            Category::EthBluechips,
        ),
        "usd-coin" => (
            "USDC",
            "USD Coin",
            1.0,
            25e9,
            0.0,
            "https://assets.coingecko.com/coins/images/6319/small/USD_Coin_icon.png",
            Category::Stablecoins,
        ),
        _ => return None,
    };

    Some(Token {
        id: token_id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        current_price: price,
        market_cap,
        price_change_percentage_24h: change,
        image: Some(image.to_string()),
        category,
    })
}
