use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use futures::future::join_all;
use log::{debug, error, warn};

use coinfolio_market_data::{CoinDetails, CryptoDataProvider};

use crate::tokens::{classify, Token};

use super::market_data_constants::{
    fallback_price, fallback_token, FALLBACK_BTC_DOMINANCE, FALLBACK_TOTAL_MARKET_CAP,
};
use super::{MarketDataClientTrait, MarketSnapshot, MarketTrend};

/// Fail-soft facade over a [`CryptoDataProvider`].
pub struct MarketDataClient {
    provider: Arc<dyn CryptoDataProvider>,
}

impl MarketDataClient {
    pub fn new(provider: Arc<dyn CryptoDataProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    fn token_from_coin(coin: CoinDetails) -> Option<Token> {
        let market = coin.market?;
        let category = classify(&coin.id, &coin.symbol);
        Some(Token {
            symbol: coin.symbol.to_uppercase(),
            category,
            current_price: market.price_usd.unwrap_or(0.0),
            market_cap: market.market_cap_usd.unwrap_or(0.0),
            price_change_percentage_24h: market.price_change_percentage_24h.unwrap_or(0.0),
            image: coin.image,
            id: coin.id,
            name: coin.name,
        })
    }
}

/// Missing, zero and NaN readings all take the default.
fn reading_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| *v != 0.0 && !v.is_nan()).unwrap_or(default)
}

#[async_trait]
impl MarketDataClientTrait for MarketDataClient {
    async fn fetch_token_price(&self, token_id: &str) -> f64 {
        match self.provider.simple_prices(&[token_id.to_string()]).await {
            Ok(prices) => match prices.get(token_id) {
                Some(price) if *price != 0.0 => *price,
                _ => {
                    warn!("No price data found for token: {}", token_id);
                    0.0
                }
            },
            Err(e) => {
                error!("Error fetching token price for {}: {}", token_id, e);
                fallback_price(token_id)
            }
        }
    }

    async fn fetch_token_data(&self, token_id: &str) -> Option<Token> {
        match self.provider.coin(token_id).await {
            Ok(coin) => {
                let token = Self::token_from_coin(coin);
                if token.is_none() {
                    warn!("No market data received for token: {}", token_id);
                }
                token
            }
            Err(e) => {
                error!("Error fetching token data for {}: {}", token_id, e);
                fallback_token(token_id)
            }
        }
    }

    async fn fetch_market_snapshot(&self) -> MarketSnapshot {
        match self.provider.global().await {
            Ok(global) => {
                let snapshot = MarketSnapshot {
                    btc_dominance: reading_or(global.btc_dominance, FALLBACK_BTC_DOMINANCE),
                    total_market_cap: reading_or(
                        global.total_market_cap_usd,
                        FALLBACK_TOTAL_MARKET_CAP,
                    ),
                    trend: MarketTrend::from_market_cap_change(
                        global.market_cap_change_percentage_24h_usd.unwrap_or(0.0),
                    ),
                    fetched_at: Utc::now(),
                    is_fallback: false,
                };
                debug!(
                    "Market snapshot: dominance {:.2}%, trend {:?}",
                    snapshot.btc_dominance, snapshot.trend
                );
                snapshot
            }
            Err(e) => {
                error!("Error fetching market data: {}", e);
                MarketSnapshot::fallback()
            }
        }
    }

    async fn fetch_batch_prices(&self, token_ids: &[String]) -> HashMap<String, f64> {
        if token_ids.is_empty() {
            return HashMap::new();
        }

        match self.provider.simple_prices(token_ids).await {
            Ok(prices) => prices,
            Err(e) => {
                warn!(
                    "Batch price request for {} token(s) failed, falling back to individual requests: {}",
                    token_ids.len(),
                    e
                );
                let prices = join_all(token_ids.iter().map(|id| self.fetch_token_price(id))).await;
                token_ids.iter().cloned().zip(prices).collect()
            }
        }
    }
}
