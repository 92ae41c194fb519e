use std::collections::HashMap;

use async_trait::async_trait;

use crate::tokens::Token;

use super::MarketSnapshot;

/// Fail-soft market data access.
///
/// Implementations mask transport and provider failures with fallback data;
/// none of these methods return an error.
#[async_trait]
pub trait MarketDataClientTrait: Send + Sync {
    /// USD price, or 0 when the provider has no price for `token_id`.
    async fn fetch_token_price(&self, token_id: &str) -> f64;

    /// Token metadata with market figures; `None` when unknown.
    async fn fetch_token_data(&self, token_id: &str) -> Option<Token>;

    async fn fetch_market_snapshot(&self) -> MarketSnapshot;

    /// Prices for every id the provider could price.
    async fn fetch_batch_prices(&self, token_ids: &[String]) -> HashMap<String, f64>;
}
