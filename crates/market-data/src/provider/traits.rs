//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CoinDetails, GlobalMarket, PriceMap};

use super::capabilities::RateLimit;

/// Trait for crypto market data providers.
///
/// Implementations return raw provider results and propagate every failure;
/// masking errors with fallback data is the caller's job.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use coinfolio_market_data::{CryptoDataProvider, RateLimit};
///
/// struct StaticProvider;
///
/// #[async_trait]
/// impl CryptoDataProvider for StaticProvider {
///     fn id(&self) -> &'static str {
///         "STATIC"
///     }
///
///     fn rate_limit(&self) -> RateLimit {
///         RateLimit::default()
///     }
///
///     // ... implement the fetch methods
/// }
/// ```
#[async_trait]
pub trait CryptoDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Rate limiting configuration applied to outgoing requests.
    fn rate_limit(&self) -> RateLimit;

    /// Fetch USD prices for several coins in one request.
    ///
    /// Coins the provider doesn't price are left out of the map.
    async fn simple_prices(&self, ids: &[String]) -> Result<PriceMap, MarketDataError>;

    /// Fetch metadata and USD market figures for one coin.
    async fn coin(&self, id: &str) -> Result<CoinDetails, MarketDataError>;

    /// Fetch the global market-cap snapshot.
    async fn global(&self) -> Result<GlobalMarket, MarketDataError>;
}
