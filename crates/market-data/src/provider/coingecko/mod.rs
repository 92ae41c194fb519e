//! CoinGecko provider for crypto prices and the global market snapshot.
//!
//! Uses the public v3 API:
//! - `/simple/price` for batch USD prices
//! - `/coins/{id}` for coin metadata and market figures
//! - `/global` for BTC dominance and total market cap
//!
//! The free tier rate limits aggressively. Requests are spaced by the
//! provider's [`RateLimiter`]. A 429 or a timeout is retried once after a
//! short pause.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::{MarketDataError, RetryClass};
use crate::models::{CoinDetails, GlobalMarket, PriceMap};
use crate::provider::{CryptoDataProvider, RateLimit};
use crate::rate_limiter::RateLimiter;

use models::{CoinResponse, GlobalResponse, SimplePriceEntry};

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// Public API root
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const USER_AGENT: &str = "Coinfolio/1.0";

/// Quote currency for every request
const VS_CURRENCY: &str = "usd";

/// Extra attempts after a 429 or a timeout
const RETRIES: u32 = 1;

/// Pause before retrying
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Connection settings for [`CoinGeckoProvider`].
#[derive(Clone, Debug)]
pub struct CoinGeckoConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub rate_limit: RateLimit,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            rate_limit: RateLimit::default(),
        }
    }
}

/// CoinGecko market data provider.
///
/// # Example
///
/// ```ignore
/// use coinfolio_market_data::CoinGeckoProvider;
///
/// let provider = CoinGeckoProvider::new();
/// let prices = provider.simple_prices(&["bitcoin".to_string()]).await?;
/// ```
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
    rate_limit: RateLimit,
    limiter: RateLimiter,
}

impl CoinGeckoProvider {
    /// Create a provider against the public API with default settings.
    pub fn new() -> Self {
        Self::with_config(CoinGeckoConfig::default())
    }

    pub fn with_config(config: CoinGeckoConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limiter: RateLimiter::new(&config.rate_limit),
            rate_limit: config.rate_limit,
        }
    }

    fn transport_error(e: reqwest::Error) -> MarketDataError {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            }
        }
    }

    /// GET `path` and decode the JSON body.
    ///
    /// Errors classified [`RetryClass::WithBackoff`] (429 or timeout) are
    /// retried once after a short pause. A 404 becomes
    /// `SymbolNotFound(not_found_key)`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        not_found_key: &str,
    ) -> Result<T, MarketDataError> {
        let url = format!("{}{}", self.base_url, path);
        let mut attempt = 0;

        loop {
            match self.get_once(&url, path, query, not_found_key).await {
                Err(e) if e.retry_class() == RetryClass::WithBackoff && attempt < RETRIES => {
                    attempt += 1;
                    warn!(
                        "{} request to {} failed ({}), retrying in {:?}",
                        PROVIDER_ID, path, e, RETRY_DELAY
                    );
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                result => return result,
            }
        }
    }

    async fn get_once<T: DeserializeOwned>(
        &self,
        url: &str,
        path: &str,
        query: &[(&str, &str)],
        not_found_key: &str,
    ) -> Result<T, MarketDataError> {
        self.limiter.acquire().await;
        debug!("{} GET {}", PROVIDER_ID, path);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(not_found_key.to_string()));
        }

        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                Self::transport_error(e)
            } else {
                MarketDataError::InvalidResponse {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CryptoDataProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn rate_limit(&self) -> RateLimit {
        self.rate_limit.clone()
    }

    async fn simple_prices(&self, ids: &[String]) -> Result<PriceMap, MarketDataError> {
        if ids.is_empty() {
            return Ok(PriceMap::new());
        }

        let joined = ids.join(",");
        let raw: std::collections::HashMap<String, SimplePriceEntry> = self
            .get_json(
                "/simple/price",
                &[("ids", joined.as_str()), ("vs_currencies", VS_CURRENCY)],
                &joined,
            )
            .await?;

        Ok(raw
            .into_iter()
            .filter_map(|(id, entry)| entry.usd.map(|price| (id, price)))
            .collect())
    }

    async fn coin(&self, id: &str) -> Result<CoinDetails, MarketDataError> {
        let path = format!("/coins/{}", urlencoding::encode(id));
        let raw: CoinResponse = self
            .get_json(
                &path,
                &[
                    ("localization", "false"),
                    ("tickers", "false"),
                    ("market_data", "true"),
                    ("community_data", "false"),
                    ("developer_data", "false"),
                    ("sparkline", "false"),
                ],
                id,
            )
            .await?;

        Ok(raw.into())
    }

    async fn global(&self) -> Result<GlobalMarket, MarketDataError> {
        let raw: GlobalResponse = self.get_json("/global", &[], "global").await?;

        raw.data
            .map(GlobalMarket::from)
            .ok_or_else(|| MarketDataError::NoData("global market data".to_string()))
    }
}
