//! Coinfolio Market Data Crate
//!
//! This crate provides provider-agnostic crypto market data fetching for
//! Coinfolio.
//!
//! # Overview
//!
//! - USD price lookups, one coin or a batch at a time
//! - Coin metadata with market figures
//! - The global market snapshot (BTC dominance, total market cap)
//! - Per-provider rate limiting with a retry on HTTP 429
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +----------------------+     +------------------+
//! |   coinfolio-core | --> |  CryptoDataProvider  | --> |   CoinGecko API  |
//! +------------------+     +----------------------+     +------------------+
//!                                    |
//!                                    v
//!                      CoinDetails / GlobalMarket / PriceMap
//! ```
//!
//! Providers propagate every failure as a [`MarketDataError`]. Masking
//! failures with fallback data is done by the caller.

pub mod errors;
pub mod models;
pub mod provider;
pub mod rate_limiter;

pub use errors::{MarketDataError, RetryClass};
pub use models::{CoinDetails, CoinMarket, GlobalMarket, PriceMap};
pub use provider::coingecko::{CoinGeckoConfig, CoinGeckoProvider};
pub use provider::{CryptoDataProvider, RateLimit};
pub use rate_limiter::RateLimiter;
