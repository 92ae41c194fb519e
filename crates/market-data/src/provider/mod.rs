//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `CryptoDataProvider` trait that all providers implement
//! - Rate limiting configuration
//! - The CoinGecko provider

mod capabilities;
mod traits;

pub mod coingecko;

// Re-exports
pub use capabilities::RateLimit;
pub use traits::CryptoDataProvider;
