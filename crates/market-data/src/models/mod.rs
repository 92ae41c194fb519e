//! Market data models
//!
//! Provider-agnostic shapes returned by every [`CryptoDataProvider`](crate::CryptoDataProvider):
//! - `coin` - Coin metadata with its USD market figures (CoinDetails, CoinMarket)
//! - `global` - Global market-cap snapshot (GlobalMarket)
//! - `price` - Batch price lookups (PriceMap)

mod coin;
mod global;
mod price;

pub use coin::{CoinDetails, CoinMarket};
pub use global::GlobalMarket;
pub use price::PriceMap;
