//! Market data module - snapshot model, the fail-soft client facade over a
//! crypto data provider, and the snapshot service.

mod market_data_client;
mod market_data_constants;
mod market_data_model;
mod market_data_service;
mod market_data_traits;


pub use market_data_client::MarketDataClient;
pub use market_data_constants::*;
pub use market_data_model::{MarketSnapshot, MarketTrend};
pub use market_data_service::MarketSnapshotService;
pub use market_data_traits::MarketDataClientTrait;
