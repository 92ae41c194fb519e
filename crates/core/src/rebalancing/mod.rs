//! Rebalancing module - target allocation policy and trade recommendations.

mod rebalancing_model;
mod rebalancing_service;
mod target_policy;


pub use rebalancing_model::{Priority, RebalanceThresholds, Recommendation, TradeAction};
pub use rebalancing_service::recommend;
pub use target_policy::target_allocation;
