//! Portfolio levels - value tiers that tighten the limit band as the
//! portfolio grows.

mod levels_model;
mod levels_service;

pub use levels_model::{LevelProgress, LevelTable, PortfolioLevel, UNMATCHED_VALUE_FALLBACK_LEVEL};
pub use levels_service::adjusted_allocation;
