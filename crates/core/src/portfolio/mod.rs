//! Portfolio module - holdings, allocation, levels, analytics and the
//! engine that evaluates them together.

pub mod allocation;
pub mod analytics;
pub mod holdings;
pub mod levels;

mod portfolio_model;
mod portfolio_service;

#[cfg(test)]
mod portfolio_service_tests;

pub use portfolio_model::{PortfolioReport, TargetSource};
pub use portfolio_service::PortfolioEngine;
