//! Coinfolio Core - domain types and the allocation/limit engine.
//!
//! The computational modules (`portfolio::allocation`, `portfolio::levels`,
//! `limits`, `rebalancing`, `risk`) are pure and synchronous. The holdings,
//! settings and market data services hold in-memory state and reach the
//! market through the `coinfolio-market-data` crate.

pub mod constants;
pub mod errors;
pub mod limits;
pub mod market_data;
pub mod portfolio;
pub mod rebalancing;
pub mod risk;
pub mod settings;
pub mod tokens;

pub use portfolio::allocation::Allocation;
pub use portfolio::{PortfolioEngine, PortfolioReport};
pub use tokens::{classify, Category, Token};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
