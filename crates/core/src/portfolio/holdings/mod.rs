//! Holdings module - the in-memory holdings book and the service around it.

mod holdings_model;
mod holdings_service;
mod holdings_traits;


pub use holdings_model::{Holding, HoldingBook, NewHolding};
pub use holdings_service::HoldingsService;
pub use holdings_traits::HoldingsServiceTrait;
