use async_trait::async_trait;

use crate::errors::Result;

use super::{Holding, NewHolding};

#[async_trait]
pub trait HoldingsServiceTrait: Send + Sync {
    async fn get_holdings(&self) -> Vec<Holding>;

    /// Looks the token up through market data, then adds the holding.
    async fn add_holding(&self, new_holding: NewHolding) -> Result<Holding>;

    async fn update_amount(&self, token_id: &str, amount: f64) -> Result<Holding>;

    async fn remove_holding(&self, token_id: &str) -> Result<Holding>;

    /// Reprices every holding from one batch lookup. Returns how many
    /// holdings got a new price.
    async fn refresh_prices(&self) -> usize;
}
