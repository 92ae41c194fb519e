use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::RwLock;

use crate::errors::{Error, Result};
use crate::market_data::MarketDataClientTrait;

use super::{Holding, HoldingBook, HoldingsServiceTrait, NewHolding};

pub struct HoldingsService {
    book: RwLock<HoldingBook>,
    market_data: Arc<dyn MarketDataClientTrait>,
}

impl HoldingsService {
    pub fn new(market_data: Arc<dyn MarketDataClientTrait>) -> Self {
        Self {
            book: RwLock::new(HoldingBook::new()),
            market_data,
        }
    }
}

#[async_trait]
impl HoldingsServiceTrait for HoldingsService {
    async fn get_holdings(&self) -> Vec<Holding> {
        self.book.read().await.holdings().to_vec()
    }

    async fn add_holding(&self, new_holding: NewHolding) -> Result<Holding> {
        new_holding.validate()?;
        let token_id = new_holding.token_id.trim().to_lowercase();

        let token = self
            .market_data
            .fetch_token_data(&token_id)
            .await
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "Token '{}' not found. Please check the token ID.",
                    token_id
                ))
            })?;

        let holding = self.book.write().await.add(token, new_holding)?;
        info!(
            "Added holding {} ({} @ {})",
            holding.token.id, holding.amount, holding.token.current_price
        );
        Ok(holding)
    }

    async fn update_amount(&self, token_id: &str, amount: f64) -> Result<Holding> {
        let holding = self.book.write().await.update_amount(token_id, amount)?;
        debug!("Updated amount of {} to {}", token_id, amount);
        Ok(holding)
    }

    async fn remove_holding(&self, token_id: &str) -> Result<Holding> {
        let removed = self.book.write().await.remove(token_id)?;
        info!("Removed holding {}", token_id);
        Ok(removed)
    }

    async fn refresh_prices(&self) -> usize {
        let token_ids = self.book.read().await.token_ids();
        if token_ids.is_empty() {
            return 0;
        }

        // Fetch without holding the lock; holdings removed meanwhile are
        // simply not matched.
        let prices = self.market_data.fetch_batch_prices(&token_ids).await;
        let updated = self.book.write().await.apply_prices(&prices);

        info!(
            "Refreshed prices for {} of {} holding(s)",
            updated,
            token_ids.len()
        );
        updated
    }
}
