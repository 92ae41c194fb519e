//! Holding domain models and the in-memory holdings book.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::portfolio::allocation::calculate_total_value;
use crate::tokens::{Category, Token};

/// A position in one token. Keyed by `token.id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub token: Token,
    pub amount: f64,
    /// amount × current price
    pub value: f64,
    /// Share of the book's total value
    pub percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_link: Option<String>,
    /// (current − purchase) / purchase × 100; absent without a usable
    /// purchase price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi: Option<f64>,
}

impl Holding {
    fn reprice(&mut self, price: f64) {
        self.token.current_price = price;
        self.value = self.amount * price;
        self.roi = compute_roi(price, self.purchase_price);
    }
}

/// Input model for adding a holding
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub token_id: String,
    pub amount: f64,
    pub purchase_price: Option<f64>,
    /// Overrides the fetched market price
    pub current_price: Option<f64>,
    pub transaction_link: Option<String>,
    /// Overrides the classifier's category
    pub category: Option<Category>,
}

impl NewHolding {
    pub fn validate(&self) -> Result<()> {
        if self.token_id.trim().is_empty() {
            return Err(ValidationError::MissingField("tokenId".to_string()).into());
        }
        validate_amount(self.amount)?;
        if let Some(price) = self.purchase_price {
            validate_price("purchasePrice", price)?;
        }
        if let Some(price) = self.current_price {
            validate_price("currentPrice", price)?;
        }
        Ok(())
    }
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::InvalidInput(format!(
            "Amount must be a non-negative number, got {}",
            amount
        ))
        .into());
    }
    Ok(())
}

fn validate_price(field: &str, price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            field, price
        ))
        .into());
    }
    Ok(())
}

fn compute_roi(current_price: f64, purchase_price: Option<f64>) -> Option<f64> {
    match purchase_price {
        Some(purchase) if purchase != 0.0 => Some((current_price - purchase) / purchase * 100.0),
        _ => None,
    }
}

/// Current-state holdings, in insertion order. No history is kept.
#[derive(Debug, Clone, Default)]
pub struct HoldingBook {
    holdings: Vec<Holding>,
}

impl HoldingBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn get(&self, token_id: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.token.id == token_id)
    }

    pub fn token_ids(&self) -> Vec<String> {
        self.holdings.iter().map(|h| h.token.id.clone()).collect()
    }

    pub fn total_value(&self) -> f64 {
        calculate_total_value(&self.holdings)
    }

    /// Adds a holding for `token`, applying the category and price overrides
    /// from `new_holding`.
    pub fn add(&mut self, mut token: Token, new_holding: NewHolding) -> Result<Holding> {
        new_holding.validate()?;
        if self.get(&token.id).is_some() {
            return Err(Error::ConstraintViolation(format!(
                "Holding for '{}' already exists",
                token.id
            )));
        }

        if let Some(category) = new_holding.category {
            token.category = category;
        }
        if let Some(price) = new_holding.current_price.filter(|p| *p > 0.0) {
            token.current_price = price;
        }

        let price = token.current_price;
        let holding = Holding {
            value: new_holding.amount * price,
            percentage: 0.0,
            roi: compute_roi(price, new_holding.purchase_price),
            amount: new_holding.amount,
            purchase_price: new_holding.purchase_price,
            transaction_link: new_holding
                .transaction_link
                .filter(|link| !link.trim().is_empty()),
            token,
        };
        let token_id = holding.token.id.clone();
        debug!("Adding holding {} (value {:.2})", token_id, holding.value);

        self.holdings.push(holding);
        self.recompute_percentages();
        self.get(&token_id)
            .cloned()
            .ok_or_else(|| Error::Unexpected(format!("Holding '{}' vanished", token_id)))
    }

    pub fn update_amount(&mut self, token_id: &str, amount: f64) -> Result<Holding> {
        validate_amount(amount)?;
        let holding = self
            .holdings
            .iter_mut()
            .find(|h| h.token.id == token_id)
            .ok_or_else(|| Error::NotFound(format!("Holding '{}'", token_id)))?;

        holding.amount = amount;
        holding.value = amount * holding.token.current_price;
        self.recompute_percentages();
        self.get(token_id)
            .cloned()
            .ok_or_else(|| Error::Unexpected(format!("Holding '{}' vanished", token_id)))
    }

    pub fn remove(&mut self, token_id: &str) -> Result<Holding> {
        let index = self
            .holdings
            .iter()
            .position(|h| h.token.id == token_id)
            .ok_or_else(|| Error::NotFound(format!("Holding '{}'", token_id)))?;

        let removed = self.holdings.remove(index);
        self.recompute_percentages();
        Ok(removed)
    }

    /// Reprices every holding that has a positive entry in `prices`.
    /// Returns the number of holdings updated.
    pub fn apply_prices(&mut self, prices: &HashMap<String, f64>) -> usize {
        let mut updated = 0;
        for holding in &mut self.holdings {
            if let Some(&price) = prices.get(&holding.token.id) {
                if price > 0.0 {
                    holding.reprice(price);
                    updated += 1;
                }
            }
        }
        if updated > 0 {
            self.recompute_percentages();
        }
        updated
    }

    fn recompute_percentages(&mut self) {
        let total = self.total_value();
        for holding in &mut self.holdings {
            holding.percentage = if total > 0.0 {
                holding.value / total * 100.0
            } else {
                0.0
            };
        }
    }
}
