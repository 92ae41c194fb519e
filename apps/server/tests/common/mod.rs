#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use coinfolio_core::{
    classify,
    market_data::{MarketDataClientTrait, MarketSnapshot, MarketTrend},
    settings::EngineConfig,
    Token,
};
use coinfolio_server::{api::app_router, config::Config, AppState};
use serde_json::Value;
use tower::ServiceExt;

pub const STUB_BTC_DOMINANCE: f64 = 56.0;

/// Market data with a fixed price list and no network.
pub struct StubMarketData {
    prices: HashMap<&'static str, (&'static str, &'static str, f64)>,
}

impl StubMarketData {
    pub fn new() -> Self {
        let prices = HashMap::from([
            ("bitcoin", ("btc", "Bitcoin", 50_000.0)),
            ("ethereum", ("eth", "Ethereum", 3_000.0)),
            ("usd-coin", ("usdc", "USD Coin", 1.0)),
            ("uniswap", ("uni", "Uniswap", 10.0)),
        ]);
        Self { prices }
    }
}

#[async_trait]
impl MarketDataClientTrait for StubMarketData {
    async fn fetch_token_price(&self, token_id: &str) -> f64 {
        self.prices.get(token_id).map(|(_, _, p)| *p).unwrap_or(1.0)
    }

    async fn fetch_token_data(&self, token_id: &str) -> Option<Token> {
        self.prices.get(token_id).map(|(symbol, name, price)| Token {
            id: token_id.to_string(),
            symbol: symbol.to_uppercase(),
            name: name.to_string(),
            current_price: *price,
            market_cap: 1.0e9,
            price_change_percentage_24h: 0.0,
            image: None,
            category: classify(token_id, symbol),
        })
    }

    async fn fetch_market_snapshot(&self) -> MarketSnapshot {
        MarketSnapshot {
            btc_dominance: STUB_BTC_DOMINANCE,
            total_market_cap: 2.0e12,
            trend: MarketTrend::Bull,
            fetched_at: Utc::now(),
            is_fallback: false,
        }
    }

    async fn fetch_batch_prices(&self, token_ids: &[String]) -> HashMap<String, f64> {
        token_ids
            .iter()
            .filter_map(|id| {
                self.prices
                    .get(id.as_str())
                    .map(|(_, _, p)| (id.clone(), *p * 2.0))
            })
            .collect()
    }
}

pub fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(
        EngineConfig::default(),
        Arc::new(StubMarketData::new()),
    ))
}

pub fn test_app(state: Arc<AppState>) -> Router {
    app_router(state, &Config::default())
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}
