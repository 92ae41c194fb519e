use std::sync::Arc;

use crate::config::Config;
use anyhow::Context;
use coinfolio_core::{
    limits::LimitPreset,
    market_data::{MarketDataClient, MarketDataClientTrait, MarketSnapshotService},
    portfolio::holdings::{HoldingsService, HoldingsServiceTrait},
    settings::{EngineConfig, SettingsService, SettingsServiceTrait},
    PortfolioEngine,
};
use coinfolio_market_data::{CoinGeckoConfig, CoinGeckoProvider};
use tokio::sync::RwLock;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub engine: Arc<PortfolioEngine>,
    pub holdings_service: Arc<dyn HoldingsServiceTrait + Send + Sync>,
    pub settings_service: Arc<dyn SettingsServiceTrait + Send + Sync>,
    pub market_snapshot_service: Arc<MarketSnapshotService>,
    /// User-defined limit presets, in creation order
    pub custom_presets: RwLock<Vec<LimitPreset>>,
}

impl AppState {
    /// Wires the services around one market data client.
    pub fn new(engine_config: EngineConfig, market_data: Arc<dyn MarketDataClientTrait>) -> Self {
        let settings_service = Arc::new(SettingsService::new(&engine_config));
        let holdings_service = Arc::new(HoldingsService::new(market_data.clone()));
        let market_snapshot_service = Arc::new(MarketSnapshotService::new(market_data));

        Self {
            engine: Arc::new(PortfolioEngine::new(engine_config)),
            holdings_service,
            settings_service,
            market_snapshot_service,
            custom_presets: RwLock::new(Vec::new()),
        }
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("CF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let engine_config = match &config.engine_config_path {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("Failed to load engine config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let mut provider_config = CoinGeckoConfig {
        timeout: config.provider_timeout,
        ..CoinGeckoConfig::default()
    };
    if let Some(base_url) = &config.coingecko_base_url {
        provider_config.base_url = base_url.clone();
    }
    let provider = Arc::new(CoinGeckoProvider::with_config(provider_config));
    let market_data = Arc::new(MarketDataClient::new(provider));
    tracing::info!("Using market data provider {}", market_data.provider_id());

    Ok(Arc::new(AppState::new(engine_config, market_data)))
}
