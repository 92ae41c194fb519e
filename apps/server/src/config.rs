use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use coinfolio_core::constants::DEFAULT_MARKET_REFRESH_INTERVAL;

pub struct Config {
    pub listen_addr: SocketAddr,
    /// CoinGecko API root; the provider default when unset
    pub coingecko_base_url: Option<String>,
    pub cors_allow: Vec<String>,
    /// Timeout for a single market data request
    pub provider_timeout: Duration,
    /// Timeout for a whole API request
    pub request_timeout: Duration,
    pub refresh_interval: Duration,
    /// Optional JSON file overriding the built-in engine configuration
    pub engine_config_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("CF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid CF_LISTEN_ADDR")?;
        let coingecko_base_url = non_empty_var("CF_COINGECKO_BASE_URL");
        let cors_allow = std::env::var("CF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let provider_timeout_ms: u64 = std::env::var("CF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .unwrap_or(5000);
        let request_timeout_ms: u64 = std::env::var("CF_HTTP_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let refresh_interval = match non_empty_var("CF_REFRESH_INTERVAL_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .context("Invalid CF_REFRESH_INTERVAL_SECS")?;
                if secs == 0 {
                    anyhow::bail!("CF_REFRESH_INTERVAL_SECS must be positive");
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_MARKET_REFRESH_INTERVAL,
        };
        let engine_config_path = non_empty_var("CF_ENGINE_CONFIG").map(PathBuf::from);

        Ok(Self {
            listen_addr,
            coingecko_base_url,
            cors_allow,
            provider_timeout: Duration::from_millis(provider_timeout_ms),
            request_timeout: Duration::from_millis(request_timeout_ms),
            refresh_interval,
            engine_config_path,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            coingecko_base_url: None,
            cors_allow: vec!["*".to_string()],
            provider_timeout: Duration::from_millis(5000),
            request_timeout: Duration::from_millis(30000),
            refresh_interval: DEFAULT_MARKET_REFRESH_INTERVAL,
            engine_config_path: None,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
