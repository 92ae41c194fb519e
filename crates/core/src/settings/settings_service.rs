use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::RwLock;

use crate::errors::Result;

use super::{EngineConfig, PortfolioSettings, SettingsUpdate};

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    async fn get_settings(&self) -> PortfolioSettings;

    /// Applies `update` if the merged settings validate; returns them.
    async fn update_settings(&self, update: &SettingsUpdate) -> Result<PortfolioSettings>;
}

/// In-memory settings store.
pub struct SettingsService {
    settings: RwLock<PortfolioSettings>,
}

impl SettingsService {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            settings: RwLock::new(PortfolioSettings::from_config(config)),
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    async fn get_settings(&self) -> PortfolioSettings {
        self.settings.read().await.clone()
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<PortfolioSettings> {
        let mut settings = self.settings.write().await;
        let merged = settings.merged(update);
        merged.validate()?;

        debug!("Settings update: {:?}", update);
        *settings = merged.clone();
        info!(
            "Portfolio settings updated (auto mode: {}, threshold: {})",
            merged.auto_mode, merged.rebalancing_threshold
        );
        Ok(merged)
    }
}
