//! Settings module - user portfolio settings and the engine configuration.

mod engine_config;
mod settings_model;
mod settings_service;

pub use engine_config::EngineConfig;
pub use settings_model::{PortfolioSettings, RiskTolerance, SettingsUpdate};
pub use settings_service::{SettingsService, SettingsServiceTrait};
