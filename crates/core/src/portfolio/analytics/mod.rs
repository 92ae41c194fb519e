//! Derived portfolio metrics: per-category performance, ROI summary,
//! volatility and diversification.

mod analytics_model;
mod analytics_service;

pub use analytics_model::{CategoryPerformance, PortfolioAnalytics, PerformerEntry, RoiSummary};
pub use analytics_service::{
    category_performance, compute_analytics, diversification_score, roi_summary, volatility,
};
