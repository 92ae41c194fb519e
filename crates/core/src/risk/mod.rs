//! Heuristic risk scoring with named, versioned weight sets.

mod risk_model;
mod risk_service;

pub use risk_model::{
    DiversificationDiscount, RiskInput, RiskScore, RiskWeightSet, RiskWeights, TrendMultipliers,
    ANALYTICS_V1, OVERVIEW_V1,
};
pub use risk_service::{score, score_all, score_risk};
