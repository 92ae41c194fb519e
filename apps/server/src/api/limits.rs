use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use coinfolio_core::{
    errors::{Error as CoreError, ValidationError},
    limits::{builtin_presets, create_custom_preset, preset_for_dominance, LimitPreset, LimitProfile},
    Allocation,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchQuery {
    /// Defaults to the current market snapshot's dominance
    btc_dominance: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewCustomPreset {
    name: String,
    #[serde(default)]
    description: String,
    allocation: Allocation,
    category_limits: LimitProfile,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LimitValidation {
    valid: bool,
    errors: Vec<String>,
}

async fn list_presets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<LimitPreset>>> {
    let mut presets = builtin_presets();
    presets.extend(state.custom_presets.read().await.iter().cloned());
    Ok(Json(presets))
}

async fn match_preset(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MatchQuery>,
) -> ApiResult<Json<LimitPreset>> {
    let dominance = match q.btc_dominance {
        Some(dominance) => dominance,
        None => state.market_snapshot_service.current().await.btc_dominance,
    };
    Ok(Json(preset_for_dominance(dominance)))
}

async fn create_preset(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewCustomPreset>,
) -> ApiResult<(StatusCode, Json<LimitPreset>)> {
    let preset = create_custom_preset(
        &payload.name,
        &payload.description,
        payload.allocation,
        payload.category_limits,
    )?;
    state.custom_presets.write().await.push(preset.clone());
    tracing::info!("Created custom limit preset {} ({})", preset.id, preset.name);
    Ok((StatusCode::CREATED, Json(preset)))
}

async fn validate_limits(Json(profile): Json<LimitProfile>) -> ApiResult<Json<LimitValidation>> {
    let errors = match profile.validate() {
        Ok(()) => Vec::new(),
        Err(CoreError::Validation(ValidationError::InvalidLimits(problems))) => problems,
        Err(e) => return Err(e.into()),
    };
    Ok(Json(LimitValidation {
        valid: errors.is_empty(),
        errors,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/limits/presets", get(list_presets))
        .route("/limits/presets/match", get(match_preset))
        .route("/limits/presets/custom", post(create_preset))
        .route("/limits/validate", post(validate_limits))
}
