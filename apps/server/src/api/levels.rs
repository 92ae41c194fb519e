use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use coinfolio_core::portfolio::{
    allocation::calculate_total_value,
    levels::{LevelProgress, PortfolioLevel},
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LevelsResponse {
    levels: Vec<PortfolioLevel>,
    total_value: f64,
    progress: LevelProgress,
    benefits: Vec<String>,
}

async fn get_levels(State(state): State<Arc<AppState>>) -> ApiResult<Json<LevelsResponse>> {
    let holdings = state.holdings_service.get_holdings().await;
    let total_value = calculate_total_value(&holdings);

    let table = state.engine.level_table();
    let progress = table.progress(total_value);
    let benefits = table.benefits(&progress.current);

    Ok(Json(LevelsResponse {
        levels: table.levels().to_vec(),
        total_value,
        progress,
        benefits,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/levels", get(get_levels))
}
