use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use coinfolio_core::market_data::MarketSnapshot;

async fn get_market(State(state): State<Arc<AppState>>) -> ApiResult<Json<MarketSnapshot>> {
    Ok(Json(state.market_snapshot_service.current().await))
}

async fn refresh_market(State(state): State<Arc<AppState>>) -> ApiResult<Json<MarketSnapshot>> {
    Ok(Json(state.market_snapshot_service.refresh().await))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/market", get(get_market))
        .route("/market/refresh", post(refresh_market))
}
