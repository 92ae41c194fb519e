use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use coinfolio_core::portfolio::holdings::{Holding, NewHolding};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AmountUpdate {
    amount: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshPricesResponse {
    updated: usize,
}

async fn get_holdings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Holding>>> {
    Ok(Json(state.holdings_service.get_holdings().await))
}

async fn add_holding(
    State(state): State<Arc<AppState>>,
    Json(new_holding): Json<NewHolding>,
) -> ApiResult<(StatusCode, Json<Holding>)> {
    let holding = state.holdings_service.add_holding(new_holding).await?;
    Ok((StatusCode::CREATED, Json(holding)))
}

async fn update_holding(
    Path(token_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<AmountUpdate>,
) -> ApiResult<Json<Holding>> {
    let holding = state
        .holdings_service
        .update_amount(&token_id, update.amount)
        .await?;
    Ok(Json(holding))
}

async fn delete_holding(
    Path(token_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.holdings_service.remove_holding(&token_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn refresh_prices(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RefreshPricesResponse>> {
    let updated = state.holdings_service.refresh_prices().await;
    Ok(Json(RefreshPricesResponse { updated }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/holdings", get(get_holdings).post(add_holding))
        .route("/holdings/refresh-prices", post(refresh_prices))
        .route(
            "/holdings/{token_id}",
            put(update_holding).delete(delete_holding),
        )
}
