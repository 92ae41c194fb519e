use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use coinfolio_core::PortfolioReport;

/// Evaluates the current holdings against the latest market snapshot and the
/// user's settings.
pub(crate) async fn build_report(state: &AppState) -> PortfolioReport {
    let (holdings, market, settings) = tokio::join!(
        state.holdings_service.get_holdings(),
        state.market_snapshot_service.current(),
        state.settings_service.get_settings(),
    );
    state.engine.evaluate(&holdings, &market, &settings)
}

async fn get_portfolio(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioReport>> {
    Ok(Json(build_report(&state).await))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio", get(get_portfolio))
}
