//! Background scheduler for the market snapshot and holding prices.
//!
//! Polls on a fixed interval; the first tick fires immediately so the server
//! replaces the fallback snapshot right after startup.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::main_lib::AppState;

/// Starts the market refresh scheduler. Aborting the returned handle stops
/// polling.
pub fn start_market_refresh_scheduler(state: Arc<AppState>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Market refresh scheduler started ({}s interval)", every.as_secs());

        let mut refresh_interval = interval(every);
        refresh_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            refresh_interval.tick().await;
            run_scheduled_refresh(&state).await;
        }
    })
}

/// Runs a single refresh: the market snapshot first, then holding prices.
pub async fn run_scheduled_refresh(state: &AppState) {
    debug!("Running scheduled market refresh...");

    let snapshot = state.market_snapshot_service.refresh().await;
    let repriced = state.holdings_service.refresh_prices().await;

    info!(
        "Scheduled market refresh completed: dominance {:.2}%{}, {} holding(s) repriced",
        snapshot.btc_dominance,
        if snapshot.is_fallback { " (fallback)" } else { "" },
        repriced
    );
}
