use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{Mutex, RwLock};

use super::{MarketDataClientTrait, MarketSnapshot};

/// Holds the current market snapshot.
///
/// Starts from the fallback snapshot. Refreshes are serialised: a caller
/// arriving while a fetch is running waits for it and then fetches again.
pub struct MarketSnapshotService {
    client: Arc<dyn MarketDataClientTrait>,
    snapshot: RwLock<MarketSnapshot>,
    refresh_lock: Mutex<()>,
}

impl MarketSnapshotService {
    pub fn new(client: Arc<dyn MarketDataClientTrait>) -> Self {
        Self {
            client,
            snapshot: RwLock::new(MarketSnapshot::fallback()),
            refresh_lock: Mutex::new(()),
        }
    }

    pub async fn current(&self) -> MarketSnapshot {
        self.snapshot.read().await.clone()
    }

    /// Fetches a new snapshot and replaces the current one.
    ///
    /// When the fetch falls back to defaults, a previously fetched snapshot
    /// is kept instead.
    pub async fn refresh(&self) -> MarketSnapshot {
        let _guard = self.refresh_lock.lock().await;
        debug!("Refreshing market snapshot");

        let fresh = self.client.fetch_market_snapshot().await;
        let mut current = self.snapshot.write().await;

        if fresh.is_fallback && !current.is_fallback {
            warn!(
                "Market snapshot refresh failed, keeping snapshot from {}",
                current.fetched_at
            );
            return current.clone();
        }

        info!(
            "Market snapshot updated: BTC dominance {:.2}%, trend {:?}{}",
            fresh.btc_dominance,
            fresh.trend,
            if fresh.is_fallback { " (fallback)" } else { "" }
        );
        *current = fresh.clone();
        fresh
    }
}
