//! Background scheduler for periodic price updates.
//!
//! Enabled by `PT_UPDATE_INTERVAL_SECS`; each tick runs one update cycle.

use std::sync::Arc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{info, warn};

use crate::main_lib::AppState;

/// Initial delay before the first update (lets the server finish starting)
const INITIAL_DELAY_SECS: u64 = 10;

/// Starts the background price update scheduler.
pub fn start_price_update_scheduler(state: Arc<AppState>, period: Duration) {
    tokio::spawn(async move {
        info!("Price update scheduler started ({}s interval)", period.as_secs());

        tokio::time::sleep(Duration::from_secs(INITIAL_DELAY_SECS)).await;

        // First tick is immediate
        let mut update_interval = interval(period);
        update_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            update_interval.tick().await;
            run_scheduled_update(&state).await;
        }
    });
}

/// Runs a single scheduled update cycle.
async fn run_scheduled_update(state: &Arc<AppState>) {
    info!("Running scheduled price update...");

    match state.price_service.update_prices().await {
        Ok(summary) => info!(
            "Scheduled price update completed: {} accepted, {} rejected, {} missing",
            summary.accepted, summary.rejected, summary.missing
        ),
        Err(e) => warn!("Scheduled price update failed: {}", e),
    }
}
