//! Clock ticker background task

use std::sync::Arc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use crate::state::CountdownApp;

/// Background task that refreshes the component's current time once per tick
pub async fn clock_ticker_task(app: Arc<CountdownApp>) {
    info!("Starting clock ticker ({:?} period)", app.timings.tick);

    let mut interval = interval(app.timings.tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        if let Err(e) = app.tick() {
            error!("Failed to update current time: {}", e);
        }
    }
}
