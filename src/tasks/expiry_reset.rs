//! Delayed return to the picker after a countdown expires

use std::{sync::Arc, time::Duration};
use tokio::time::sleep;
use tracing::error;

use crate::state::CountdownApp;

/// One-shot task that resets the component after `delay`
pub async fn expiry_reset_task(app: Arc<CountdownApp>, delay: Duration) {
    sleep(delay).await;

    if let Err(e) = app.reset_after_expiry() {
        error!("Failed to reset countdown: {}", e);
    }
}
