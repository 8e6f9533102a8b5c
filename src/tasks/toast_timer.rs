//! Toast auto-dismiss timers

use std::{sync::Arc, time::Duration};
use tokio::time::sleep;
use tracing::{debug, error};

use crate::state::CountdownApp;

/// Hide the toast after `visible`, then clear it after `fade`.
///
/// Both steps only apply while `generation` is still the current toast.
pub async fn toast_timer_task(
    app: Arc<CountdownApp>,
    generation: u64,
    visible: Duration,
    fade: Duration,
) {
    sleep(visible).await;
    debug!("Hiding toast {}", generation);
    if let Err(e) = app.hide_toast(generation) {
        error!("Failed to hide toast: {}", e);
        return;
    }

    sleep(fade).await;
    if let Err(e) = app.clear_toast(generation) {
        error!("Failed to clear toast: {}", e);
    }
}
