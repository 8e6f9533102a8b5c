//! Wall-clock sources
//!
//! The component never reads the system time directly; it asks a [`Clock`].
//! Instants are host-local wall-clock values without a zone attached.

use chrono::{Local, NaiveDateTime, TimeDelta};
use tokio::time::Instant;

/// Source of the current local wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The host's local clock. Across a DST change the zone-less values jump,
/// so remaining times are off by the shift until the target passes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to a wall-clock start value that advances with tokio's
/// monotonic time, so it follows `tokio::time::pause`/`advance` in tests.
#[derive(Debug, Clone, Copy)]
pub struct AnchoredClock {
    wall_origin: NaiveDateTime,
    origin: Instant,
}

impl AnchoredClock {
    pub fn new(wall_origin: NaiveDateTime) -> Self {
        Self {
            wall_origin,
            origin: Instant::now(),
        }
    }
}

impl Clock for AnchoredClock {
    fn now(&self) -> NaiveDateTime {
        TimeDelta::from_std(self.origin.elapsed())
            .ok()
            .and_then(|elapsed| self.wall_origin.checked_add_signed(elapsed))
            .unwrap_or(NaiveDateTime::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn anchored_clock_follows_paused_time() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let clock = AnchoredClock::new(start);
        assert_eq!(clock.now(), start);

        tokio::time::advance(Duration::from_millis(1500)).await;
        assert_eq!(clock.now(), start + TimeDelta::milliseconds(1500));
    }
}
