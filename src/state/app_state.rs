//! The countdown component

use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{
    clock::Clock,
    config::Timings,
    countdown::{compute, today_at},
    errors::{AppError, ValidationError},
    params::{parser::parse_leading_in_range, target_from_params, Location},
    tasks::{clock_ticker_task, expiry_reset_task, toast_timer_task},
};

use super::{PickerSelection, ToastNotice, UiMode, ViewSnapshot};

/// Mutable state of the component. The UI mode is not stored; it follows
/// from whether a target is set.
#[derive(Debug)]
struct ComponentState {
    current_time: NaiveDateTime,
    target_time: Option<NaiveDateTime>,
    picker: PickerSelection,
    toast: Option<ToastNotice>,
    /// Bumped on every new toast so stale timers leave newer notices alone
    toast_generation: u64,
    show_help: bool,
    url_params_processed: bool,
    location: Location,
}

impl ComponentState {
    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            mode: if self.target_time.is_some() {
                UiMode::ShowingCountdown
            } else {
                UiMode::ShowingPicker
            },
            current_time: self.current_time,
            target_time: self.target_time,
            remaining: compute(self.target_time, self.current_time),
            picker: self.picker,
            toast: self.toast.clone(),
            show_help: self.show_help,
        }
    }
}

/// Timer tasks owned by the component
#[derive(Debug, Default)]
struct TimerHandles {
    ticker: Option<JoinHandle<()>>,
    pending_reset: Option<JoinHandle<()>>,
    toast: Option<JoinHandle<()>>,
}

impl TimerHandles {
    fn abort_all(&mut self) {
        for handle in [self.ticker.take(), self.pending_reset.take(), self.toast.take()]
            .into_iter()
            .flatten()
        {
            handle.abort();
        }
    }
}

/// Countdown component: picker, countdown and URL-parameter handling sharing
/// one piece of state.
pub struct CountdownApp {
    state: Mutex<ComponentState>,
    timers: Mutex<TimerHandles>,
    clock: Arc<dyn Clock>,
    pub timings: Timings,
    /// Channel for view updates
    snapshot_tx: watch::Sender<ViewSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    _snapshot_rx: watch::Receiver<ViewSnapshot>,
}

impl CountdownApp {
    /// Create a component showing the picker with its default selection
    pub fn new(clock: Arc<dyn Clock>, location: Location, timings: Timings) -> Self {
        let now = clock.now();
        let state = ComponentState {
            current_time: now,
            target_time: None,
            picker: PickerSelection::default_from(now),
            toast: None,
            toast_generation: 0,
            show_help: false,
            url_params_processed: false,
            location,
        };
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());

        Self {
            state: Mutex::new(state),
            timers: Mutex::new(TimerHandles::default()),
            clock,
            timings,
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Subscribe to view snapshots
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Get the current view snapshot
    pub fn snapshot(&self) -> Result<ViewSnapshot, AppError> {
        Ok(self.state.lock()?.snapshot())
    }

    /// Get the current location
    pub fn location(&self) -> Result<Location, AppError> {
        Ok(self.state.lock()?.location.clone())
    }

    /// Read URL parameters and start the clock ticker.
    ///
    /// The ticker runs until the returned handle is unmounted or dropped.
    pub fn mount(self: &Arc<Self>) -> Result<MountHandle, AppError> {
        info!("Mounting countdown component");
        self.process_url_params()?;

        let ticker = tokio::spawn(clock_ticker_task(Arc::clone(self)));
        if let Some(previous) = self.timers.lock()?.ticker.replace(ticker) {
            warn!("Component was already mounted, replacing ticker");
            previous.abort();
        }

        Ok(MountHandle {
            app: Arc::clone(self),
        })
    }

    /// Refresh the current time and arm the reset once an active countdown
    /// has run out.
    pub fn tick(self: &Arc<Self>) -> Result<(), AppError> {
        let now = self.clock.now();

        let mut state = self.state.lock()?;
        state.current_time = now;
        let snapshot = state.snapshot();
        drop(state);

        debug!("Tick at {}, remaining: {:?}", now, snapshot.remaining);
        let expired = snapshot.is_expired();
        self.publish(snapshot);

        if expired {
            let mut timers = self.timers.lock()?;
            if timers.pending_reset.is_none() {
                info!("Countdown finished, returning to picker in {:?}", self.timings.reset_delay);
                timers.pending_reset = Some(tokio::spawn(expiry_reset_task(
                    Arc::clone(self),
                    self.timings.reset_delay,
                )));
            }
        }

        Ok(())
    }

    /// Clear the countdown and return to the picker.
    ///
    /// The location is stripped of timer parameters before the URL latch is
    /// re-armed, so the follow-up parse has nothing left to re-trigger.
    ///
    /// A reset still pending from an expired countdown is cancelled, so it
    /// cannot clear a countdown started afterwards.
    pub fn reset(self: &Arc<Self>) -> Result<(), AppError> {
        self.clear_countdown()?;

        if let Some(pending) = self.timers.lock()?.pending_reset.take() {
            debug!("Cancelling pending expiry reset");
            pending.abort();
        }

        self.process_url_params()
    }

    /// Reset run by the expiry task itself. Its own handle is detached, not
    /// aborted.
    pub(crate) fn reset_after_expiry(self: &Arc<Self>) -> Result<(), AppError> {
        self.clear_countdown()?;

        // The target is already cleared, so a concurrent tick cannot re-arm
        drop(self.timers.lock()?.pending_reset.take());

        self.process_url_params()
    }

    fn clear_countdown(&self) -> Result<(), AppError> {
        let now = self.clock.now();
        {
            let mut state = self.state.lock()?;
            state.current_time = now;
            state.target_time = None;
            state.picker = PickerSelection::default_from(now);
            state.location.strip_timer_params();
            state.url_params_processed = false;
            let snapshot = state.snapshot();
            drop(state);
            self.publish(snapshot);
        }
        info!("Countdown reset, picker shown");
        Ok(())
    }

    /// Consume the URL parameters once per load/reset cycle
    pub fn process_url_params(self: &Arc<Self>) -> Result<(), AppError> {
        let now = self.clock.now();

        let rejected = {
            let mut state = self.state.lock()?;
            if state.url_params_processed {
                debug!("URL parameters already processed");
                return Ok(());
            }
            state.url_params_processed = true;

            if state.target_time.is_some() {
                debug!("Countdown already active, ignoring URL parameters");
                return Ok(());
            }

            let params = state.location.params();
            match target_from_params(&params, now) {
                Ok(Some(target)) => {
                    info!("Countdown started from URL parameters, target {}", target);
                    state.current_time = now;
                    state.target_time = Some(target);
                    let snapshot = state.snapshot();
                    drop(state);
                    self.publish(snapshot);
                    None
                }
                Ok(None) => {
                    debug!("No timer parameters in location");
                    None
                }
                Err(e) => Some(e),
            }
        };

        match rejected {
            Some(e) => self.reject(e),
            None => Ok(()),
        }
    }

    /// Start counting down to today's occurrence of the picked time.
    ///
    /// Unlike URL parameters, a selection that is not strictly in the future
    /// is rejected instead of rolling to tomorrow.
    pub fn start_countdown(self: &Arc<Self>) -> Result<(), AppError> {
        let now = self.clock.now();

        let rejected = {
            let mut state = self.state.lock()?;
            if state.target_time.is_some() {
                debug!("Countdown already running, ignoring start");
                return Ok(());
            }

            let PickerSelection { hour, minute } = state.picker;
            match today_at(hour, minute, now) {
                Some(target) if target > now => {
                    info!("Countdown started from picker, target {}", target);
                    state.current_time = now;
                    state.target_time = Some(target);
                    let snapshot = state.snapshot();
                    drop(state);
                    self.publish(snapshot);
                    None
                }
                _ => Some(ValidationError::PastTimeSelected { hour, minute }),
            }
        };

        match rejected {
            Some(e) => self.reject(e),
            None => Ok(()),
        }
    }

    /// Raw hour input; ignored unless it starts with an integer in 0-23
    pub fn on_hour_change(&self, raw: &str) -> Result<(), AppError> {
        self.update_picker(raw, 23, |picker, value| picker.hour = value)
    }

    /// Raw minute input; ignored unless it starts with an integer in 0-59
    pub fn on_minute_change(&self, raw: &str) -> Result<(), AppError> {
        self.update_picker(raw, 59, |picker, value| picker.minute = value)
    }

    fn update_picker<F>(&self, raw: &str, max: u32, updater: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut PickerSelection, u32),
    {
        let Some(value) = parse_leading_in_range(raw, max) else {
            debug!("Ignoring picker input {:?}", raw);
            return Ok(());
        };

        let mut state = self.state.lock()?;
        updater(&mut state.picker, value);
        let snapshot = state.snapshot();
        drop(state);

        self.publish(snapshot);
        Ok(())
    }

    /// Show or hide the help panel
    pub fn toggle_help(&self) -> Result<bool, AppError> {
        let mut state = self.state.lock()?;
        state.show_help = !state.show_help;
        let show_help = state.show_help;
        let snapshot = state.snapshot();
        drop(state);

        self.publish(snapshot);
        Ok(show_help)
    }

    /// Show a toast, replacing any notice still on screen together with its
    /// pending hide/clear timers.
    pub fn raise_toast(self: &Arc<Self>, message: String) -> Result<(), AppError> {
        let generation = {
            let mut state = self.state.lock()?;
            state.toast_generation += 1;
            state.toast = Some(ToastNotice::new(message));
            let generation = state.toast_generation;
            let snapshot = state.snapshot();
            drop(state);
            self.publish(snapshot);
            generation
        };

        let handle = tokio::spawn(toast_timer_task(
            Arc::clone(self),
            generation,
            self.timings.toast_visible,
            self.timings.toast_fade,
        ));
        if let Some(previous) = self.timers.lock()?.toast.replace(handle) {
            previous.abort();
        }

        Ok(())
    }

    /// Start the fade of the given toast, if it is still the current one
    pub fn hide_toast(&self, generation: u64) -> Result<(), AppError> {
        self.update_toast(generation, |toast| {
            if let Some(notice) = toast {
                notice.visible = false;
            }
        })
    }

    /// Remove the given toast, if it is still the current one
    pub fn clear_toast(&self, generation: u64) -> Result<(), AppError> {
        self.update_toast(generation, |toast| *toast = None)
    }

    fn update_toast<F>(&self, generation: u64, updater: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut Option<ToastNotice>),
    {
        let mut state = self.state.lock()?;
        if state.toast_generation != generation {
            debug!("Skipping stale toast timer (generation {})", generation);
            return Ok(());
        }

        updater(&mut state.toast);
        let snapshot = state.snapshot();
        drop(state);

        self.publish(snapshot);
        Ok(())
    }

    /// Abort the ticker, a pending reset and toast timers
    pub fn cancel_timers(&self) -> Result<(), AppError> {
        self.timers.lock()?.abort_all();
        info!("Component timers cancelled");
        Ok(())
    }

    fn reject(self: &Arc<Self>, error: ValidationError) -> Result<(), AppError> {
        warn!("Rejected timer request ({:?}): {}", error.kind(), error);
        self.raise_toast(error.to_string())
    }

    fn publish(&self, snapshot: ViewSnapshot) {
        if let Err(e) = self.snapshot_tx.send(snapshot) {
            warn!("Failed to send view update: {}", e);
        }
    }
}

/// Keeps the component mounted; dropping it tears the timers down
pub struct MountHandle {
    app: Arc<CountdownApp>,
}

impl MountHandle {
    pub fn app(&self) -> &Arc<CountdownApp> {
        &self.app
    }

    /// Tear down the component's timers
    pub fn unmount(self) {
        info!("Unmounting countdown component");
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        if let Err(e) = self.app.cancel_timers() {
            warn!("Failed to cancel timers on unmount: {}", e);
        }
    }
}
