//! Background tasks module
//!
//! This module contains the timer tasks owned by the countdown component.

pub mod clock_ticker;
pub mod expiry_reset;
pub mod toast_timer;

// Re-export main functions
pub use clock_ticker::clock_ticker_task;
pub use expiry_reset::expiry_reset_task;
pub use toast_timer::toast_timer_task;
