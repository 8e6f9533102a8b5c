//! Countdown Timer - count down to a picked clock time
//!
//! This library provides the countdown component: a clock ticker, the
//! remaining-time calculator, the target resolver and the URL parameter
//! parser, plus a terminal renderer for the `countdown` binary.

pub mod clock;
pub mod config;
pub mod countdown;
pub mod errors;
pub mod params;
pub mod render;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use clock::{AnchoredClock, Clock, SystemClock};
pub use config::{Config, Timings};
pub use errors::{AppError, ErrorKind, ValidationError};
pub use params::Location;
pub use state::{CountdownApp, MountHandle, UiMode, ViewSnapshot};
pub use utils::signals::shutdown_signal;
