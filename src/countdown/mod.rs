//! Countdown arithmetic
//!
//! Pure functions over wall-clock instants: the remaining-time projection and
//! the target resolver.

pub mod calculator;
pub mod resolver;

// Re-export main functions
pub use calculator::{compute, format_time, RemainingDuration};
pub use resolver::{resolve_target, today_at};
