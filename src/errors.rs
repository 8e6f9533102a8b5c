//! Error types
//!
//! Validation failures are user-facing: their `Display` output is the toast
//! message shown to the user. `AppError` covers the few infrastructure faults
//! that can happen around the component itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::MAX_DURATION_MINUTES;

/// Broad class of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    MalformedTimeFormat,
    OutOfRangeValue,
    DurationTooLarge,
    PastTimeSelected,
}

/// A rejected user request. Never fatal; surfaced as a single toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid duration \"{0}\". Please use a positive number of minutes.")]
    InvalidDuration(String),

    #[error("Duration of {0} minutes is too long. The maximum is {max} minutes (24 hours).", max = MAX_DURATION_MINUTES)]
    DurationTooLarge(i64),

    #[error("Invalid time format \"{0}\". Please use HH:MM (e.g. 09:30).")]
    MalformedTimeFormat(String),

    #[error("Invalid time \"{0}\". Hours must be 0-23 and minutes 0-59.")]
    InvalidTimeValue(String),

    #[error("Invalid hour \"{0}\". Hours must be between 0 and 23.")]
    HourOutOfRange(String),

    #[error("Invalid minute \"{0}\". Minutes must be between 0 and 59.")]
    MinuteOutOfRange(String),

    #[error("The selected time {hour:02}:{minute:02} is in the past. Please pick a future time.")]
    PastTimeSelected { hour: u32, minute: u32 },
}

impl ValidationError {
    /// Classify this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidDuration(_)
            | ValidationError::HourOutOfRange(_)
            | ValidationError::MinuteOutOfRange(_) => ErrorKind::OutOfRangeValue,
            ValidationError::DurationTooLarge(_) => ErrorKind::DurationTooLarge,
            ValidationError::MalformedTimeFormat(_) | ValidationError::InvalidTimeValue(_) => {
                ErrorKind::MalformedTimeFormat
            }
            ValidationError::PastTimeSelected { .. } => ErrorKind::PastTimeSelected,
        }
    }
}

/// Faults outside of user input
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to lock component state: {0}")]
    LockPoisoned(String),

    #[error("Invalid location \"{input}\": {source}")]
    InvalidLocation {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to register signal handler: {0}")]
    Signals(#[from] std::io::Error),
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        AppError::LockPoisoned(e.to_string())
    }
}
