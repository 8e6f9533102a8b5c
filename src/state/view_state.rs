//! View-facing state structures

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::{config::DEFAULT_PICKER_OFFSET_MINUTES, countdown::RemainingDuration};

/// Which screen the component shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiMode {
    ShowingPicker,
    ShowingCountdown,
}

/// Time of day chosen in the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerSelection {
    pub hour: u32,
    pub minute: u32,
}

impl PickerSelection {
    /// The default selection: fifteen minutes from `now`
    pub fn default_from(now: NaiveDateTime) -> Self {
        let later = now + TimeDelta::minutes(DEFAULT_PICKER_OFFSET_MINUTES);
        Self {
            hour: later.hour(),
            minute: later.minute(),
        }
    }
}

/// A transient notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastNotice {
    pub message: String,
    pub visible: bool,
}

impl ToastNotice {
    /// Create a visible notice
    pub fn new(message: String) -> Self {
        Self {
            message,
            visible: true,
        }
    }
}

/// Everything a renderer needs, published after every state change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub mode: UiMode,
    pub current_time: NaiveDateTime,
    pub target_time: Option<NaiveDateTime>,
    pub remaining: Option<RemainingDuration>,
    pub picker: PickerSelection,
    pub toast: Option<ToastNotice>,
    pub show_help: bool,
}

impl ViewSnapshot {
    /// Check if a countdown has a target but no time left
    pub fn is_expired(&self) -> bool {
        self.target_time.is_some() && self.remaining.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn default_selection_wraps_past_midnight() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(23, 50, 12)
            .unwrap();
        assert_eq!(PickerSelection::default_from(now), PickerSelection { hour: 0, minute: 5 });
    }

    #[test]
    fn mode_serializes_in_snake_case() {
        let json = serde_json::to_string(&UiMode::ShowingCountdown).unwrap();
        assert_eq!(json, "\"showing_countdown\"");
    }
}
