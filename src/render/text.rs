//! Plain-text view

use crate::{
    countdown::format_time,
    state::{UiMode, ViewSnapshot},
};

const HELP: &str = "\
URL parameters:
  ?duration=30          count down 30 minutes (1-1440)
  ?time=14:30           count down to 14:30 (tomorrow if already past)
  ?hour=14&minute=30    same as time=14:30
  ?hour=14              count down to 14:00, or 15 minutes ahead within the current hour";

/// Render a snapshot as human-readable lines
pub fn render_text(snapshot: &ViewSnapshot) -> String {
    let mut out = match (snapshot.mode, snapshot.remaining) {
        (UiMode::ShowingCountdown, Some(remaining)) => format!("Time remaining: {}", remaining),
        (UiMode::ShowingCountdown, None) => "Time's up!".to_string(),
        (UiMode::ShowingPicker, _) => format!(
            "Pick a time: {}:{}",
            format_time(i64::from(snapshot.picker.hour)),
            format_time(i64::from(snapshot.picker.minute))
        ),
    };

    if let Some(target) = snapshot.target_time {
        out.push_str(&format!(" (until {})", target.format("%Y-%m-%d %H:%M")));
    }

    if let Some(toast) = snapshot.toast.as_ref().filter(|t| t.visible) {
        out.push_str(&format!("\n[!] {}", toast.message));
    }

    if snapshot.show_help {
        out.push('\n');
        out.push_str(HELP);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        countdown::compute,
        state::{PickerSelection, ToastNotice},
    };
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn picker_snapshot() -> ViewSnapshot {
        ViewSnapshot {
            mode: UiMode::ShowingPicker,
            current_time: at(9, 0, 0),
            target_time: None,
            remaining: None,
            picker: PickerSelection { hour: 9, minute: 5 },
            toast: None,
            show_help: false,
        }
    }

    #[test]
    fn picker_shows_padded_selection() {
        assert_eq!(render_text(&picker_snapshot()), "Pick a time: 09:05");
    }

    #[test]
    fn countdown_shows_remaining_and_target() {
        let target = at(10, 30, 0);
        let snapshot = ViewSnapshot {
            mode: UiMode::ShowingCountdown,
            target_time: Some(target),
            remaining: compute(Some(target), at(9, 0, 0)),
            ..picker_snapshot()
        };
        assert_eq!(render_text(&snapshot), "Time remaining: 01:30:00 (until 2024-01-01 10:30)");
    }

    #[test]
    fn hidden_toasts_are_not_rendered() {
        let mut snapshot = picker_snapshot();
        snapshot.toast = Some(ToastNotice::new("Nope".to_string()));
        assert!(render_text(&snapshot).ends_with("[!] Nope"));

        snapshot.toast = Some(ToastNotice { message: "Nope".to_string(), visible: false });
        assert!(!render_text(&snapshot).contains("Nope"));
    }
}
