//! Turning a time of day into an absolute target instant

use chrono::{Days, NaiveDateTime, NaiveTime};

/// `now`'s date at `hour:minute:00.000`.
///
/// Returns `None` for an hour or minute outside the clock range.
pub fn today_at(hour: u32, minute: u32, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(now.date().and_time(time))
}

/// The next occurrence of `hour:minute` strictly after `now`.
///
/// Same-day candidates that are not in the future roll to the same wall-clock
/// time on the following calendar day.
pub fn resolve_target(hour: u32, minute: u32, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let candidate = today_at(hour, minute, now)?;

    if candidate > now {
        return Some(candidate);
    }

    candidate.checked_add_days(Days::new(1))
}
