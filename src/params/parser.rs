//! Query parameter parsing
//!
//! Four mutually exclusive shapes are recognised, checked in this order:
//! `duration`, `time`, `hour` + `minute`, `hour` alone. The first one present
//! decides the outcome; the rest are ignored.

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use tracing::debug;
use url::Url;

use crate::{
    config::{DEFAULT_PICKER_OFFSET_MINUTES, MAX_DURATION_MINUTES},
    countdown::resolve_target,
    errors::ValidationError,
};

/// Query keys the parser understands
pub const RECOGNIZED_KEYS: [&str; 4] = ["duration", "time", "hour", "minute"];

/// Raw values of the recognised keys. Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub duration: Option<String>,
    pub time: Option<String>,
    pub hour: Option<String>,
    pub minute: Option<String>,
}

impl QueryParams {
    /// Collect the first non-empty value of each recognised key
    pub fn from_url(url: &Url) -> Self {
        let mut params = Self::default();

        for (key, value) in url.query_pairs() {
            if value.is_empty() {
                continue;
            }
            let slot = match &*key {
                "duration" => &mut params.duration,
                "time" => &mut params.time,
                "hour" => &mut params.hour,
                "minute" => &mut params.minute,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        params
    }

    /// Check if no recognised key carries a value
    pub fn is_empty(&self) -> bool {
        self.duration.is_none() && self.time.is_none() && self.hour.is_none() && self.minute.is_none()
    }
}

/// A validated timer request taken from the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerRequest {
    /// Count down this many minutes from now
    Duration { minutes: i64 },
    /// `time=HH:MM`
    Time { hour: u32, minute: u32 },
    /// `hour=H&minute=M`
    HourMinute { hour: u32, minute: u32 },
    /// `hour=H`; the minute depends on the current time
    Hour { hour: u32 },
}

impl TimerRequest {
    /// Turn the request into an absolute target strictly after `now`.
    ///
    /// Clock-time requests always roll to tomorrow when today's occurrence
    /// has already passed.
    pub fn resolve(&self, now: NaiveDateTime) -> Result<NaiveDateTime, ValidationError> {
        match *self {
            TimerRequest::Duration { minutes } => now
                .checked_add_signed(TimeDelta::minutes(minutes))
                .ok_or(ValidationError::DurationTooLarge(minutes)),
            TimerRequest::Time { hour, minute } => resolve_target(hour, minute, now)
                .ok_or_else(|| ValidationError::InvalidTimeValue(format!("{hour}:{minute:02}"))),
            TimerRequest::HourMinute { hour, minute } => resolve_target(hour, minute, now)
                .ok_or_else(|| ValidationError::MinuteOutOfRange(minute.to_string())),
            TimerRequest::Hour { hour } => {
                let minute = contextual_minute(hour, now);
                debug!("Hour-only request for {}, using minute {}", hour, minute);
                resolve_target(hour, minute, now)
                    .ok_or_else(|| ValidationError::HourOutOfRange(hour.to_string()))
            }
        }
    }
}

/// Pick the request shape with the highest precedence and validate it.
///
/// `Ok(None)` means no recognised parameter was supplied.
pub fn parse_request(params: &QueryParams) -> Result<Option<TimerRequest>, ValidationError> {
    if let Some(raw) = &params.duration {
        return parse_duration(raw).map(Some);
    }

    if let Some(raw) = &params.time {
        let (hour, minute) = parse_clock_time(raw)?;
        return Ok(Some(TimerRequest::Time { hour, minute }));
    }

    match (&params.hour, &params.minute) {
        (Some(hour), Some(minute)) => {
            let hour = parse_hour(hour)?;
            let minute = parse_minute(minute)?;
            Ok(Some(TimerRequest::HourMinute { hour, minute }))
        }
        (Some(hour), None) => {
            let hour = parse_hour(hour)?;
            Ok(Some(TimerRequest::Hour { hour }))
        }
        _ => Ok(None),
    }
}

/// Parse and resolve in one step
pub fn target_from_params(
    params: &QueryParams,
    now: NaiveDateTime,
) -> Result<Option<NaiveDateTime>, ValidationError> {
    match parse_request(params)? {
        Some(request) => request.resolve(now).map(Some),
        None => Ok(None),
    }
}

/// Minute used when only an hour is given: the default picker offset's minute
/// for the current hour, otherwise the top of the hour.
pub fn contextual_minute(hour: u32, now: NaiveDateTime) -> u32 {
    if hour == now.hour() {
        (now + TimeDelta::minutes(DEFAULT_PICKER_OFFSET_MINUTES)).minute()
    } else {
        0
    }
}

fn parse_duration(raw: &str) -> Result<TimerRequest, ValidationError> {
    let minutes = parse_int(raw).ok_or_else(|| ValidationError::InvalidDuration(raw.to_string()))?;

    if minutes <= 0 {
        return Err(ValidationError::InvalidDuration(raw.to_string()));
    }
    if minutes > MAX_DURATION_MINUTES {
        return Err(ValidationError::DurationTooLarge(minutes));
    }

    Ok(TimerRequest::Duration { minutes })
}

fn parse_clock_time(raw: &str) -> Result<(u32, u32), ValidationError> {
    let (hour, minute) = match_clock_pattern(raw)
        .ok_or_else(|| ValidationError::MalformedTimeFormat(raw.to_string()))?;

    // Both parts are 1-2 ASCII digits, so these parses cannot fail
    let hour: u32 = hour.parse().unwrap_or(u32::MAX);
    let minute: u32 = minute.parse().unwrap_or(u32::MAX);

    if hour > 23 || minute > 59 {
        return Err(ValidationError::InvalidTimeValue(raw.to_string()));
    }

    Ok((hour, minute))
}

/// Match `\d{1,2}:\d{2}` against the whole input
fn match_clock_pattern(raw: &str) -> Option<(&str, &str)> {
    let (hour, minute) = raw.split_once(':')?;
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if (1..=2).contains(&hour.len()) && minute.len() == 2 && digits(hour) && digits(minute) {
        Some((hour, minute))
    } else {
        None
    }
}

fn parse_hour(raw: &str) -> Result<u32, ValidationError> {
    parse_in_range(raw, 23).ok_or_else(|| ValidationError::HourOutOfRange(raw.to_string()))
}

fn parse_minute(raw: &str) -> Result<u32, ValidationError> {
    parse_in_range(raw, 59).ok_or_else(|| ValidationError::MinuteOutOfRange(raw.to_string()))
}

/// Parse an integer in `0..=max`
pub(crate) fn parse_in_range(raw: &str, max: u32) -> Option<u32> {
    parse_int(raw)
        .filter(|value| (0..=i64::from(max)).contains(value))
        .and_then(|value| u32::try_from(value).ok())
}

fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Parse the leading integer of a keystroke-level input in `0..=max`.
///
/// Leading whitespace is skipped and anything after the digits is ignored,
/// so `"4.5"` reads as 4 and `"12abc"` as 12.
pub(crate) fn parse_leading_in_range(raw: &str, max: u32) -> Option<u32> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return None;
    }
    parse_in_range(&trimmed[..sign_len + digits_len], max)
}
