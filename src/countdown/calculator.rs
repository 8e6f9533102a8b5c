//! Remaining-time projection

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const MS_PER_HOUR: i64 = 60 * 60 * 1000;
const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_SECOND: i64 = 1000;

/// Time left until the target, split into display fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingDuration {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// Raw difference in milliseconds, always positive
    pub total_ms: i64,
}

impl fmt::Display for RemainingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            format_time(self.hours),
            format_time(self.minutes),
            format_time(self.seconds)
        )
    }
}

/// Derive the remaining duration from a target and the current time.
///
/// Returns `None` when there is no target or it is not in the future. The
/// caller decides what expiry means; this function has no side effects.
pub fn compute(target: Option<NaiveDateTime>, current: NaiveDateTime) -> Option<RemainingDuration> {
    let target = target?;
    let diff = (target - current).num_milliseconds();

    if diff <= 0 {
        return None;
    }

    Some(RemainingDuration {
        hours: diff / MS_PER_HOUR,
        minutes: (diff % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (diff % MS_PER_MINUTE) / MS_PER_SECOND,
        total_ms: diff,
    })
}

/// Zero-pad a clock field to two digits
pub fn format_time(value: i64) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn no_target_means_no_countdown() {
        assert_eq!(compute(None, at(10, 0, 0)), None);
    }

    #[test]
    fn past_or_equal_target_is_expired() {
        assert_eq!(compute(Some(at(10, 0, 0)), at(10, 0, 0)), None);
        assert_eq!(compute(Some(at(9, 59, 59)), at(10, 0, 0)), None);
    }

    #[test]
    fn splits_difference_into_fields() {
        let remaining = compute(Some(at(12, 34, 56)), at(10, 0, 0)).unwrap();
        assert_eq!(remaining.hours, 2);
        assert_eq!(remaining.minutes, 34);
        assert_eq!(remaining.seconds, 56);
        assert_eq!(remaining.total_ms, (2 * 3600 + 34 * 60 + 56) * 1000);
        assert_eq!(remaining.to_string(), "02:34:56");
    }

    #[test]
    fn sub_second_remainder_floors_to_zero() {
        let current = at(10, 0, 0);
        let target = current + TimeDelta::milliseconds(999);
        let remaining = compute(Some(target), current).unwrap();

        assert_eq!((remaining.hours, remaining.minutes, remaining.seconds), (0, 0, 0));
        assert_eq!(remaining.total_ms, 999);
    }

    #[test]
    fn fields_never_exceed_total() {
        let current = at(0, 0, 0);
        for ms in [1, 999, 1000, 59_999, 60_000, 3_599_999, 3_600_000, 86_399_999] {
            let remaining = compute(Some(current + TimeDelta::milliseconds(ms)), current).unwrap();
            let floor = remaining.hours * MS_PER_HOUR
                + remaining.minutes * MS_PER_MINUTE
                + remaining.seconds * MS_PER_SECOND;
            assert_eq!(remaining.total_ms, ms);
            assert!(floor <= ms && ms < floor + 1000, "ms={ms}");
        }
    }

    #[test]
    fn format_time_pads() {
        assert_eq!(format_time(0), "00");
        assert_eq!(format_time(7), "07");
        assert_eq!(format_time(42), "42");
    }
}
