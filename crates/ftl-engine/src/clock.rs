//! Wall-clock times of day and the freeform time parser.
//!
//! A [`ClockTime`] has no date: it is an hour and a minute on an implicit
//! single day. Ordering across midnight is the job of
//! [`Instant`](crate::timeline::Instant), never of `ClockTime` itself.
//!
//! # Accepted input
//!
//! - `HH:MM` / `H:MM` — colon separated, 24-hour (`"08:00"`, `"8:05"`, `"23:59"`)
//! - `HHMM` / `HMM` / `MM` / `M` — a digit string left-padded to four digits
//!   (`"0800"`, `"800"` → 08:00, `"45"` → 00:45)
//!
//! Surrounding whitespace is ignored. Anything else is rejected with
//! [`FtlError::InvalidTimeFormat`].

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Serialize, Serializer};

use crate::error::{FtlError, Result};
use crate::limits::MINUTES_PER_DAY;

/// A time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Midnight, 00:00.
    pub const MIDNIGHT: ClockTime = ClockTime(NaiveTime::MIN);

    /// Build a clock time, or `None` if `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    /// Build a clock time from any minute count, wrapping modulo one day.
    pub fn from_minutes_of_day(minutes: i64) -> Self {
        let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
        ClockTime(NaiveTime::MIN + TimeDelta::minutes(wrapped))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since 00:00 (0..1440).
    pub fn minutes_from_midnight(&self) -> i64 {
        i64::from(self.hour()) * 60 + i64::from(self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = FtlError;

    fn from_str(s: &str) -> Result<Self> {
        parse_time(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a time of day from freeform text.
///
/// # Errors
///
/// Returns [`FtlError::InvalidTimeFormat`] for empty input, non-numeric
/// content, an hour above 23 or a minute above 59. Callers that need to tell
/// "nothing entered yet" apart from "entered wrongly" should use
/// [`parse_time_input`].
///
/// # Examples
///
/// ```
/// use ftl_engine::clock::parse_time;
///
/// assert_eq!(parse_time("800").unwrap().to_string(), "08:00");
/// assert_eq!(parse_time(" 17:45 ").unwrap().to_string(), "17:45");
/// assert!(parse_time("25:00").is_err());
/// ```
pub fn parse_time(text: &str) -> Result<ClockTime> {
    let s = text.trim();
    if s.is_empty() {
        return Err(invalid(text, "empty input"));
    }

    let (hours, minutes) = match s.split_once(':') {
        Some((h, m)) => {
            if h.is_empty() || h.len() > 2 || m.len() != 2 {
                return Err(invalid(text, "expected HH:MM"));
            }
            (h, m)
        }
        None => {
            if s.len() > 4 {
                return Err(invalid(text, "expected at most four digits"));
            }
            if !is_digits(s) {
                return Err(invalid(text, "non-numeric content"));
            }
            let padded = format!("{s:0>4}");
            return to_clock_time(text, &padded[..2], &padded[2..]);
        }
    };

    to_clock_time(text, hours, minutes)
}

/// Parse a time field that may legitimately be left blank.
///
/// Returns `Ok(None)` for empty or whitespace-only input so the caller can
/// skip computation instead of reporting an error.
///
/// # Errors
///
/// Returns [`FtlError::InvalidTimeFormat`] when non-blank input fails
/// [`parse_time`].
pub fn parse_time_input(text: &str) -> Result<Option<ClockTime>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_time(text).map(Some)
}

fn to_clock_time(original: &str, hours: &str, minutes: &str) -> Result<ClockTime> {
    if !is_digits(hours) || !is_digits(minutes) {
        return Err(invalid(original, "non-numeric content"));
    }
    let h: u32 = hours
        .parse()
        .map_err(|_| invalid(original, "invalid hour"))?;
    let m: u32 = minutes
        .parse()
        .map_err(|_| invalid(original, "invalid minute"))?;

    if h > 23 {
        return Err(invalid(original, "hour must be 0-23"));
    }
    if m > 59 {
        return Err(invalid(original, "minute must be 0-59"));
    }
    ClockTime::new(h, m).ok_or_else(|| invalid(original, "not a valid time of day"))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn invalid(text: &str, reason: &str) -> FtlError {
    FtlError::InvalidTimeFormat(format!("'{text}': {reason}"))
}
