//! The per-calculation duty timeline.
//!
//! Every calculation lays its times out on one axis: minutes since the
//! midnight that starts the reference day. An [`Instant`] on that axis knows
//! which day it falls on, so comparisons and arithmetic stay valid across
//! midnight where bare [`ClockTime`] values would not. A [`Duration`] is a
//! signed minute count between two instants.
//!
//! No system clock is consulted. When a calendar date is needed for display,
//! the caller supplies it explicitly via [`Instant::on_date`].

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::clock::ClockTime;
use crate::format::{format_duration, format_instant};
use crate::limits::MINUTES_PER_DAY;

// ── Duration ────────────────────────────────────────────────────────────────

/// A signed span of whole minutes. Never clamped; arithmetic saturates at
/// the ends of the `i64` range instead of overflowing.
///
/// Serialized as the plain minute count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    pub const fn from_minutes(minutes: i64) -> Self {
        Duration(minutes)
    }

    pub const fn from_hours(hours: i64) -> Self {
        Duration(hours.saturating_mul(60))
    }

    /// Convert fractional hours, rounding to the nearest whole minute.
    /// Values beyond the `i64` minute range saturate.
    pub fn from_hours_f64(hours: f64) -> Self {
        Duration((hours * 60.0).round() as i64)
    }

    /// Total length in minutes.
    pub const fn minutes(&self) -> i64 {
        self.0
    }

    pub fn as_hours_f64(&self) -> f64 {
        self.0 as f64 / 60.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Duration(self.0.saturating_abs())
    }

    /// The same span as a chrono delta, or `None` past chrono's range.
    pub fn to_time_delta(&self) -> Option<TimeDelta> {
        TimeDelta::try_minutes(self.0)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration(self.0.saturating_neg())
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, Add::add)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(*self))
    }
}

// ── Instant ─────────────────────────────────────────────────────────────────

/// A point on the duty timeline, in minutes since the reference midnight.
///
/// May be negative (the day before) or exceed one day (the days after).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Instant(i64);

impl Instant {
    /// The reference midnight itself.
    pub const REFERENCE: Instant = Instant(0);

    pub const fn from_minutes(minutes: i64) -> Self {
        Instant(minutes)
    }

    /// Place a clock time on the reference day (day offset 0).
    pub fn from_clock(time: ClockTime) -> Self {
        Instant(time.minutes_from_midnight())
    }

    /// The first occurrence of `time` that is not earlier than `not_before`.
    pub fn at_or_after(time: ClockTime, not_before: Instant) -> Self {
        let day_start = not_before.day_offset() * MINUTES_PER_DAY;
        let candidate = Instant(day_start.saturating_add(time.minutes_from_midnight()));
        if candidate < not_before {
            candidate + Duration(MINUTES_PER_DAY)
        } else {
            candidate
        }
    }

    /// The first occurrence of `time` strictly later than `after`.
    pub fn strictly_after(time: ClockTime, after: Instant) -> Self {
        let candidate = Instant::at_or_after(time, after);
        if candidate == after {
            candidate + Duration(MINUTES_PER_DAY)
        } else {
            candidate
        }
    }

    /// Minutes since the reference midnight.
    pub const fn minutes(&self) -> i64 {
        self.0
    }

    /// Whole days from the reference day (0 = same day, 1 = next day, -1 = day before).
    pub const fn day_offset(&self) -> i64 {
        self.0.div_euclid(MINUTES_PER_DAY)
    }

    /// The wall-clock time at this instant.
    pub fn clock(&self) -> ClockTime {
        ClockTime::from_minutes_of_day(self.0)
    }

    /// Anchor the timeline to a calendar date supplied by the caller.
    ///
    /// `None` when the result falls outside chrono's calendar range.
    pub fn on_date(&self, reference: NaiveDate) -> Option<NaiveDateTime> {
        let offset = (*self - Instant::REFERENCE).to_time_delta()?;
        reference.and_time(NaiveTime::MIN).checked_add_signed(offset)
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, rhs: Duration) -> Instant {
        Instant(self.0.saturating_add(rhs.0))
    }
}

impl Sub<Duration> for Instant {
    type Output = Instant;

    fn sub(self, rhs: Duration) -> Instant {
        Instant(self.0.saturating_sub(rhs.0))
    }
}

impl Sub for Instant {
    type Output = Duration;

    fn sub(self, rhs: Instant) -> Duration {
        Duration(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_instant(*self))
    }
}

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Instant", 3)?;
        state.serialize_field("clock", &self.clock())?;
        state.serialize_field("day_offset", &self.day_offset())?;
        state.serialize_field("minutes", &self.0)?;
        state.end()
    }
}

/// Lay clock times out in chronological order on one timeline.
///
/// The first time sits on the reference day; each later time is moved to
/// its first occurrence not earlier than its predecessor, so the result is
/// monotonically non-decreasing.
pub fn chronological<const N: usize>(times: [ClockTime; N]) -> [Instant; N] {
    let mut out = [Instant::REFERENCE; N];
    let mut prev: Option<Instant> = None;
    for (slot, time) in out.iter_mut().zip(times) {
        let next = match prev {
            Some(p) => Instant::at_or_after(time, p),
            None => Instant::from_clock(time),
        };
        *slot = next;
        prev = Some(next);
    }
    out
}
