//! Display strings for durations, clock times and timeline instants.

use chrono::NaiveDate;

use crate::clock::ClockTime;
use crate::timeline::{Duration, Instant};

/// Render a duration as `H:MM` (hours unpadded, minutes zero-padded).
///
/// Negative durations carry a leading `-`, e.g. `-0:45`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.minutes();
    let sign = if total < 0 { "-" } else { "" };
    let abs = total.unsigned_abs();
    format!("{sign}{}:{:02}", abs / 60, abs % 60)
}

/// Render a clock time as `HH:MM`.
pub fn format_clock_time(time: ClockTime) -> String {
    time.to_string()
}

/// Render an instant as `HH:MM`, suffixed with the day offset when it is
/// not on the reference day: `07:00 (+1d)`, `23:30 (-1d)`.
pub fn format_instant(instant: Instant) -> String {
    let clock = instant.clock();
    match instant.day_offset() {
        0 => clock.to_string(),
        d if d > 0 => format!("{clock} (+{d}d)"),
        d => format!("{clock} ({d}d)"),
    }
}

/// Render an instant against an explicit calendar date: `YYYY-MM-DD HH:MM`.
///
/// Falls back to [`format_instant`] when the instant lies beyond chrono's
/// calendar range.
pub fn format_instant_on(instant: Instant, reference: NaiveDate) -> String {
    match instant.on_date(reference) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => format_instant(instant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_minutes(615)), "10:15");
        assert_eq!(format_duration(Duration::from_minutes(45)), "0:45");
        assert_eq!(format_duration(Duration::from_hours(14)), "14:00");
        assert_eq!(format_duration(Duration::ZERO), "0:00");
        assert_eq!(format_duration(Duration::from_minutes(1500)), "25:00");
    }

    #[test]
    fn test_format_negative_duration() {
        assert_eq!(format_duration(Duration::from_minutes(-45)), "-0:45");
        assert_eq!(format_duration(Duration::from_minutes(-125)), "-2:05");
    }

    #[test]
    fn test_format_clock_time() {
        assert_eq!(format_clock_time(ClockTime::new(7, 5).unwrap()), "07:05");
        assert_eq!(format_clock_time(ClockTime::MIDNIGHT), "00:00");
    }

    #[test]
    fn test_format_instant_day_offsets() {
        assert_eq!(format_instant(Instant::from_minutes(420)), "07:00");
        assert_eq!(format_instant(Instant::from_minutes(1440 + 420)), "07:00 (+1d)");
        assert_eq!(format_instant(Instant::from_minutes(-30)), "23:30 (-1d)");
    }

    #[test]
    fn test_format_instant_on_date() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(
            format_instant_on(Instant::from_minutes(1440 + 90), date),
            "2027-01-01 01:30"
        );
        assert_eq!(
            format_instant_on(Instant::from_minutes(-60), date),
            "2026-12-30 23:00"
        );
    }

    #[test]
    fn test_format_instant_on_beyond_calendar_falls_back() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let far = Instant::from_minutes(i64::MAX);
        assert_eq!(format_instant_on(far, date), format_instant(far));
    }
}
