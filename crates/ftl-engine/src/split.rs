//! Split duty: a duty broken by a ground rest between two flying sectors.
//!
//! The four input times are laid out chronologically on one timeline
//! (first departure ≤ first landing ≤ second departure ≤ last arrival), so a
//! split that runs through midnight is handled without special cases.
//!
//! The allowable duty starts at the 14-hour base. A ground rest of at least
//! six hours extends it by half of the rest beyond the first two hours,
//! capped at three hours. A shorter ground rest leaves the base ceiling in
//! place and marks the duty as not eligible for split-duty treatment; that is
//! a warning for the caller, not an error.

use serde::Serialize;

use crate::clock::ClockTime;
use crate::duty::{CeilingStatus, DutyOptions, DutyWindow};
use crate::limits::{
    BASE_MAX_DUTY_MINUTES, GROUND_REST_UNCREDITED_MINUTES, MAX_SPLIT_DUTY_EXTENSION_MINUTES,
    SPLIT_DUTY_MIN_GROUND_REST_MINUTES,
};
use crate::timeline::{chronological, Duration, Instant};

/// The outcome of a split-duty calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitDutyResult {
    pub duty_start: Instant,
    pub duty_end: Instant,
    /// Duty start to first landing.
    pub first_duty: Duration,
    /// First landing to second departure.
    pub ground_rest: Duration,
    /// Second departure to duty end.
    pub second_duty: Duration,
    /// Whether the ground rest was long enough for split-duty treatment.
    pub split_eligible: bool,
    /// Amount added to the base ceiling (zero when not eligible).
    pub extension: Duration,
    pub allowable_duty: Duration,
    pub actual_duty: Duration,
    /// How far the actual duty exceeds the allowable duty; `None` if compliant.
    pub over_by: Option<Duration>,
    pub status: CeilingStatus,
}

/// The split-duty extension earned by a ground rest.
///
/// Returns `None` when the ground rest is under six hours. Otherwise half of
/// the rest beyond two hours, capped at three hours. Odd minute counts are
/// halved downwards.
///
/// # Examples
///
/// ```
/// use ftl_engine::split::split_duty_extension;
/// use ftl_engine::timeline::Duration;
///
/// assert_eq!(split_duty_extension(Duration::from_hours(7)), Some(Duration::from_minutes(150)));
/// assert_eq!(split_duty_extension(Duration::from_hours(10)), Some(Duration::from_hours(3)));
/// assert_eq!(split_duty_extension(Duration::from_hours(5)), None);
/// ```
pub fn split_duty_extension(ground_rest: Duration) -> Option<Duration> {
    if ground_rest < Duration::from_minutes(SPLIT_DUTY_MIN_GROUND_REST_MINUTES) {
        return None;
    }
    let credited = (ground_rest.minutes() - GROUND_REST_UNCREDITED_MINUTES) / 2;
    Some(Duration::from_minutes(
        credited.min(MAX_SPLIT_DUTY_EXTENSION_MINUTES),
    ))
}

/// Evaluate a split duty with the standard buffers.
///
/// # Arguments
///
/// * `first_departure` — Departure of the first sector
/// * `first_landing` — Landing before the ground rest
/// * `second_departure` — Departure after the ground rest
/// * `last_arrival` — Arrival of the last sector
///
/// # Examples
///
/// ```
/// use ftl_engine::clock::parse_time;
/// use ftl_engine::split::split_duty;
///
/// let r = split_duty(
///     parse_time("07:00").unwrap(),
///     parse_time("11:00").unwrap(),
///     parse_time("18:00").unwrap(),
///     parse_time("23:00").unwrap(),
/// );
/// assert_eq!(r.allowable_duty.to_string(), "16:30");
/// assert_eq!(r.actual_duty.to_string(), "17:15");
/// assert_eq!(r.over_by.unwrap().to_string(), "0:45");
/// ```
pub fn split_duty(
    first_departure: ClockTime,
    first_landing: ClockTime,
    second_departure: ClockTime,
    last_arrival: ClockTime,
) -> SplitDutyResult {
    split_duty_with(
        first_departure,
        first_landing,
        second_departure,
        last_arrival,
        &DutyOptions::default(),
    )
}

/// [`split_duty`] with caller-chosen buffers.
pub fn split_duty_with(
    first_departure: ClockTime,
    first_landing: ClockTime,
    second_departure: ClockTime,
    last_arrival: ClockTime,
    options: &DutyOptions,
) -> SplitDutyResult {
    let [dep1, land1, dep2, arr2] = chronological([
        first_departure,
        first_landing,
        second_departure,
        last_arrival,
    ]);

    let window = DutyWindow::between(dep1, arr2, options);
    let ground_rest = dep2 - land1;

    let base = Duration::from_minutes(BASE_MAX_DUTY_MINUTES);
    let (split_eligible, extension) = match split_duty_extension(ground_rest) {
        Some(extension) => (true, extension),
        None => {
            tracing::debug!(%ground_rest, "ground rest too short for split-duty extension");
            (false, Duration::ZERO)
        }
    };
    let allowable_duty = base + extension;
    let actual_duty = window.length;

    let over_by = (actual_duty > allowable_duty).then(|| actual_duty - allowable_duty);
    let status = CeilingStatus::classify(actual_duty, allowable_duty);

    tracing::debug!(
        %ground_rest,
        %allowable_duty,
        %actual_duty,
        ?status,
        "evaluated split duty"
    );

    SplitDutyResult {
        duty_start: window.start,
        duty_end: window.end,
        first_duty: land1 - window.start,
        ground_rest,
        second_duty: window.end - dep2,
        split_eligible,
        extension,
        allowable_duty,
        actual_duty,
        over_by,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> ClockTime {
        ClockTime::new(h, m).unwrap()
    }

    fn hm(h: i64, m: i64) -> Duration {
        Duration::from_minutes(h * 60 + m)
    }

    #[test]
    fn test_split_duty_over_ceiling() {
        let r = split_duty(t(7, 0), t(11, 0), t(18, 0), t(23, 0));
        assert_eq!(r.ground_rest, Duration::from_hours(7));
        assert!(r.split_eligible);
        assert_eq!(r.extension, hm(2, 30));
        assert_eq!(r.allowable_duty, hm(16, 30));
        assert_eq!(r.duty_start.clock(), t(6, 0));
        assert_eq!(r.duty_end.clock(), t(23, 15));
        assert_eq!(r.actual_duty, hm(17, 15));
        assert_eq!(r.over_by, Some(hm(0, 45)));
        assert_eq!(r.status, CeilingStatus::OverCeiling);
    }

    #[test]
    fn test_split_duty_short_ground_rest_not_eligible() {
        let r = split_duty(t(7, 0), t(10, 0), t(15, 0), t(18, 0));
        assert_eq!(r.ground_rest, Duration::from_hours(5));
        assert!(!r.split_eligible);
        assert_eq!(r.extension, Duration::ZERO);
        assert_eq!(r.allowable_duty, Duration::from_hours(14));
        // 06:00 → 18:15
        assert_eq!(r.actual_duty, hm(12, 15));
        assert_eq!(r.over_by, None);
        assert_eq!(r.status, CeilingStatus::Compliant);
    }

    #[test]
    fn test_split_duty_exactly_six_hours_is_eligible() {
        let r = split_duty(t(6, 0), t(9, 0), t(15, 0), t(20, 0));
        assert!(r.split_eligible);
        assert_eq!(r.extension, Duration::from_hours(2));
        assert_eq!(r.allowable_duty, Duration::from_hours(16));
    }

    #[test]
    fn test_split_duty_extension_is_capped() {
        let r = split_duty(t(5, 0), t(8, 0), t(18, 0), t(21, 0));
        assert_eq!(r.ground_rest, Duration::from_hours(10));
        assert_eq!(r.extension, Duration::from_hours(3));
        assert_eq!(r.allowable_duty, Duration::from_hours(17));
    }

    #[test]
    fn test_split_duty_near_ceiling() {
        // 05:00 → 20:45 = 15:45 against a 16:00 ceiling.
        let r = split_duty(t(6, 0), t(9, 0), t(15, 0), t(20, 30));
        assert_eq!(r.actual_duty, hm(15, 45));
        assert_eq!(r.over_by, None);
        assert_eq!(r.status, CeilingStatus::NearCeiling);
    }

    #[test]
    fn test_split_duty_exactly_at_ceiling_is_not_over() {
        // 05:00 → 21:00 = 16:00 against a 16:00 ceiling.
        let r = split_duty(t(6, 0), t(9, 0), t(15, 0), t(20, 45));
        assert_eq!(r.actual_duty, r.allowable_duty);
        assert_eq!(r.over_by, None);
        assert_eq!(r.status, CeilingStatus::NearCeiling);
    }

    #[test]
    fn test_split_duty_across_midnight() {
        let r = split_duty(t(18, 0), t(20, 0), t(2, 0), t(4, 0));
        assert_eq!(r.ground_rest, Duration::from_hours(6));
        assert_eq!(r.duty_start.clock(), t(17, 0));
        assert_eq!(r.duty_end.clock(), t(4, 15));
        assert_eq!(r.duty_end.day_offset(), 1);
        assert_eq!(r.actual_duty, hm(11, 15));
    }

    #[test]
    fn test_split_duty_periods_sum_to_actual() {
        let r = split_duty(t(7, 0), t(11, 0), t(18, 0), t(23, 0));
        assert_eq!(r.first_duty, Duration::from_hours(5));
        assert_eq!(r.second_duty, hm(5, 15));
        assert_eq!(r.first_duty + r.ground_rest + r.second_duty, r.actual_duty);
    }

    #[test]
    fn test_split_duty_custom_buffers() {
        let options = DutyOptions {
            pre_flight_buffer: Duration::from_minutes(30),
            post_flight_buffer: Duration::from_minutes(30),
        };
        let r = split_duty_with(t(7, 0), t(11, 0), t(18, 0), t(23, 0), &options);
        assert_eq!(r.actual_duty, Duration::from_hours(17));
        assert_eq!(r.over_by, Some(hm(0, 30)));
    }

    #[test]
    fn test_split_duty_extension_odd_minutes_round_down() {
        // (361 - 120) / 2 = 120.5 → 120
        assert_eq!(
            split_duty_extension(Duration::from_minutes(361)),
            Some(Duration::from_minutes(120))
        );
    }
}
