//! Assumed vs deemed rest after a duty.
//!
//! Duty ending from 20:00 up to and including 02:00 earns **deemed rest**: a
//! fixed ten hours from duty end, optionally extended. Any other duty end
//! earns **assumed rest**, which always runs to the next 06:00 after duty end.
//! The earliest callout is the end of rest, and the earliest departure is two
//! and a half hours after callout.

use std::fmt;

use serde::Serialize;

use crate::clock::ClockTime;
use crate::limits::{
    ASSUMED_REST_END_HOUR, BASE_MAX_DUTY_MINUTES, CALLOUT_TO_DEPARTURE_MINUTES,
    DEEMED_REST_FROM_HOUR, DEEMED_REST_MINUTES, DEEMED_REST_UNTIL_HOUR, FTL_EXTENSION_MINUTES,
    POST_FLIGHT_BUFFER_MINUTES,
};
use crate::timeline::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestType {
    Assumed,
    Deemed,
}

impl fmt::Display for RestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestType::Assumed => f.write_str("Assumed Rest"),
            RestType::Deemed => f.write_str("Deemed Rest"),
        }
    }
}

/// Extensions that lengthen a deemed rest period.
///
/// The two flags are independent; when both are set and both conditions
/// hold, both extensions are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestOptions {
    /// An FTL extension was used on the preceding duty: +1 hour.
    pub ftl_extension: bool,
    /// The preceding duty was an extended split duty: + its length beyond 14 hours.
    pub split_duty_extension: bool,
    /// Length of the preceding split duty, consulted with `split_duty_extension`.
    pub split_duty_length: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RestResult {
    pub rest_type: RestType,
    pub duty_end: Instant,
    pub rest_end: Instant,
    /// Total extension added to the rest period.
    pub extension: Duration,
    pub callout_time: Instant,
    pub earliest_departure: Instant,
}

/// Whether a duty ending at `duty_end` earns deemed rest.
pub fn is_deemed_rest(duty_end: ClockTime) -> bool {
    let hour = duty_end.hour();
    hour >= DEEMED_REST_FROM_HOUR
        || hour < DEEMED_REST_UNTIL_HOUR
        || (hour == DEEMED_REST_UNTIL_HOUR && duty_end.minute() == 0)
}

/// Classify the rest following a duty that ends at `duty_end` on the
/// reference day.
///
/// # Examples
///
/// ```
/// use ftl_engine::clock::parse_time;
/// use ftl_engine::rest::{classify_rest, RestOptions, RestType};
///
/// let r = classify_rest(parse_time("21:00").unwrap(), &RestOptions::default());
/// assert_eq!(r.rest_type, RestType::Deemed);
/// assert_eq!(r.rest_end.to_string(), "07:00 (+1d)");
/// assert_eq!(r.earliest_departure.to_string(), "09:30 (+1d)");
/// ```
pub fn classify_rest(duty_end: ClockTime, options: &RestOptions) -> RestResult {
    classify_rest_at(Instant::from_clock(duty_end), options)
}

/// Classify the rest following a duty that ends at a timeline instant.
pub fn classify_rest_at(duty_end: Instant, options: &RestOptions) -> RestResult {
    let (rest_type, rest_end, extension) = if is_deemed_rest(duty_end.clock()) {
        let extension = deemed_rest_extension(options);
        let rest_end = duty_end + Duration::from_minutes(DEEMED_REST_MINUTES) + extension;
        (RestType::Deemed, rest_end, extension)
    } else {
        let anchor = ClockTime::from_minutes_of_day(i64::from(ASSUMED_REST_END_HOUR) * 60);
        let rest_end = Instant::strictly_after(anchor, duty_end);
        (RestType::Assumed, rest_end, Duration::ZERO)
    };

    let callout_time = rest_end;
    let earliest_departure = callout_time + Duration::from_minutes(CALLOUT_TO_DEPARTURE_MINUTES);

    tracing::debug!(%duty_end, %rest_type, %rest_end, %extension, "classified rest");

    RestResult {
        rest_type,
        duty_end,
        rest_end,
        extension,
        callout_time,
        earliest_departure,
    }
}

/// Classify rest from a landing time.
///
/// Duty end defaults to landing plus the 15-minute debrief. A
/// `custom_duty_end`, when given, replaces it and is placed at its first
/// occurrence not earlier than the landing.
pub fn classify_rest_after_landing(
    landing: ClockTime,
    custom_duty_end: Option<ClockTime>,
    options: &RestOptions,
) -> RestResult {
    let landed = Instant::from_clock(landing);
    let duty_end = match custom_duty_end {
        Some(end) => Instant::at_or_after(end, landed),
        None => landed + Duration::from_minutes(POST_FLIGHT_BUFFER_MINUTES),
    };
    classify_rest_at(duty_end, options)
}

fn deemed_rest_extension(options: &RestOptions) -> Duration {
    let mut extension = Duration::ZERO;

    if options.ftl_extension {
        extension += Duration::from_minutes(FTL_EXTENSION_MINUTES);
    }

    if options.split_duty_extension {
        let base = Duration::from_minutes(BASE_MAX_DUTY_MINUTES);
        match options.split_duty_length {
            Some(length) if length > base => extension += length - base,
            Some(_) => {}
            None => tracing::debug!("split-duty extension requested without a duty length"),
        }
    }

    extension
}
