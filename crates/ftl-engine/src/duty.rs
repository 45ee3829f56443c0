//! Duty windows: report and release times around a sequence of flights.
//!
//! A duty starts a fixed pre-flight buffer before the first departure and
//! ends a fixed post-flight buffer after the last arrival. If the buffered
//! end is not after the buffered start, the duty is taken to span midnight
//! and its end moves to the next day. Every other calculator in this crate
//! builds on [`DutyWindow::between`].

use serde::Serialize;

use crate::clock::ClockTime;
use crate::limits::{
    BASE_MAX_DUTY_MINUTES, MINUTES_PER_DAY, NEAR_CEILING_MARGIN_MINUTES,
    POST_FLIGHT_BUFFER_MINUTES, PRE_FLIGHT_BUFFER_MINUTES, SINGLE_DUTY_MIN_REST_MINUTES,
};
use crate::timeline::{Duration, Instant};

/// Briefing and debrief buffers applied around the flying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyOptions {
    /// Time on duty before the first departure.
    pub pre_flight_buffer: Duration,
    /// Time on duty after the last arrival.
    pub post_flight_buffer: Duration,
}

impl Default for DutyOptions {
    fn default() -> Self {
        Self {
            pre_flight_buffer: Duration::from_minutes(PRE_FLIGHT_BUFFER_MINUTES),
            post_flight_buffer: Duration::from_minutes(POST_FLIGHT_BUFFER_MINUTES),
        }
    }
}

/// Start, end and length of one duty period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DutyWindow {
    pub start: Instant,
    pub end: Instant,
    /// `end - start`; never negative.
    pub length: Duration,
    /// Whether the end had to be moved to the next day to follow the start.
    pub rolled_over: bool,
}

impl DutyWindow {
    /// Apply the buffers to a first departure and last arrival already placed
    /// on the timeline.
    pub fn between(
        first_departure: Instant,
        last_arrival: Instant,
        options: &DutyOptions,
    ) -> Self {
        let start = first_departure - options.pre_flight_buffer;
        let mut end = last_arrival + options.post_flight_buffer;

        let rolled_over = end <= start;
        if rolled_over {
            end = end + Duration::from_minutes(MINUTES_PER_DAY);
            tracing::debug!(%start, %end, "duty end rolled past midnight");
        }

        DutyWindow {
            start,
            end,
            length: end - start,
            rolled_over,
        }
    }
}

/// Three-tier position of a duty length relative to its ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CeilingStatus {
    /// At least an hour to spare.
    Compliant,
    /// Within the last hour before the ceiling, ceiling included.
    NearCeiling,
    /// Past the ceiling.
    OverCeiling,
}

impl CeilingStatus {
    pub fn classify(actual: Duration, allowable: Duration) -> Self {
        if actual > allowable {
            CeilingStatus::OverCeiling
        } else if actual >= allowable - Duration::from_minutes(NEAR_CEILING_MARGIN_MINUTES) {
            CeilingStatus::NearCeiling
        } else {
            CeilingStatus::Compliant
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, CeilingStatus::OverCeiling)
    }
}

/// A single (non-split) duty checked against the 14-hour ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SingleDutyAssessment {
    pub window: DutyWindow,
    pub max_duty: Duration,
    pub status: CeilingStatus,
    /// Duty end plus the minimum 11-hour rest; `None` when the duty is over
    /// its ceiling.
    pub earliest_next_departure: Option<Instant>,
}

/// Compute the duty window for one departure and one arrival with the
/// standard 60-minute report and 15-minute debrief buffers.
///
/// # Examples
///
/// ```
/// use ftl_engine::clock::parse_time;
/// use ftl_engine::duty::duty_window;
///
/// let w = duty_window(parse_time("08:00").unwrap(), parse_time("17:00").unwrap());
/// assert_eq!(w.start.to_string(), "07:00");
/// assert_eq!(w.end.to_string(), "17:15");
/// assert_eq!(w.length.to_string(), "10:15");
/// ```
pub fn duty_window(departure: ClockTime, arrival: ClockTime) -> DutyWindow {
    duty_window_with(departure, arrival, &DutyOptions::default())
}

/// [`duty_window`] with caller-chosen buffers.
pub fn duty_window_with(
    departure: ClockTime,
    arrival: ClockTime,
    options: &DutyOptions,
) -> DutyWindow {
    DutyWindow::between(
        Instant::from_clock(departure),
        Instant::from_clock(arrival),
        options,
    )
}

/// Assess a single duty: its window, ceiling status and the earliest time
/// the crew may depart again.
pub fn assess_single_duty(
    departure: ClockTime,
    arrival: ClockTime,
    options: &DutyOptions,
) -> SingleDutyAssessment {
    let window = duty_window_with(departure, arrival, options);
    let max_duty = Duration::from_minutes(BASE_MAX_DUTY_MINUTES);
    let status = CeilingStatus::classify(window.length, max_duty);

    let earliest_next_departure = if status.is_over() {
        None
    } else {
        Some(window.end + Duration::from_minutes(SINGLE_DUTY_MIN_REST_MINUTES))
    };

    tracing::debug!(length = %window.length, ?status, "assessed single duty");

    SingleDutyAssessment {
        window,
        max_duty,
        status,
        earliest_next_departure,
    }
}
