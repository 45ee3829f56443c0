//! Fixed regulatory constants.
//!
//! Everything here is expressed in minutes on the duty timeline. Only the
//! two briefing buffers can be overridden per call (see
//! [`DutyOptions`](crate::duty::DutyOptions)); the rest are fixed by the
//! flight time limitation scheme.

/// Pre-flight report time before the first departure.
pub const PRE_FLIGHT_BUFFER_MINUTES: i64 = 60;

/// Post-flight debrief time after the last arrival.
pub const POST_FLIGHT_BUFFER_MINUTES: i64 = 15;

/// Maximum duty period without a split-duty extension.
pub const BASE_MAX_DUTY_MINUTES: i64 = 14 * 60;

/// Shortest ground rest that makes a duty eligible for split-duty treatment.
pub const SPLIT_DUTY_MIN_GROUND_REST_MINUTES: i64 = 6 * 60;

/// Portion of ground rest that earns no extension credit.
pub const GROUND_REST_UNCREDITED_MINUTES: i64 = 2 * 60;

/// Cap on the split-duty extension.
pub const MAX_SPLIT_DUTY_EXTENSION_MINUTES: i64 = 3 * 60;

/// Margin below the ceiling that counts as "near ceiling".
pub const NEAR_CEILING_MARGIN_MINUTES: i64 = 60;

/// Minimum rest after a single duty before the next departure.
pub const SINGLE_DUTY_MIN_REST_MINUTES: i64 = 11 * 60;

/// Deemed rest applies to duty ending at or after this hour...
pub const DEEMED_REST_FROM_HOUR: u32 = 20;

/// ...or before this hour (exactly 02:00 still counts).
pub const DEEMED_REST_UNTIL_HOUR: u32 = 2;

/// Length of a deemed rest period.
pub const DEEMED_REST_MINUTES: i64 = 10 * 60;

/// Assumed rest always ends at this wall-clock hour.
pub const ASSUMED_REST_END_HOUR: u32 = 6;

/// Flat extension added to deemed rest when an FTL extension was used.
pub const FTL_EXTENSION_MINUTES: i64 = 60;

/// Time between callout and the earliest departure.
pub const CALLOUT_TO_DEPARTURE_MINUTES: i64 = 2 * 60 + 30;

pub const MINUTES_PER_DAY: i64 = 24 * 60;
