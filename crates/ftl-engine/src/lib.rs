//! # ftl-engine
//!
//! Deterministic flight-crew duty and rest computation.
//!
//! Given flight departure and arrival times, the engine derives duty start
//! and end, duty length, the allowable duty ceiling (with the split-duty
//! extension), and the assumed or deemed rest that follows, including the
//! earliest callout and next departure. Every function is pure: no system
//! clock, no I/O, no shared state.
//!
//! ## Modules
//!
//! - [`clock`] — `HH:MM` / `HHMM` text → [`ClockTime`]
//! - [`timeline`] — Minutes-since-reference-midnight [`Instant`] and [`Duration`]
//! - [`duty`] — Duty windows, ceiling status, single-duty assessment
//! - [`split`] — Split-duty ground rest and allowable duty
//! - [`rest`] — Assumed vs deemed rest, callout and earliest departure
//! - [`format`] — Display strings for durations and times
//! - [`limits`] — Fixed regulatory constants
//! - [`error`] — Error types

pub mod clock;
pub mod duty;
pub mod error;
pub mod format;
pub mod limits;
pub mod rest;
pub mod split;
pub mod timeline;

pub use clock::{parse_time, parse_time_input, ClockTime};
pub use duty::{
    assess_single_duty, duty_window, duty_window_with, CeilingStatus, DutyOptions, DutyWindow,
    SingleDutyAssessment,
};
pub use error::FtlError;
pub use format::{format_clock_time, format_duration, format_instant, format_instant_on};
pub use rest::{
    classify_rest, classify_rest_after_landing, classify_rest_at, is_deemed_rest, RestOptions,
    RestResult, RestType,
};
pub use split::{split_duty, split_duty_extension, split_duty_with, SplitDutyResult};
pub use timeline::{chronological, Duration, Instant};
