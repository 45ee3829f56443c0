//! Plain-text rendering of engine results.

use chrono::NaiveDate;
use ftl_engine::{
    format_instant, format_instant_on, CeilingStatus, Duration, Instant, RestResult,
    SingleDutyAssessment, SplitDutyResult,
};

pub struct Renderer {
    date: Option<NaiveDate>,
}

impl Renderer {
    pub fn new(date: Option<NaiveDate>) -> Self {
        Self { date }
    }

    fn instant(&self, instant: Instant) -> String {
        match self.date {
            Some(date) => format_instant_on(instant, date),
            None => format_instant(instant),
        }
    }

    pub fn single_duty(&self, a: &SingleDutyAssessment) -> String {
        let next = a
            .earliest_next_departure
            .map(|i| self.instant(i))
            .unwrap_or_else(|| "—".to_string());
        [
            line("Duty Start", self.instant(a.window.start)),
            line("Duty End", self.instant(a.window.end)),
            line(
                "Duty Length",
                format!(
                    "{} ({})",
                    a.window.length,
                    status_label(a.status, a.window.length, a.max_duty)
                ),
            ),
            line("Max Duty", a.max_duty.to_string()),
            line("Earliest Next Departure", next),
        ]
        .join("\n")
    }

    pub fn split_duty(&self, r: &SplitDutyResult) -> String {
        let mut lines = vec![
            line("Duty Start", self.instant(r.duty_start)),
            line("Duty End", self.instant(r.duty_end)),
            line("First Duty Period", r.first_duty.to_string()),
            line("Ground Rest", r.ground_rest.to_string()),
            line("Second Duty Period", r.second_duty.to_string()),
            line("Total Duty Time", r.actual_duty.to_string()),
            line("Allowable Duty", r.allowable_duty.to_string()),
            line(
                "Status",
                status_label(r.status, r.actual_duty, r.allowable_duty),
            ),
        ];
        if !r.split_eligible {
            lines.push(
                "Warning: ground rest under 6:00, split-duty extension does not apply".to_string(),
            );
        }
        lines.join("\n")
    }

    pub fn rest(&self, r: &RestResult) -> String {
        let mut lines = vec![
            line("Rest Type", r.rest_type.to_string()),
            line("Duty End", self.instant(r.duty_end)),
        ];
        if r.extension > Duration::ZERO {
            lines.push(line("Rest Extension", r.extension.to_string()));
        }
        lines.extend([
            line("Rest End", self.instant(r.rest_end)),
            line("Earliest Callout", self.instant(r.callout_time)),
            line(
                "Earliest Departure After Callout",
                self.instant(r.earliest_departure),
            ),
        ]);
        lines.join("\n")
    }
}

fn line(label: &str, value: String) -> String {
    format!("{:<34}{value}", format!("{label}:"))
}

fn status_label(status: CeilingStatus, actual: Duration, allowable: Duration) -> String {
    match status {
        CeilingStatus::Compliant => "compliant".to_string(),
        CeilingStatus::NearCeiling => format!("near ceiling, {} remaining", allowable - actual),
        CeilingStatus::OverCeiling => format!("over ceiling by {}", actual - allowable),
    }
}
