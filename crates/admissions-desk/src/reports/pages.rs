use serde::Serialize;

use crate::engine::{
    evaluate, record_rates, tally, FilterSpec, FilteredView, MetricDef, Precision, Predicate,
};
use crate::records::{Application, ApplicationStatus, Event, EventStatus, Student, StudentStatus};

/// Filtered count shown above every list ("N results").
pub const MATCHING: &str = "matching";
pub const TOTAL: &str = "total";

fn status_count(code: &'static str) -> MetricDef {
    MetricDef::count(code, Predicate::equals("status", code))
}

pub fn student_metrics() -> Vec<MetricDef> {
    let mut definitions = vec![MetricDef::count(TOTAL, Predicate::All)];
    definitions.extend(
        StudentStatus::ordered()
            .into_iter()
            .map(|status| status_count(status.as_str())),
    );
    definitions.push(MetricDef::percentage(
        "enrollment_rate",
        Predicate::equals("status", StudentStatus::Enrolled.as_str()),
        Predicate::All,
        Precision::Whole,
    ));
    definitions.push(MetricDef::count(MATCHING, Predicate::All).filtered());
    definitions
}

pub fn event_metrics() -> Vec<MetricDef> {
    vec![
        MetricDef::count(TOTAL, Predicate::All),
        MetricDef::count(
            "upcoming",
            Predicate::equals("status", EventStatus::Planned.as_str()),
        ),
        MetricDef::count(
            "completed",
            Predicate::equals("status", EventStatus::Completed.as_str()),
        ),
        MetricDef::sum("total_attendees", "attended_count"),
        MetricDef::count(MATCHING, Predicate::All).filtered(),
    ]
}

pub(crate) fn pending_review() -> Predicate {
    Predicate::one_of(
        "status",
        [
            ApplicationStatus::Submitted.as_str(),
            ApplicationStatus::UnderReview.as_str(),
        ],
    )
}

pub fn application_metrics() -> Vec<MetricDef> {
    vec![
        MetricDef::count(TOTAL, Predicate::All),
        MetricDef::count("pending_review", pending_review()),
        MetricDef::count(
            "accepted",
            Predicate::equals("status", ApplicationStatus::Accepted.as_str()),
        ),
        MetricDef::percentage(
            "acceptance_rate",
            Predicate::equals("status", ApplicationStatus::Accepted.as_str()),
            Predicate::All,
            Precision::Whole,
        ),
        MetricDef::count(MATCHING, Predicate::All).filtered(),
    ]
}

pub fn student_page<'a>(students: &'a [Student], spec: &FilterSpec) -> FilteredView<'a, Student> {
    evaluate(students, spec, &student_metrics())
}

/// One row of the events table with its derived rates.
#[derive(Debug, Clone, Serialize)]
pub struct EventRates<'a> {
    pub event: &'a Event,
    pub capacity_rate: f64,
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventPage<'a> {
    #[serde(flatten)]
    pub view: FilteredView<'a, Event>,
    pub rows: Vec<EventRates<'a>>,
}

pub fn event_page<'a>(events: &'a [Event], spec: &FilterSpec) -> EventPage<'a> {
    let view = evaluate(events, spec, &event_metrics());
    let capacity = record_rates(&view.matches, "registered_count", "capacity", Precision::Whole);
    let attendance = record_rates(
        &view.matches,
        "attended_count",
        "registered_count",
        Precision::Whole,
    );

    let rows = view
        .matches
        .iter()
        .zip(capacity.into_iter().zip(attendance))
        .map(|(&event, (capacity_rate, attendance_rate))| EventRates {
            event,
            capacity_rate,
            attendance_rate,
        })
        .collect();

    EventPage { view, rows }
}

/// Count of applications sitting in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineStage {
    pub status: ApplicationStatus,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationPage<'a> {
    #[serde(flatten)]
    pub view: FilteredView<'a, Application>,
    pub pipeline: Vec<PipelineStage>,
}

pub fn application_page<'a>(
    applications: &'a [Application],
    spec: &FilterSpec,
) -> ApplicationPage<'a> {
    ApplicationPage {
        view: evaluate(applications, spec, &application_metrics()),
        pipeline: pipeline(applications),
    }
}

/// Stage counts over the whole collection, every status listed even when empty.
pub fn pipeline(applications: &[Application]) -> Vec<PipelineStage> {
    let counts = tally(applications, "status");
    ApplicationStatus::ordered()
        .into_iter()
        .map(|status| PipelineStage {
            status,
            label: status.label(),
            count: counts
                .iter()
                .find(|entry| entry.value == status.as_str())
                .map_or(0, |entry| entry.count),
        })
        .collect()
}
