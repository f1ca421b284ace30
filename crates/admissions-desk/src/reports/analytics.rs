use serde::Serialize;

use super::pages::pending_review;
use crate::dataset::Dataset;
use crate::engine::{
    aggregate, filter, percentage, tally, FilterSpec, MetricDef, MetricValue, Precision, Predicate,
};
use crate::records::{Event, EventStatus, EventType, LeadSource, Student, StudentStatus};

/// Headline cards on the home dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_students: usize,
    pub active_applications: usize,
    pub upcoming_events: usize,
    /// Enrolled students over all students, to one decimal.
    pub conversion_rate: MetricValue,
}

pub fn dashboard(dataset: &Dataset) -> DashboardSummary {
    let students = aggregate(
        &dataset.students,
        &[
            MetricDef::count("total", Predicate::All),
            MetricDef::percentage(
                "conversion_rate",
                Predicate::equals("status", StudentStatus::Enrolled.as_str()),
                Predicate::All,
                Precision::Tenths,
            ),
        ],
    );
    let applications = aggregate(
        &dataset.applications,
        &[MetricDef::count("active", pending_review())],
    );
    let events = aggregate(
        &dataset.events,
        &[MetricDef::count(
            "upcoming",
            Predicate::equals("status", EventStatus::Planned.as_str()),
        )],
    );

    DashboardSummary {
        total_students: students.count("total"),
        active_applications: applications.count("active"),
        upcoming_events: events.count("upcoming"),
        conversion_rate: students
            .get("conversion_rate")
            .unwrap_or(MetricValue::Percent {
                value: 0.0,
                precision: Precision::Tenths,
            }),
    }
}

/// Slice of the lead-source chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SourceShare {
    pub source: LeadSource,
    pub label: &'static str,
    pub count: usize,
    pub share: f64,
}

/// Share of students per lead source; sources with no students are omitted.
pub fn lead_sources(students: &[Student]) -> Vec<SourceShare> {
    let counts = tally(students, "source");
    let total = students.len() as i64;

    LeadSource::ordered()
        .into_iter()
        .filter_map(|source| {
            let count = counts
                .iter()
                .find(|entry| entry.value == source.as_str())?
                .count;
            Some(SourceShare {
                source,
                label: source.label(),
                count,
                share: percentage(count as i64, total, Precision::Whole),
            })
        })
        .collect()
}

/// Registration versus turnout for one event type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventTypePerformance {
    pub event_type: EventType,
    pub label: &'static str,
    pub events: usize,
    pub registered: i64,
    pub attended: i64,
    pub attendance_rate: f64,
}

/// Series for the event performance chart, over completed events only.
pub fn event_performance(events: &[Event]) -> Vec<EventTypePerformance> {
    let definitions = [
        MetricDef::sum("registered", "registered_count"),
        MetricDef::sum("attended", "attended_count"),
    ];

    EventType::ordered()
        .into_iter()
        .filter_map(|event_type| {
            let spec = FilterSpec::new()
                .field("event_type", event_type.as_str())
                .field("status", EventStatus::Completed.as_str());
            let matches = filter(events, &spec);
            if matches.is_empty() {
                return None;
            }

            let totals = aggregate(&matches, &definitions);
            let registered = totals.total("registered");
            let attended = totals.total("attended");
            Some(EventTypePerformance {
                event_type,
                label: event_type.label(),
                events: matches.len(),
                registered,
                attended,
                attendance_rate: percentage(attended, registered, Precision::Whole),
            })
        })
        .collect()
}
