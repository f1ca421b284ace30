use admissions_desk::dataset::Dataset;
use admissions_desk::engine::{FilterSpec, MetricValue, Precision};
use admissions_desk::records::{ApplicationStatus, EventType, LeadSource};
use admissions_desk::reports::{
    application_page, dashboard, event_page, event_performance, lead_sources, pipeline,
    student_page, MATCHING, TOTAL,
};

#[test]
fn dashboard_summarises_all_collections() {
    let summary = dashboard(&Dataset::sample());

    assert_eq!(summary.total_students, 4);
    assert_eq!(summary.active_applications, 2);
    assert_eq!(summary.upcoming_events, 1);
    assert_eq!(
        summary.conversion_rate,
        MetricValue::Percent {
            value: 25.0,
            precision: Precision::Tenths
        }
    );
}

#[test]
fn empty_dataset_dashboard_is_all_zero() {
    let summary = dashboard(&Dataset::default());
    assert_eq!(summary.total_students, 0);
    assert_eq!(summary.conversion_rate.as_f64(), 0.0);
    assert!(lead_sources(&[]).is_empty());
    assert!(event_performance(&[]).is_empty());
}

#[test]
fn student_page_keeps_totals_over_full_collection() {
    let dataset = Dataset::sample();
    let page = student_page(&dataset.students, &FilterSpec::new().field("status", "interested"));

    assert_eq!(page.matches.len(), 2);
    assert_eq!(page.metrics.count(MATCHING), 2);
    assert_eq!(page.metrics.count(TOTAL), 4);
    assert_eq!(page.metrics.count("enrolled"), 1);
    assert_eq!(
        page.metrics.get("enrollment_rate").map(|value| value.to_string()),
        Some("25%".to_string())
    );
}

#[test]
fn event_page_pairs_rows_with_rates() {
    let dataset = Dataset::sample();
    let page = event_page(&dataset.events, &FilterSpec::new().field("event_type", "open_house"));

    let rows: Vec<(u32, f64, f64)> = page
        .rows
        .iter()
        .map(|row| (row.event.id, row.capacity_rate, row.attendance_rate))
        .collect();
    assert_eq!(rows, vec![(1, 85.0, 85.0), (5, 79.0, 0.0)]);
    assert_eq!(page.view.metrics.total("total_attendees"), 274);
    assert_eq!(page.view.metrics.count("upcoming"), 1);
    assert_eq!(page.view.metrics.count(MATCHING), 2);
}

#[test]
fn application_page_reports_search_and_pipeline() {
    let dataset = Dataset::sample();
    let spec = FilterSpec::new().query("mike").field("status", "accepted");
    let page = application_page(&dataset.applications, &spec);

    assert_eq!(page.view.matches.len(), 1);
    assert_eq!(page.view.metrics.count(MATCHING), 1);
    assert_eq!(page.view.metrics.count("pending_review"), 2);
    assert_eq!(
        page.view.metrics.get("acceptance_rate").map(|v| v.as_f64()),
        Some(40.0)
    );
    assert_eq!(page.pipeline.len(), ApplicationStatus::ordered().len());
}

#[test]
fn pipeline_lists_every_status() {
    let stages = pipeline(&Dataset::sample().applications);
    let counts: Vec<(ApplicationStatus, usize)> = stages
        .iter()
        .map(|stage| (stage.status, stage.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            (ApplicationStatus::Submitted, 1),
            (ApplicationStatus::UnderReview, 1),
            (ApplicationStatus::Accepted, 2),
            (ApplicationStatus::Rejected, 1),
            (ApplicationStatus::Waitlisted, 0),
        ]
    );
}

#[test]
fn lead_sources_share_the_student_base() {
    let shares = lead_sources(&Dataset::sample().students);
    let sources: Vec<LeadSource> = shares.iter().map(|share| share.source).collect();
    assert_eq!(
        sources,
        vec![
            LeadSource::Website,
            LeadSource::Referral,
            LeadSource::OpenHouse,
            LeadSource::SocialMedia,
        ]
    );
    assert!(shares.iter().all(|share| share.count == 1 && share.share == 25.0));
}

#[test]
fn event_performance_covers_completed_events_only() {
    let performance = event_performance(&Dataset::sample().events);
    let summary: Vec<(EventType, usize, i64, i64, f64)> = performance
        .iter()
        .map(|entry| {
            (
                entry.event_type,
                entry.events,
                entry.registered,
                entry.attended,
                entry.attendance_rate,
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            (EventType::OpenHouse, 1, 85, 72, 85.0),
            (EventType::Workshop, 1, 28, 25, 89.0),
            (EventType::CareerFair, 1, 150, 135, 90.0),
            (EventType::InfoSession, 1, 45, 42, 93.0),
        ]
    );
}
