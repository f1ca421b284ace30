use admissions_desk::config::OutputFormat;
use admissions_desk::dataset::Dataset;
use admissions_desk::engine::{FilterSpec, Metrics};
use admissions_desk::error::AppError;
use admissions_desk::records::{Application, Event, Student};
use admissions_desk::reports::views::{journey, Badge, StepState};
use admissions_desk::reports::{self, MATCHING, TOTAL};
use serde_json::json;
use std::fmt::{self, Write};

const NO_STUDENTS: &str = "No students found matching your criteria.";
const NO_EVENTS: &str = "No events found matching your criteria.";
const NO_APPLICATIONS: &str = "No applications found matching your criteria.";

fn json_out(value: &impl serde::Serialize) -> Result<String, AppError> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    Ok(rendered)
}

fn metric(metrics: &Metrics, name: &str) -> String {
    metrics
        .get(name)
        .map(|value| value.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn heading(output: &mut String, title: &str, metrics: &Metrics) -> fmt::Result {
    writeln!(
        output,
        "{} ({} of {} shown)",
        title,
        metric(metrics, MATCHING),
        metric(metrics, TOTAL)
    )
}

pub(crate) fn dashboard(dataset: &Dataset, format: OutputFormat) -> Result<String, AppError> {
    let summary = reports::dashboard(dataset);
    let sources = reports::lead_sources(&dataset.students);
    let performance = reports::event_performance(&dataset.events);
    let pipeline = reports::pipeline(&dataset.applications);

    if format == OutputFormat::Json {
        return json_out(&json!({
            "summary": summary,
            "lead_sources": sources,
            "event_performance": performance,
            "pipeline": pipeline,
        }));
    }

    let mut output = String::new();
    writeln!(output, "Admissions dashboard")?;
    writeln!(output, "- Total students: {}", summary.total_students)?;
    writeln!(
        output,
        "- Active applications: {}",
        summary.active_applications
    )?;
    writeln!(output, "- Upcoming events: {}", summary.upcoming_events)?;
    writeln!(output, "- Conversion rate: {}", summary.conversion_rate)?;

    writeln!(output, "\nApplication pipeline")?;
    for stage in &pipeline {
        writeln!(output, "  - {}: {}", stage.label, stage.count)?;
    }

    writeln!(output, "\nLead sources")?;
    if sources.is_empty() {
        writeln!(output, "  No students recorded.")?;
    }
    for share in &sources {
        writeln!(
            output,
            "  - {}: {} students ({:.0}%)",
            share.label, share.count, share.share
        )?;
    }

    writeln!(output, "\nEvent performance (completed events)")?;
    if performance.is_empty() {
        writeln!(output, "  No completed events.")?;
    }
    for entry in &performance {
        writeln!(
            output,
            "  - {}: {} registered | {} attended | {:.0}% turnout",
            entry.label, entry.registered, entry.attended, entry.attendance_rate
        )?;
    }

    Ok(output)
}

pub(crate) fn students(
    students: &[Student],
    spec: &FilterSpec,
    format: OutputFormat,
) -> Result<String, AppError> {
    let page = reports::student_page(students, spec);
    if format == OutputFormat::Json {
        return json_out(&page);
    }

    let mut output = String::new();
    heading(&mut output, "Students", &page.metrics)?;
    for student in &page.matches {
        let progress: Vec<&str> = journey(student.status)
            .iter()
            .map(|step| match step.state {
                StepState::Completed => "done",
                StepState::Current => "now",
                StepState::Upcoming => "next",
            })
            .collect();
        writeln!(
            output,
            "- #{} {} <{}> | {} | {} | last contact {} | journey {}",
            student.id,
            student.full_name(),
            student.email,
            student.status.badge().label,
            student.source.label(),
            student.last_interaction,
            progress.join(" > ")
        )?;
    }
    if page.is_empty() {
        writeln!(output, "{NO_STUDENTS}")?;
    }

    writeln!(
        output,
        "Summary: {} interested | {} applied | {} enrolled | {} declined | {} enrollment rate",
        metric(&page.metrics, "interested"),
        metric(&page.metrics, "applied"),
        metric(&page.metrics, "enrolled"),
        metric(&page.metrics, "declined"),
        metric(&page.metrics, "enrollment_rate"),
    )?;
    Ok(output)
}

pub(crate) fn events(
    events: &[Event],
    spec: &FilterSpec,
    format: OutputFormat,
) -> Result<String, AppError> {
    let page = reports::event_page(events, spec);
    if format == OutputFormat::Json {
        return json_out(&page);
    }

    let mut output = String::new();
    heading(&mut output, "Events", &page.view.metrics)?;
    for row in &page.rows {
        let event = row.event;
        writeln!(
            output,
            "- #{} {} ({}) on {} at {} | {} | {}/{} registered ({:.0}% full) | {:.0}% attendance",
            event.id,
            event.name,
            event.event_type.label(),
            event.event_date,
            event.location,
            event.status.badge().label,
            event.registered_count,
            event.capacity,
            row.capacity_rate,
            row.attendance_rate
        )?;
    }
    if page.view.is_empty() {
        writeln!(output, "{NO_EVENTS}")?;
    }

    let metrics = &page.view.metrics;
    writeln!(
        output,
        "Summary: {} upcoming | {} completed | {} total attendees",
        metric(metrics, "upcoming"),
        metric(metrics, "completed"),
        metric(metrics, "total_attendees"),
    )?;
    Ok(output)
}

pub(crate) fn applications(
    applications: &[Application],
    spec: &FilterSpec,
    format: OutputFormat,
) -> Result<String, AppError> {
    let page = reports::application_page(applications, spec);
    if format == OutputFormat::Json {
        return json_out(&page);
    }

    let mut output = String::new();
    heading(&mut output, "Applications", &page.view.metrics)?;
    for application in &page.view.matches {
        let decided = application
            .decision_date
            .map(|date| format!("decided {date}"))
            .unwrap_or_else(|| "awaiting decision".to_string());
        writeln!(
            output,
            "- #{} {} <{}> | {} | {} | {} priority | applied {} | {}",
            application.id,
            application.student_name,
            application.student_email,
            application.program,
            application.status.badge().label,
            application.priority.badge().label,
            application.application_date,
            decided
        )?;
    }
    if page.view.is_empty() {
        writeln!(output, "{NO_APPLICATIONS}")?;
    }

    let metrics = &page.view.metrics;
    writeln!(
        output,
        "Summary: {} pending review | {} accepted | {} acceptance rate",
        metric(metrics, "pending_review"),
        metric(metrics, "accepted"),
        metric(metrics, "acceptance_rate"),
    )?;
    Ok(output)
}
