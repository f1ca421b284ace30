use std::fs;
use std::path::PathBuf;

use admissions_desk::dataset::{
    load_filter_spec, load_students, read_applications, read_events, read_students, Dataset,
    DatasetError, STUDENTS_FILE,
};
use admissions_desk::engine::{filter, FilterSpec};
use admissions_desk::records::{ApplicationStatus, EventType, LeadSource, StudentStatus};
use chrono::NaiveDate;

const STUDENTS_CSV: &str = "\
id,first_name,last_name,email,phone,status,source,created_at,last_interaction
1,John,Doe,john.doe@email.com,555-0123,interested,website,2024-01-15,2024-01-20
2, Jane ,Smith,jane.smith@email.com,,applied,referral,2024-01-10,2024-01-18
";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "admissions-desk-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("scratch dir created");
    dir
}

#[test]
fn students_csv_trims_fields_and_decodes_codes() {
    let students = read_students(STUDENTS_CSV.as_bytes()).expect("students parse");

    assert_eq!(students.len(), 2);
    assert_eq!(students[1].first_name, "Jane");
    assert_eq!(students[1].phone, "");
    assert_eq!(students[1].status, StudentStatus::Applied);
    assert_eq!(students[0].source, LeadSource::Website);
    assert_eq!(
        students[0].last_interaction,
        NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid date")
    );
}

#[test]
fn events_csv_defaults_missing_counts() {
    let csv = "\
id,name,description,event_type,event_date,location,capacity,registered_count,attended_count,status,created_at
7,Portfolio Review,,seminar,2024-06-01,Room 4,40,,,planned,2024-05-01
";
    let events = read_events(csv.as_bytes()).expect("events parse");

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EventType::Seminar);
    assert_eq!(events[0].registered_count, 0);
    assert_eq!(events[0].attended_count, 0);
    assert_eq!(events[0].description, "");
}

#[test]
fn applications_csv_feeds_the_filter() {
    let csv = "\
id,student_id,student_name,student_email,program,application_date,status,priority,reviewer_notes,decision_date,documents
1,2,Jane Smith,jane.smith@email.com,Computer Science,2024-01-22,under_review,high,,,transcript;portfolio
2,3,Mike Johnson,mike.johnson@email.com,Web Development,2024-01-18,accepted,medium,Good fit,2024-01-28,transcript
";
    let applications = read_applications(csv.as_bytes()).expect("applications parse");
    assert_eq!(applications[0].documents, vec!["transcript", "portfolio"]);
    assert_eq!(
        applications[1].decision_date,
        NaiveDate::from_ymd_opt(2024, 1, 28)
    );

    let spec = FilterSpec::new().field("status", "accepted");
    let matches = filter(&applications, &spec);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].status, ApplicationStatus::Accepted);
}

#[test]
fn from_dir_treats_missing_files_as_empty() {
    let dir = scratch_dir("partial");
    fs::write(dir.join(STUDENTS_FILE), STUDENTS_CSV).expect("students written");

    let dataset = Dataset::from_dir(&dir).expect("dataset loads");
    assert_eq!(dataset.students.len(), 2);
    assert!(dataset.events.is_empty());
    assert!(dataset.applications.is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn from_dir_rejects_missing_or_non_directory_path() {
    let dir = scratch_dir("missing-root");
    let missing = dir.join("no-such-dir");

    let err = Dataset::from_dir(&missing).expect_err("missing directory rejected");
    match &err {
        DatasetError::Io { path, .. } => assert_eq!(path, &missing),
        other => panic!("expected io error, got {other:?}"),
    }

    let file = dir.join(STUDENTS_FILE);
    fs::write(&file, STUDENTS_CSV).expect("students written");
    let err = Dataset::from_dir(&file).expect_err("file is not a data directory");
    assert!(matches!(err, DatasetError::Io { .. }));
    assert!(err.to_string().contains("not a directory"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_csv_reports_the_file() {
    let dir = scratch_dir("malformed");
    let path = dir.join(STUDENTS_FILE);
    fs::write(
        &path,
        "id,first_name,last_name,email,phone,status,source,created_at,last_interaction\n\
         x,Ana,Lopez,ana@email.com,,interested,website,2024-01-15,2024-01-20\n",
    )
    .expect("students written");

    let err = Dataset::from_dir(&dir).expect_err("bad id rejected");
    match &err {
        DatasetError::Csv { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected csv error, got {other:?}"),
    }
    assert!(err.to_string().contains("students.csv"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn explicit_load_requires_the_file() {
    let dir = scratch_dir("explicit");
    let err = load_students(&dir.join(STUDENTS_FILE)).expect_err("missing file");
    assert!(matches!(err, DatasetError::Io { .. }));

    let spec_path = dir.join("spec.json");
    fs::write(&spec_path, r#"{"filters": {"source": "referral"}}"#).expect("spec written");
    let spec = load_filter_spec(&spec_path).expect("spec loads");
    let students = read_students(STUDENTS_CSV.as_bytes()).expect("students parse");
    assert_eq!(filter(&students, &spec).len(), 1);

    let _ = fs::remove_dir_all(&dir);
}
