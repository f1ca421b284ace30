use chrono::NaiveDate;

use crate::records::{
    Application, ApplicationStatus, Event, EventStatus, EventType, LeadSource, Priority, Student,
    StudentStatus,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample dates are valid calendar days")
}

fn student(
    id: u32,
    first_name: &str,
    last_name: &str,
    status: StudentStatus,
    source: LeadSource,
    created_at: NaiveDate,
    last_interaction: NaiveDate,
) -> Student {
    Student {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@email.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: format!("555-{:04}", 100 + id),
        status,
        source,
        created_at,
        last_interaction,
    }
}

pub(crate) fn students() -> Vec<Student> {
    vec![
        student(
            1,
            "John",
            "Doe",
            StudentStatus::Interested,
            LeadSource::Website,
            day(2024, 1, 15),
            day(2024, 1, 20),
        ),
        student(
            2,
            "Jane",
            "Smith",
            StudentStatus::Applied,
            LeadSource::Referral,
            day(2024, 1, 10),
            day(2024, 1, 18),
        ),
        student(
            3,
            "Mike",
            "Johnson",
            StudentStatus::Enrolled,
            LeadSource::OpenHouse,
            day(2024, 1, 5),
            day(2024, 1, 19),
        ),
        student(
            4,
            "Sarah",
            "Williams",
            StudentStatus::Interested,
            LeadSource::SocialMedia,
            day(2024, 1, 12),
            day(2024, 1, 17),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: u32,
    name: &str,
    description: &str,
    event_type: EventType,
    event_date: NaiveDate,
    location: &str,
    (capacity, registered_count, attended_count): (u32, u32, u32),
    status: EventStatus,
    created_at: NaiveDate,
) -> Event {
    Event {
        id,
        name: name.to_string(),
        description: description.to_string(),
        event_type,
        event_date,
        location: location.to_string(),
        capacity,
        registered_count,
        attended_count,
        status,
        created_at,
    }
}

pub(crate) fn events() -> Vec<Event> {
    vec![
        event(
            1,
            "Spring Open House",
            "Campus tour and program information session",
            EventType::OpenHouse,
            day(2024, 3, 15),
            "Main Campus",
            (100, 85, 72),
            EventStatus::Completed,
            day(2024, 2, 1),
        ),
        event(
            2,
            "Web Development Workshop",
            "Hands-on coding workshop for beginners",
            EventType::Workshop,
            day(2024, 3, 22),
            "Tech Lab",
            (30, 28, 25),
            EventStatus::Completed,
            day(2024, 2, 15),
        ),
        event(
            3,
            "Career Fair",
            "Meet with industry professionals and alumni",
            EventType::CareerFair,
            day(2024, 4, 10),
            "Student Center",
            (200, 150, 135),
            EventStatus::Completed,
            day(2024, 3, 1),
        ),
        event(
            4,
            "Summer Information Session",
            "Learn about summer programs and courses",
            EventType::InfoSession,
            day(2024, 5, 20),
            "Online",
            (50, 45, 42),
            EventStatus::Completed,
            day(2024, 4, 1),
        ),
        event(
            5,
            "Fall Open House",
            "Campus tour and program information session",
            EventType::OpenHouse,
            day(2024, 9, 15),
            "Main Campus",
            (120, 95, 0),
            EventStatus::Planned,
            day(2024, 8, 1),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn application(
    id: u32,
    student_id: u32,
    student_name: &str,
    program: &str,
    application_date: NaiveDate,
    status: ApplicationStatus,
    priority: Priority,
    reviewer_notes: &str,
    decision_date: Option<NaiveDate>,
    documents: &[&str],
) -> Application {
    Application {
        id,
        student_id,
        student_name: student_name.to_string(),
        student_email: format!("{}@email.com", student_name.to_lowercase().replace(' ', ".")),
        program: program.to_string(),
        application_date,
        status,
        priority,
        reviewer_notes: reviewer_notes.to_string(),
        decision_date,
        documents: documents.iter().map(|doc| doc.to_string()).collect(),
    }
}

pub(crate) fn applications() -> Vec<Application> {
    vec![
        application(
            1,
            2,
            "Jane Smith",
            "Computer Science",
            day(2024, 1, 22),
            ApplicationStatus::UnderReview,
            Priority::High,
            "Strong technical background, excellent portfolio",
            None,
            &["transcript", "portfolio", "essay"],
        ),
        application(
            2,
            3,
            "Mike Johnson",
            "Web Development",
            day(2024, 1, 18),
            ApplicationStatus::Accepted,
            Priority::Medium,
            "Great practical experience, good fit for program",
            Some(day(2024, 1, 28)),
            &["transcript", "portfolio"],
        ),
        application(
            3,
            5,
            "David Brown",
            "Data Science",
            day(2024, 1, 25),
            ApplicationStatus::Submitted,
            Priority::Medium,
            "",
            None,
            &["transcript", "essay"],
        ),
        application(
            4,
            6,
            "Lisa Davis",
            "Computer Science",
            day(2024, 1, 20),
            ApplicationStatus::Accepted,
            Priority::High,
            "Exceptional academic record, strong recommendations",
            Some(day(2024, 1, 30)),
            &["transcript", "portfolio", "essay", "recommendations"],
        ),
        application(
            5,
            7,
            "Tom Wilson",
            "Web Development",
            day(2024, 1, 15),
            ApplicationStatus::Rejected,
            Priority::Low,
            "Did not meet technical requirements",
            Some(day(2024, 1, 25)),
            &["transcript"],
        ),
    ]
}
