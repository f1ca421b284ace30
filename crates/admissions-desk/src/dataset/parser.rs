use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::records::{
    Application, ApplicationStatus, Event, EventStatus, EventType, LeadSource, Priority, Student,
    StudentStatus,
};

/// CSV row shape of an entity, converted into the record after decoding.
pub(crate) trait CsvRow: DeserializeOwned {
    type Record;

    fn into_record(self) -> Self::Record;
}

pub(crate) fn parse_rows<T: CsvRow, R: Read>(reader: R) -> Result<Vec<T::Record>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<T>() {
        records.push(row?.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
pub(crate) struct StudentRow {
    id: u32,
    first_name: String,
    last_name: String,
    email: String,
    #[serde(default)]
    phone: String,
    status: StudentStatus,
    source: LeadSource,
    created_at: NaiveDate,
    last_interaction: NaiveDate,
}

impl CsvRow for StudentRow {
    type Record = Student;

    fn into_record(self) -> Student {
        Student {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            status: self.status,
            source: self.source,
            created_at: self.created_at,
            last_interaction: self.last_interaction,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventRow {
    id: u32,
    name: String,
    #[serde(default)]
    description: String,
    event_type: EventType,
    event_date: NaiveDate,
    location: String,
    capacity: u32,
    #[serde(default)]
    registered_count: Option<u32>,
    #[serde(default)]
    attended_count: Option<u32>,
    status: EventStatus,
    created_at: NaiveDate,
}

impl CsvRow for EventRow {
    type Record = Event;

    fn into_record(self) -> Event {
        Event {
            id: self.id,
            name: self.name,
            description: self.description,
            event_type: self.event_type,
            event_date: self.event_date,
            location: self.location,
            capacity: self.capacity,
            registered_count: self.registered_count.unwrap_or_default(),
            attended_count: self.attended_count.unwrap_or_default(),
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplicationRow {
    id: u32,
    student_id: u32,
    student_name: String,
    student_email: String,
    program: String,
    application_date: NaiveDate,
    status: ApplicationStatus,
    priority: Priority,
    #[serde(default)]
    reviewer_notes: String,
    #[serde(default, deserialize_with = "empty_string_as_no_date")]
    decision_date: Option<NaiveDate>,
    #[serde(default)]
    documents: String,
}

impl CsvRow for ApplicationRow {
    type Record = Application;

    fn into_record(self) -> Application {
        Application {
            id: self.id,
            student_id: self.student_id,
            student_name: self.student_name,
            student_email: self.student_email,
            program: self.program,
            application_date: self.application_date,
            status: self.status,
            priority: self.priority,
            reviewer_notes: self.reviewer_notes,
            decision_date: self.decision_date,
            documents: split_documents(&self.documents),
        }
    }
}

fn split_documents(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|doc| !doc.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_no_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|err| {
                serde::de::Error::custom(format!("invalid date '{value}' ({err})"))
            }),
    }
}
