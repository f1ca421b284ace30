use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::{FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    OpenHouse,
    Workshop,
    CareerFair,
    InfoSession,
    Seminar,
    Webinar,
}

impl EventType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::OpenHouse,
            Self::Workshop,
            Self::CareerFair,
            Self::InfoSession,
            Self::Seminar,
            Self::Webinar,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenHouse => "open_house",
            Self::Workshop => "workshop",
            Self::CareerFair => "career_fair",
            Self::InfoSession => "info_session",
            Self::Seminar => "seminar",
            Self::Webinar => "webinar",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OpenHouse => "Open House",
            Self::Workshop => "Workshop",
            Self::CareerFair => "Career Fair",
            Self::InfoSession => "Info Session",
            Self::Seminar => "Seminar",
            Self::Webinar => "Webinar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Planned,
    Active,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Planned, Self::Active, Self::Completed, Self::Cancelled]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Recruitment event with its registration and turnout counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub location: String,
    pub capacity: u32,
    pub registered_count: u32,
    pub attended_count: u32,
    pub status: EventStatus,
    pub created_at: NaiveDate,
}

impl Record for Event {
    const SEARCHABLE: &'static [&'static str] = &["name", "description", "location"];
    const FILTERABLE: &'static [&'static str] = &["status", "event_type"];

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Number(i64::from(self.id)),
            "name" => FieldValue::Text(&self.name),
            "description" => FieldValue::Text(&self.description),
            "event_type" => FieldValue::Text(self.event_type.as_str()),
            "event_date" => FieldValue::Date(self.event_date),
            "location" => FieldValue::Text(&self.location),
            "capacity" => FieldValue::Number(i64::from(self.capacity)),
            "registered_count" => FieldValue::Number(i64::from(self.registered_count)),
            "attended_count" => FieldValue::Number(i64::from(self.attended_count)),
            "status" => FieldValue::Text(self.status.as_str()),
            "created_at" => FieldValue::Date(self.created_at),
            _ => return None,
        };
        Some(value)
    }
}
