use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::{FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    UnderReview,
    Accepted,
    Rejected,
    Waitlisted,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Submitted,
            Self::UnderReview,
            Self::Accepted,
            Self::Rejected,
            Self::Waitlisted,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::UnderReview => "under_review",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Waitlisted => "waitlisted",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::UnderReview => "Under Review",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Waitlisted => "Waitlisted",
        }
    }

    /// Awaiting a reviewer decision.
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Submitted | Self::UnderReview)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: u32,
    pub student_id: u32,
    pub student_name: String,
    pub student_email: String,
    pub program: String,
    pub application_date: NaiveDate,
    pub status: ApplicationStatus,
    pub priority: Priority,
    pub reviewer_notes: String,
    pub decision_date: Option<NaiveDate>,
    pub documents: Vec<String>,
}

impl Record for Application {
    const SEARCHABLE: &'static [&'static str] = &["student_name", "student_email", "program"];
    const FILTERABLE: &'static [&'static str] = &["status", "program", "priority"];

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Number(i64::from(self.id)),
            "student_id" => FieldValue::Number(i64::from(self.student_id)),
            "student_name" => FieldValue::Text(&self.student_name),
            "student_email" => FieldValue::Text(&self.student_email),
            "program" => FieldValue::Text(&self.program),
            "application_date" => FieldValue::Date(self.application_date),
            "status" => FieldValue::Text(self.status.as_str()),
            "priority" => FieldValue::Text(self.priority.as_str()),
            "reviewer_notes" => FieldValue::Text(&self.reviewer_notes),
            "decision_date" => FieldValue::Date(self.decision_date?),
            "decided" => FieldValue::Flag(self.decision_date.is_some()),
            "document_count" => FieldValue::Number(self.documents.len() as i64),
            _ => return None,
        };
        Some(value)
    }
}
