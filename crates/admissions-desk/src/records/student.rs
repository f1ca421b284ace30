use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::{FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    Interested,
    Applied,
    Enrolled,
    Declined,
}

impl StudentStatus {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Interested,
            Self::Applied,
            Self::Enrolled,
            Self::Declined,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interested => "interested",
            Self::Applied => "applied",
            Self::Enrolled => "enrolled",
            Self::Declined => "declined",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Interested => "Interested",
            Self::Applied => "Applied",
            Self::Enrolled => "Enrolled",
            Self::Declined => "Declined",
        }
    }
}

/// Channel through which a lead first reached the office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    Website,
    Referral,
    OpenHouse,
    SocialMedia,
    Events,
}

impl LeadSource {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Website,
            Self::Referral,
            Self::OpenHouse,
            Self::SocialMedia,
            Self::Events,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Referral => "referral",
            Self::OpenHouse => "open_house",
            Self::SocialMedia => "social_media",
            Self::Events => "events",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Referral => "Referral",
            Self::OpenHouse => "Open House",
            Self::SocialMedia => "Social Media",
            Self::Events => "Events",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub status: StudentStatus,
    pub source: LeadSource,
    pub created_at: NaiveDate,
    pub last_interaction: NaiveDate,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Student {
    const SEARCHABLE: &'static [&'static str] = &["first_name", "last_name", "email"];
    const FILTERABLE: &'static [&'static str] = &["status", "source"];

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Number(i64::from(self.id)),
            "first_name" => FieldValue::Text(&self.first_name),
            "last_name" => FieldValue::Text(&self.last_name),
            "email" => FieldValue::Text(&self.email),
            "phone" => FieldValue::Text(&self.phone),
            "status" => FieldValue::Text(self.status.as_str()),
            "source" => FieldValue::Text(self.source.as_str()),
            "created_at" => FieldValue::Date(self.created_at),
            "last_interaction" => FieldValue::Date(self.last_interaction),
            _ => return None,
        };
        Some(value)
    }
}
