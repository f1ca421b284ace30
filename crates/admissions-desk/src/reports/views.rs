use serde::Serialize;

use crate::records::{ApplicationStatus, EventStatus, Priority, StudentStatus};

/// Badge color family used by the dashboard for status and priority chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Blue,
    Yellow,
    Green,
    Red,
    Purple,
    Gray,
}

impl BadgeTone {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-100 text-blue-800",
            Self::Yellow => "bg-yellow-100 text-yellow-800",
            Self::Green => "bg-green-100 text-green-800",
            Self::Red => "bg-red-100 text-red-800",
            Self::Purple => "bg-purple-100 text-purple-800",
            Self::Gray => "bg-gray-100 text-gray-800",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub label: &'static str,
    pub tone: BadgeTone,
}

/// Display metadata for an enumerated status or priority.
pub trait Badge {
    fn badge(&self) -> BadgeView;
}

impl Badge for StudentStatus {
    fn badge(&self) -> BadgeView {
        let tone = match self {
            StudentStatus::Interested => BadgeTone::Blue,
            StudentStatus::Applied => BadgeTone::Yellow,
            StudentStatus::Enrolled => BadgeTone::Green,
            StudentStatus::Declined => BadgeTone::Red,
        };
        BadgeView {
            label: self.label(),
            tone,
        }
    }
}

impl Badge for EventStatus {
    fn badge(&self) -> BadgeView {
        let tone = match self {
            EventStatus::Planned => BadgeTone::Blue,
            EventStatus::Active => BadgeTone::Green,
            EventStatus::Completed => BadgeTone::Gray,
            EventStatus::Cancelled => BadgeTone::Red,
        };
        BadgeView {
            label: self.label(),
            tone,
        }
    }
}

impl Badge for ApplicationStatus {
    fn badge(&self) -> BadgeView {
        let tone = match self {
            ApplicationStatus::Submitted => BadgeTone::Blue,
            ApplicationStatus::UnderReview => BadgeTone::Yellow,
            ApplicationStatus::Accepted => BadgeTone::Green,
            ApplicationStatus::Rejected => BadgeTone::Red,
            ApplicationStatus::Waitlisted => BadgeTone::Purple,
        };
        BadgeView {
            label: self.label(),
            tone,
        }
    }
}

impl Badge for Priority {
    fn badge(&self) -> BadgeView {
        let tone = match self {
            Priority::High => BadgeTone::Red,
            Priority::Medium => BadgeTone::Yellow,
            Priority::Low => BadgeTone::Green,
        };
        BadgeView {
            label: self.label(),
            tone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JourneyStep {
    pub stage: StudentStatus,
    pub label: &'static str,
    pub state: StepState,
}

/// Interested → applied → enrolled progress for a student's current status.
///
/// Enrollment is the last step, so an enrolled student has every step completed.
/// A declined student has left the funnel and every step reads as upcoming.
pub fn journey(status: StudentStatus) -> [JourneyStep; 3] {
    let reached = match status {
        StudentStatus::Interested => Some(0),
        StudentStatus::Applied => Some(1),
        StudentStatus::Enrolled => Some(2),
        StudentStatus::Declined => None,
    };

    let step = |index: usize, stage: StudentStatus| {
        let state = match reached {
            Some(2) => StepState::Completed,
            Some(current) if index < current => StepState::Completed,
            Some(current) if index == current => StepState::Current,
            _ => StepState::Upcoming,
        };
        JourneyStep {
            stage,
            label: stage.label(),
            state,
        }
    };

    [
        step(0, StudentStatus::Interested),
        step(1, StudentStatus::Applied),
        step(2, StudentStatus::Enrolled),
    ]
}
