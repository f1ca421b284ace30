//! Entity types shown on the students, events and applications pages.

mod application;
mod event;
mod student;

pub use application::{Application, ApplicationStatus, Priority};
pub use event::{Event, EventStatus, EventType};
pub use student::{LeadSource, Student, StudentStatus};
