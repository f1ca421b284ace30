//! Metric sets and display metadata for the dashboard pages.

mod analytics;
mod pages;
pub mod views;

pub use analytics::{
    dashboard, event_performance, lead_sources, DashboardSummary, EventTypePerformance,
    SourceShare,
};
pub use pages::{
    application_metrics, application_page, event_metrics, event_page, pipeline, student_metrics,
    student_page, ApplicationPage, EventPage, EventRates, PipelineStage, MATCHING, TOTAL,
};
