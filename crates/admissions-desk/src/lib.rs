pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod records;
pub mod reports;
pub mod telemetry;
