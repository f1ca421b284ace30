//! Entity collections handed to the engine, from CSV exports or the built-in sample.

mod parser;
mod sample;

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::engine::FilterSpec;
use crate::records::{Application, Event, Student};
use parser::{parse_rows, ApplicationRow, CsvRow, EventRow, StudentRow};

pub const STUDENTS_FILE: &str = "students.csv";
pub const EVENTS_FILE: &str = "events.csv";
pub const APPLICATIONS_FILE: &str = "applications.csv";

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed csv in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("invalid filter spec: {0}")]
    FilterSpec(#[from] serde_json::Error),
}

/// The three collections behind the dashboard pages.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub students: Vec<Student>,
    pub events: Vec<Event>,
    pub applications: Vec<Application>,
}

impl Dataset {
    /// Records the dashboard shipped with before a backing store existed.
    pub fn sample() -> Self {
        Self {
            students: sample::students(),
            events: sample::events(),
            applications: sample::applications(),
        }
    }

    /// Loads `students.csv`, `events.csv` and `applications.csv` from `dir`.
    /// A missing file yields an empty collection; a missing `dir` is an error.
    pub fn from_dir(dir: &Path) -> Result<Self, DatasetError> {
        ensure_dir(dir)?;
        let dataset = Self {
            students: load_optional::<StudentRow>(&dir.join(STUDENTS_FILE))?,
            events: load_optional::<EventRow>(&dir.join(EVENTS_FILE))?,
            applications: load_optional::<ApplicationRow>(&dir.join(APPLICATIONS_FILE))?,
        };

        info!(
            dir = %dir.display(),
            students = dataset.students.len(),
            events = dataset.events.len(),
            applications = dataset.applications.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }
}

pub fn load_students(path: &Path) -> Result<Vec<Student>, DatasetError> {
    load::<StudentRow>(path)
}

pub fn load_events(path: &Path) -> Result<Vec<Event>, DatasetError> {
    load::<EventRow>(path)
}

pub fn load_applications(path: &Path) -> Result<Vec<Application>, DatasetError> {
    load::<ApplicationRow>(path)
}

pub fn read_students<R: Read>(reader: R) -> Result<Vec<Student>, csv::Error> {
    parse_rows::<StudentRow, _>(reader)
}

pub fn read_events<R: Read>(reader: R) -> Result<Vec<Event>, csv::Error> {
    parse_rows::<EventRow, _>(reader)
}

pub fn read_applications<R: Read>(reader: R) -> Result<Vec<Application>, csv::Error> {
    parse_rows::<ApplicationRow, _>(reader)
}

/// Parses `{"query": "...", "filters": {"status": "accepted"}}`; both keys are optional.
pub fn parse_filter_spec(raw: &str) -> Result<FilterSpec, DatasetError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn load_filter_spec(path: &Path) -> Result<FilterSpec, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_filter_spec(&raw)
}

fn load<T: CsvRow>(path: &Path) -> Result<Vec<T::Record>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rows::<T, _>(file).map_err(|source| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_dir(dir: &Path) -> Result<(), DatasetError> {
    let metadata = std::fs::metadata(dir).map_err(|source| DatasetError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(DatasetError::Io {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        });
    }
    Ok(())
}

fn load_optional<T: CsvRow>(path: &Path) -> Result<Vec<T::Record>, DatasetError> {
    if !path.exists() {
        debug!(path = %path.display(), "collection file absent, using empty collection");
        return Ok(Vec::new());
    }
    load::<T>(path)
}
