use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    /// `ADMISSIONS_LOG_LEVEL` is not a valid filter directive.
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => write!(
                f,
                "ADMISSIONS_LOG_LEVEL '{value}' is not a valid log filter (set RUST_LOG to override it)"
            ),
            TelemetryError::Subscriber(err) => {
                write!(f, "console log subscriber already installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// `RUST_LOG` when it parses, otherwise the configured `ADMISSIONS_LOG_LEVEL`.
fn console_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(log_level).map_err(|source| TelemetryError::EnvFilter {
        value: log_level.to_string(),
        source,
    })
}

/// Installs the global subscriber for the console.
///
/// Output goes to stderr so rendered tables and JSON on stdout stay clean.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(console_filter(&config.log_level)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_log_level_names_its_variable() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        let err = console_filter("admissions_desk=loudest").expect_err("level is rejected");
        let message = err.to_string();
        assert!(message.contains("ADMISSIONS_LOG_LEVEL"));
        assert!(message.contains("admissions_desk=loudest"));
        assert!(message.contains("RUST_LOG"));
    }

    #[test]
    fn configured_level_builds_a_filter() {
        assert!(console_filter("debug").is_ok());
    }
}
