use crate::config::ConfigError;
use crate::persistence::PersistenceError;
use crate::telemetry::TelemetryError;
use crate::tracker::{OpenError, TrackerError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Tracker(TrackerError),
    Persistence(PersistenceError),
    Open(OpenError),
    NotFound { kind: &'static str, name: String },
    InvalidFile { path: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Tracker(err) => write!(f, "{}", err),
            AppError::Persistence(err) => write!(f, "{}", err),
            AppError::Open(err) => write!(f, "{}", err),
            AppError::NotFound { kind, name } => write!(f, "no {} named '{}'", kind, name),
            AppError::InvalidFile { path } => {
                write!(f, "'{}' is not a readable file", path)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Tracker(err) => Some(err),
            AppError::Persistence(err) => Some(err),
            AppError::Open(err) => Some(err),
            AppError::NotFound { .. } | AppError::InvalidFile { .. } => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<TrackerError> for AppError {
    fn from(value: TrackerError) -> Self {
        Self::Tracker(value)
    }
}

impl From<PersistenceError> for AppError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

impl From<OpenError> for AppError {
    fn from(value: OpenError) -> Self {
        Self::Open(value)
    }
}
