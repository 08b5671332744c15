use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Canonical deadline layout, e.g. `04-20-2023 11:59 PM`.
pub const DEADLINE_FORMAT: &str = "%m-%d-%Y %I:%M %p";

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static REQUIREMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Identifier wrapper for tracked applications.
///
/// Generated once per constructed [`Application`](super::Application) and kept
/// across clones, so it names the application rather than its current value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    pub(crate) fn next() -> Self {
        let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("app-{id:06}"))
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for requirements owned by an application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequirementId(pub String);

impl RequirementId {
    pub(crate) fn next() -> Self {
        let id = REQUIREMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("req-{id:06}"))
    }
}

impl fmt::Display for RequirementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which aggregate rejected a duplicate name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Application,
    Requirement,
}

impl EntityKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Requirement => "requirement",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation errors raised by the tracker model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("{kind} named '{name}' already exists")]
    DuplicateName { kind: EntityKind, name: String },
    #[error("deadline '{value}' does not match MM-DD-YYYY hh:mm AM/PM")]
    InvalidDateFormat { value: String },
}

/// Parses a deadline in the canonical format.
///
/// Parsing is strict: the text must be exactly what [`format_deadline`] would
/// produce for the same instant, apart from the case of the meridiem.
/// Surrounding whitespace is rejected rather than stripped.
pub fn parse_deadline(text: &str) -> Result<NaiveDateTime, TrackerError> {
    let invalid = || TrackerError::InvalidDateFormat {
        value: text.to_string(),
    };

    let parsed = NaiveDateTime::parse_from_str(text, DEADLINE_FORMAT).map_err(|_| invalid())?;
    if !format_deadline(parsed).eq_ignore_ascii_case(text) {
        return Err(invalid());
    }

    Ok(parsed)
}

pub fn format_deadline(deadline: NaiveDateTime) -> String {
    deadline.format(DEADLINE_FORMAT).to_string()
}
