use std::fmt;
use std::sync::{Arc, Mutex};

use serde::Serialize;

/// Mutation notifications emitted by applications and application lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackerEvent {
    ApplicationAdded {
        application: String,
    },
    ApplicationRemoved {
        application: String,
    },
    RequirementAdded {
        application: String,
        requirement: String,
    },
    RequirementRemoved {
        application: String,
        requirement: String,
    },
    RequirementStatusChanged {
        application: String,
        requirement: String,
        completed: bool,
    },
    DeadlineSet {
        application: String,
        deadline: String,
    },
    DeadlineCleared {
        application: String,
    },
    CategorySet {
        application: String,
        category: String,
    },
}

impl fmt::Display for TrackerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApplicationAdded { application } => {
                write!(f, "Added application {application}")
            }
            Self::ApplicationRemoved { application } => {
                write!(f, "Removed application {application}")
            }
            Self::RequirementAdded {
                application,
                requirement,
            } => write!(f, "Added requirement {requirement} for {application}"),
            Self::RequirementRemoved {
                application,
                requirement,
            } => write!(f, "Removed requirement {requirement} for {application}"),
            Self::RequirementStatusChanged {
                application,
                requirement,
                completed,
            } => {
                let state = if *completed { "completed" } else { "not completed" };
                write!(f, "Marked requirement {requirement} for {application} as {state}")
            }
            Self::DeadlineSet {
                application,
                deadline,
            } => write!(f, "Set the deadline {deadline} for {application}"),
            Self::DeadlineCleared { application } => {
                write!(f, "Cleared the deadline for {application}")
            }
            Self::CategorySet {
                application,
                category,
            } => write!(f, "Set category {category} for {application}"),
        }
    }
}

/// Observer hook for model mutations (e.g., an audit log or console printer).
pub trait EventSink: Send + Sync {
    fn record(&self, event: &TrackerEvent);
}

/// Shared handle stored by the model.
pub type SharedEventSink = Arc<dyn EventSink>;

/// In-memory event log, useful for printing a session history.
#[derive(Debug, Default, Clone)]
pub struct MemoryEventLog {
    events: Arc<Mutex<Vec<TrackerEvent>>>,
}

impl MemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TrackerEvent> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.events.lock() {
            guard.clear();
        }
    }
}

impl EventSink for MemoryEventLog {
    fn record(&self, event: &TrackerEvent) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event.clone());
        }
    }
}

/// Forwards every event to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn record(&self, event: &TrackerEvent) {
        tracing::info!(target: "app_tracker::events", ?event, "{event}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_log_keeps_insertion_order() {
        let log = MemoryEventLog::new();
        log.record(&TrackerEvent::ApplicationAdded {
            application: "BCIT".to_string(),
        });
        log.record(&TrackerEvent::CategorySet {
            application: "BCIT".to_string(),
            category: "school".to_string(),
        });

        assert_eq!(
            log.descriptions(),
            vec!["Added application BCIT", "Set category school for BCIT"]
        );

        log.clear();
        assert!(log.events().is_empty());
    }

    #[test]
    fn clones_share_the_same_log() {
        let log = MemoryEventLog::new();
        let handle: SharedEventSink = Arc::new(log.clone());
        handle.record(&TrackerEvent::DeadlineCleared {
            application: "UBC".to_string(),
        });
        assert_eq!(log.events().len(), 1);
    }
}
