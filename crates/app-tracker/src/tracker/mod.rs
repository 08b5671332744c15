//! Application tracking model: applications, their required documents, and
//! the list that owns them.

mod application;
pub mod domain;
pub mod events;
mod list;
pub mod opener;
mod requirement;

#[cfg(test)]
mod tests;

pub use application::Application;
pub use domain::{
    format_deadline, parse_deadline, ApplicationId, EntityKind, RequirementId, TrackerError,
    DEADLINE_FORMAT,
};
pub use events::{EventSink, MemoryEventLog, SharedEventSink, TrackerEvent, TracingEventSink};
pub use list::ApplicationList;
pub use opener::{DocumentOpener, OpenError, SystemOpener};
pub use requirement::Requirement;
