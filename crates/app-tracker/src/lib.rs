//! Personal application tracker: applications, their required documents,
//! derived progress, and the JSON store they are saved to.

pub mod config;
pub mod error;
pub mod persistence;
pub mod telemetry;
pub mod tracker;

pub use persistence::{ApplicationListReader, ApplicationListWriter, PersistenceError};
pub use tracker::{Application, ApplicationList, Requirement, TrackerError};
