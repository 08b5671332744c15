//! JSON persistence for application lists.
//!
//! The document keeps the field names of the historical save files
//! (`"required documents"`, `"uploaded document"`), so existing stores load
//! unchanged.

mod document;
mod reader;
mod writer;

use std::path::PathBuf;

pub use reader::ApplicationListReader;
pub use writer::ApplicationListWriter;

/// Failures while loading or saving an application list.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("unable to read from file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to write to file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stream error: {0}")]
    Stream(#[source] std::io::Error),
    #[error("malformed application list document: {0}")]
    Malformed(#[source] serde_json::Error),
}
