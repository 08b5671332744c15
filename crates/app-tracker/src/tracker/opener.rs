use std::io;
use std::path::{Path, PathBuf};

/// Capability for handing a document to whatever the host uses to view it.
pub trait DocumentOpener {
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Opens documents with the platform's default application.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl DocumentOpener for SystemOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        open::that(path)
    }
}

/// Error raised when an attached document cannot be opened.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("requirement '{requirement}' has no attached file")]
    NoFileAttached { requirement: String },
    #[error("failed to open '{}': {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
