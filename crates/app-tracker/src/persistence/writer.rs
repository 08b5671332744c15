use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use super::document::ApplicationListDocument;
use super::PersistenceError;
use crate::tracker::ApplicationList;

/// Serializes an [`ApplicationList`] into its JSON document.
pub struct ApplicationListWriter;

impl ApplicationListWriter {
    /// Writes the whole document to `path`, replacing any previous content.
    ///
    /// The document goes to a temporary file beside `path` and is renamed over
    /// it once fully flushed. A failed save leaves the previous file as it was.
    pub fn to_path<P: AsRef<Path>>(
        list: &ApplicationList,
        path: P,
    ) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let bytes = Self::to_bytes(list)?;

        Self::replace(path, &bytes).map_err(|source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), applications = list.len(), "saved application list");
        Ok(())
    }

    pub fn to_writer<W: Write>(
        list: &ApplicationList,
        mut writer: W,
    ) -> Result<(), PersistenceError> {
        let bytes = Self::to_bytes(list)?;
        writer.write_all(&bytes).map_err(PersistenceError::Stream)?;
        writer.flush().map_err(PersistenceError::Stream)
    }

    fn replace(path: &Path, bytes: &[u8]) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(bytes)?;
        staged.as_file().sync_all()?;
        staged.persist(path).map_err(|err| err.error)?;
        Ok(())
    }

    fn to_bytes(list: &ApplicationList) -> Result<Vec<u8>, PersistenceError> {
        let document = ApplicationListDocument::from(list);
        serde_json::to_vec_pretty(&document).map_err(PersistenceError::Malformed)
    }
}
