use std::fs::File;
use std::path::{Path, PathBuf};

use super::domain::RequirementId;
use super::opener::{DocumentOpener, OpenError};

/// A single required document tracked under an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    id: RequirementId,
    name: String,
    completed: bool,
    attached_file: Option<PathBuf>,
}

impl Requirement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: RequirementId::next(),
            name: name.into(),
            completed: false,
            attached_file: None,
        }
    }

    pub fn id(&self) -> &RequirementId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn attached_file(&self) -> Option<&Path> {
        self.attached_file.as_deref()
    }

    /// Sets the completion flag and returns it.
    ///
    /// The owning application does not observe this call; follow it with
    /// [`Application::recompute`](super::Application::recompute), or use
    /// [`Application::change_requirement_status`](super::Application::change_requirement_status).
    pub fn change_status(&mut self, completed: bool) -> bool {
        self.completed = completed;
        self.completed
    }

    /// Records `path` when it names an existing, readable regular file.
    pub fn attach_file(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        if !is_readable_file(path) {
            return false;
        }

        self.attached_file = Some(path.to_path_buf());
        true
    }

    /// Forgets the attachment. The file itself is left alone.
    pub fn detach_file(&mut self) {
        self.attached_file = None;
    }

    pub fn open_attached_file(&self, opener: &dyn DocumentOpener) -> Result<(), OpenError> {
        let path = self
            .attached_file
            .as_deref()
            .ok_or_else(|| OpenError::NoFileAttached {
                requirement: self.name.clone(),
            })?;

        opener.open(path).map_err(|source| OpenError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn is_readable_file(path: &Path) -> bool {
    if path.as_os_str().is_empty() || !path.is_file() {
        return false;
    }
    File::open(path).is_ok()
}
