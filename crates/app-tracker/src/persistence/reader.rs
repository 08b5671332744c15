use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use super::document::{ApplicationEntry, ApplicationListDocument, RequirementEntry};
use super::PersistenceError;
use crate::tracker::{Application, ApplicationList, Requirement};

/// Rebuilds an [`ApplicationList`] from its JSON document.
pub struct ApplicationListReader;

impl ApplicationListReader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ApplicationList, PersistenceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PersistenceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), applications = list.len(), "loaded application list");
        Ok(list)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ApplicationList, PersistenceError> {
        let document: ApplicationListDocument =
            serde_json::from_reader(reader).map_err(PersistenceError::Malformed)?;

        let mut list = ApplicationList::new();
        for entry in document.applications {
            if let Err(err) = list.add(restore_application(entry)) {
                warn!(%err, "skipping repeated application");
            }
        }

        Ok(list)
    }
}

fn restore_application(entry: ApplicationEntry) -> Application {
    let mut application = Application::new(entry.name);
    application.set_category(entry.category);

    if let Err(err) = application.set_deadline(&entry.deadline) {
        warn!(application = application.name(), %err, "skipping unreadable deadline");
    }

    let name = application.name().to_string();
    for requirement in entry.required_documents {
        if let Err(err) = application.push_requirement(restore_requirement(&name, requirement)) {
            warn!(application = %name, %err, "skipping repeated requirement");
        }
    }

    let progress = u8::try_from(entry.progress.clamp(0, 100)).unwrap_or_default();
    application.restore_progress(entry.status, progress);
    application
}

fn restore_requirement(application: &str, entry: RequirementEntry) -> Requirement {
    let mut requirement = Requirement::new(entry.name);
    requirement.change_status(entry.status);

    if !entry.uploaded_document.is_empty() && !requirement.attach_file(&entry.uploaded_document) {
        warn!(
            application,
            requirement = requirement.name(),
            path = %entry.uploaded_document,
            "dropping attachment that is no longer readable"
        );
    }

    requirement
}
