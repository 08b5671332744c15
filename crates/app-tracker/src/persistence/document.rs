use serde::{Deserialize, Serialize};

use crate::tracker::{Application, ApplicationList, Requirement};

/// On-disk layout of an application list.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ApplicationListDocument {
    pub(crate) applications: Vec<ApplicationEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ApplicationEntry {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) status: bool,
    #[serde(default)]
    pub(crate) progress: i64,
    #[serde(default)]
    pub(crate) deadline: String,
    #[serde(rename = "required documents", default)]
    pub(crate) required_documents: Vec<RequirementEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RequirementEntry {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) status: bool,
    #[serde(rename = "uploaded document", default)]
    pub(crate) uploaded_document: String,
}

impl From<&ApplicationList> for ApplicationListDocument {
    fn from(list: &ApplicationList) -> Self {
        Self {
            applications: list.applications().iter().map(ApplicationEntry::from).collect(),
        }
    }
}

impl From<&Application> for ApplicationEntry {
    fn from(application: &Application) -> Self {
        Self {
            name: application.name().to_string(),
            category: application.category().to_string(),
            status: application.is_completed(),
            progress: i64::from(application.progress()),
            deadline: application.deadline_text().to_string(),
            required_documents: application
                .requirements()
                .iter()
                .map(RequirementEntry::from)
                .collect(),
        }
    }
}

impl From<&Requirement> for RequirementEntry {
    fn from(requirement: &Requirement) -> Self {
        Self {
            name: requirement.name().to_string(),
            status: requirement.is_completed(),
            uploaded_document: requirement
                .attached_file()
                .map(|path| path.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}
