use std::fmt;

use chrono::{NaiveDateTime, Timelike};

use super::domain::{
    format_deadline, parse_deadline, ApplicationId, EntityKind, RequirementId, TrackerError,
};
use super::events::{SharedEventSink, TrackerEvent};
use super::requirement::Requirement;

/// A tracked job, school, or grant application and its requirement checklist.
///
/// `progress` and `completed` are derived from the requirements and kept in
/// step by every mutation that goes through the application.
#[derive(Clone)]
pub struct Application {
    id: ApplicationId,
    name: String,
    deadline: Option<NaiveDateTime>,
    deadline_text: String,
    category: String,
    requirements: Vec<Requirement>,
    progress: u8,
    completed: bool,
    sink: Option<SharedEventSink>,
}

impl fmt::Debug for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Application")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("deadline", &self.deadline)
            .field("deadline_text", &self.deadline_text)
            .field("category", &self.category)
            .field("requirements", &self.requirements)
            .field("progress", &self.progress)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}

impl Application {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ApplicationId::next(),
            name: name.into(),
            deadline: None,
            deadline_text: String::new(),
            category: String::new(),
            requirements: Vec::new(),
            progress: 0,
            completed: false,
            sink: None,
        }
    }

    pub fn id(&self) -> &ApplicationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn deadline(&self) -> Option<NaiveDateTime> {
        self.deadline
    }

    /// Display form of the deadline; empty when none is set.
    pub fn deadline_text(&self) -> &str {
        &self.deadline_text
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn requirement(&self, id: &RequirementId) -> Option<&Requirement> {
        self.requirements.iter().find(|req| req.id() == id)
    }

    /// Direct access to a requirement. Call [`Application::recompute`] after
    /// changing its status.
    pub fn requirement_mut(&mut self, id: &RequirementId) -> Option<&mut Requirement> {
        self.requirements.iter_mut().find(|req| req.id() == id)
    }

    pub fn requirement_by_name(&self, name: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|req| req.name() == name)
    }

    pub fn set_event_sink(&mut self, sink: Option<SharedEventSink>) {
        self.sink = sink;
    }

    pub fn add_requirement(
        &mut self,
        requirement: Requirement,
    ) -> Result<RequirementId, TrackerError> {
        let id = self.push_requirement(requirement)?;
        self.recompute();
        Ok(id)
    }

    /// Removes the requirement with the given id; absent ids are ignored.
    pub fn remove_requirement(&mut self, id: &RequirementId) -> Option<Requirement> {
        let removed = self
            .requirements
            .iter()
            .position(|req| req.id() == id)
            .map(|index| self.requirements.remove(index));
        self.recompute();

        if let Some(requirement) = &removed {
            self.notify(TrackerEvent::RequirementRemoved {
                application: self.name.clone(),
                requirement: requirement.name().to_string(),
            });
        }

        removed
    }

    /// Sets a requirement's status and refreshes progress. Returns `None` when
    /// the requirement does not belong to this application.
    pub fn change_requirement_status(
        &mut self,
        id: &RequirementId,
        completed: bool,
    ) -> Option<bool> {
        let requirement = self.requirements.iter_mut().find(|req| req.id() == id)?;
        let status = requirement.change_status(completed);
        let requirement = requirement.name().to_string();
        self.recompute();

        self.notify(TrackerEvent::RequirementStatusChanged {
            application: self.name.clone(),
            requirement,
            completed: status,
        });
        Some(status)
    }

    /// Recomputes `progress` and `completed` from the requirement set.
    ///
    /// An application without requirements is 0% and not completed.
    pub fn recompute(&mut self) {
        let total = self.requirements.len();
        let done = self
            .requirements
            .iter()
            .filter(|req| req.is_completed())
            .count();

        if total == 0 {
            self.completed = false;
            self.progress = 0;
        } else if done == total {
            self.completed = true;
            self.progress = 100;
        } else {
            self.completed = false;
            // done < total, so the quotient is below 100
            self.progress = (done * 100 / total) as u8;
        }
    }

    /// Sets the deadline from text in the `MM-DD-YYYY hh:mm AM/PM` layout.
    ///
    /// An empty string clears the deadline. On a parse failure the previous
    /// deadline is kept.
    pub fn set_deadline(&mut self, text: &str) -> Result<(), TrackerError> {
        if text.is_empty() {
            self.clear_deadline();
            return Ok(());
        }

        let deadline = parse_deadline(text)?;
        self.deadline = Some(deadline);
        self.deadline_text = text.to_string();

        self.notify(TrackerEvent::DeadlineSet {
            application: self.name.clone(),
            deadline: self.deadline_text.clone(),
        });
        Ok(())
    }

    /// Sets the deadline from a timestamp, regenerating the display text.
    ///
    /// The timestamp is truncated to the minute, the precision the display
    /// text carries.
    pub fn set_deadline_at(&mut self, deadline: NaiveDateTime) {
        let deadline = deadline
            .with_second(0)
            .and_then(|value| value.with_nanosecond(0))
            .unwrap_or(deadline);
        self.deadline = Some(deadline);
        self.deadline_text = format_deadline(deadline);

        self.notify(TrackerEvent::DeadlineSet {
            application: self.name.clone(),
            deadline: self.deadline_text.clone(),
        });
    }

    pub fn clear_deadline(&mut self) {
        let had_deadline = self.deadline.take().is_some();
        self.deadline_text.clear();

        if had_deadline {
            self.notify(TrackerEvent::DeadlineCleared {
                application: self.name.clone(),
            });
        }
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();

        self.notify(TrackerEvent::CategorySet {
            application: self.name.clone(),
            category: self.category.clone(),
        });
    }

    /// Appends without recomputing; used when restoring persisted state.
    pub(crate) fn push_requirement(
        &mut self,
        requirement: Requirement,
    ) -> Result<RequirementId, TrackerError> {
        if self
            .requirements
            .iter()
            .any(|existing| existing.name() == requirement.name())
        {
            return Err(TrackerError::DuplicateName {
                kind: EntityKind::Requirement,
                name: requirement.name().to_string(),
            });
        }

        let id = requirement.id().clone();
        let name = requirement.name().to_string();
        self.requirements.push(requirement);

        self.notify(TrackerEvent::RequirementAdded {
            application: self.name.clone(),
            requirement: name,
        });
        Ok(id)
    }

    /// Overrides the derived state with persisted values.
    pub(crate) fn restore_progress(&mut self, completed: bool, progress: u8) {
        self.completed = completed;
        self.progress = progress.min(100);
    }

    fn notify(&self, event: TrackerEvent) {
        if let Some(sink) = &self.sink {
            sink.record(&event);
        }
    }
}
