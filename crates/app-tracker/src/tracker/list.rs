use super::application::Application;
use super::domain::{ApplicationId, EntityKind, TrackerError};
use super::events::{SharedEventSink, TrackerEvent};

/// Root collection of every tracked application, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ApplicationList {
    applications: Vec<Application>,
    sink: Option<SinkHandle>,
}

#[derive(Clone)]
struct SinkHandle(SharedEventSink);

impl std::fmt::Debug for SinkHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EventSink")
    }
}

impl ApplicationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches (or detaches) an event sink for the list and every application in it.
    pub fn set_event_sink(&mut self, sink: Option<SharedEventSink>) {
        for application in &mut self.applications {
            application.set_event_sink(sink.clone());
        }
        self.sink = sink.map(SinkHandle);
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn get(&self, id: &ApplicationId) -> Option<&Application> {
        self.applications.iter().find(|app| app.id() == id)
    }

    pub fn get_mut(&mut self, id: &ApplicationId) -> Option<&mut Application> {
        self.applications.iter_mut().find(|app| app.id() == id)
    }

    pub fn add(&mut self, mut application: Application) -> Result<ApplicationId, TrackerError> {
        if self
            .applications
            .iter()
            .any(|existing| existing.name() == application.name())
        {
            return Err(TrackerError::DuplicateName {
                kind: EntityKind::Application,
                name: application.name().to_string(),
            });
        }

        if let Some(SinkHandle(sink)) = &self.sink {
            application.set_event_sink(Some(sink.clone()));
        }

        let id = application.id().clone();
        let name = application.name().to_string();
        self.applications.push(application);

        self.notify(TrackerEvent::ApplicationAdded { application: name });
        Ok(id)
    }

    /// Removes the application with the given id; absent ids are ignored.
    pub fn remove(&mut self, id: &ApplicationId) -> Option<Application> {
        let index = self.applications.iter().position(|app| app.id() == id)?;
        let mut removed = self.applications.remove(index);
        removed.set_event_sink(None);

        self.notify(TrackerEvent::ApplicationRemoved {
            application: removed.name().to_string(),
        });
        Some(removed)
    }

    /// Applications with a deadline, earliest first, followed by the ones
    /// without a deadline in their original order. Ties keep insertion order.
    pub fn sort_by_deadline(&self) -> Vec<&Application> {
        let (mut scheduled, unscheduled): (Vec<&Application>, Vec<&Application>) = self
            .applications
            .iter()
            .partition(|app| app.deadline().is_some());

        scheduled.sort_by_key(|app| app.deadline());
        scheduled.extend(unscheduled);
        scheduled
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|app| app.category() == category)
            .collect()
    }

    pub fn search_by_name(&self, name: &str) -> Option<&Application> {
        self.applications.iter().find(|app| app.name() == name)
    }

    pub fn search_by_name_mut(&mut self, name: &str) -> Option<&mut Application> {
        self.applications.iter_mut().find(|app| app.name() == name)
    }

    fn notify(&self, event: TrackerEvent) {
        if let Some(SinkHandle(sink)) = &self.sink {
            sink.record(&event);
        }
    }
}
