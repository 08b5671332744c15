use crate::render;
use app_tracker::error::AppError;
use app_tracker::tracker::{
    MemoryEventLog, RequirementId, SharedEventSink, SystemOpener, TracingEventSink,
};
use app_tracker::{
    Application, ApplicationList, ApplicationListReader, ApplicationListWriter, Requirement,
};
use clap::{Args, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// List applications (default command)
    List(ListArgs),
    /// Show one application with its requirements
    Show { name: String },
    /// Track a new application
    Add(AddArgs),
    /// Stop tracking an application
    Remove { name: String },
    /// Set the category of an application
    Category { name: String, category: String },
    /// Set the deadline (MM-DD-YYYY hh:mm AM/PM); an empty value clears it
    Deadline { name: String, deadline: String },
    /// Add a required document to an application
    Require {
        application: String,
        requirement: String,
    },
    /// Remove a required document from an application
    Unrequire {
        application: String,
        requirement: String,
    },
    /// Mark a required document as completed
    Complete {
        application: String,
        requirement: String,
        /// Mark it as not completed instead
        #[arg(long)]
        undo: bool,
    },
    /// Attach a file to a required document
    Attach {
        application: String,
        requirement: String,
        path: PathBuf,
    },
    /// Detach the file from a required document
    Detach {
        application: String,
        requirement: String,
    },
    /// Open the attached file with the default application
    Open {
        application: String,
        requirement: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::List(ListArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Order by deadline, undated applications last
    #[arg(long)]
    pub(crate) sort_by_deadline: bool,
    /// Only show applications in this category
    #[arg(long)]
    pub(crate) category: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct AddArgs {
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Deadline in MM-DD-YYYY hh:mm AM/PM form
    #[arg(long)]
    pub(crate) deadline: Option<String>,
}

/// The loaded store plus whether the command changed it.
struct Session {
    list: ApplicationList,
    dirty: bool,
}

impl Session {
    fn load(store: &Path) -> Result<Self, AppError> {
        let list = if store.exists() {
            ApplicationListReader::from_path(store)?
        } else {
            ApplicationList::new()
        };
        Ok(Self { list, dirty: false })
    }

    fn save(&self, store: &Path) -> Result<(), AppError> {
        if let Some(parent) = store.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        ApplicationListWriter::to_path(&self.list, store)?;
        Ok(())
    }

    fn application_mut(&mut self, name: &str) -> Result<&mut Application, AppError> {
        self.list
            .search_by_name_mut(name)
            .ok_or_else(|| not_found("application", name))
    }

    fn requirement_id(
        &self,
        application: &str,
        requirement: &str,
    ) -> Result<RequirementId, AppError> {
        self.list
            .search_by_name(application)
            .ok_or_else(|| not_found("application", application))?
            .requirement_by_name(requirement)
            .map(|req| req.id().clone())
            .ok_or_else(|| not_found("requirement", requirement))
    }
}

fn not_found(kind: &'static str, name: &str) -> AppError {
    AppError::NotFound {
        kind,
        name: name.to_string(),
    }
}

/// Loads the store, applies `command`, and saves again when it mutated.
pub(crate) fn execute<W: Write>(
    command: Command,
    store: &Path,
    print_events: bool,
    out: &mut W,
) -> Result<(), AppError> {
    let mut session = Session::load(store)?;

    let log = MemoryEventLog::new();
    let sink: SharedEventSink = if print_events {
        Arc::new(log.clone())
    } else {
        Arc::new(TracingEventSink)
    };
    session.list.set_event_sink(Some(sink));

    apply(command, &mut session, out)?;

    if session.dirty {
        session.save(store)?;
    }

    for description in log.descriptions() {
        writeln!(out, "* {description}")?;
    }
    Ok(())
}

fn apply<W: Write>(command: Command, session: &mut Session, out: &mut W) -> Result<(), AppError> {
    match command {
        Command::List(ListArgs {
            sort_by_deadline,
            category,
        }) => {
            let mut applications: Vec<&Application> = if sort_by_deadline {
                session.list.sort_by_deadline()
            } else {
                session.list.applications().iter().collect()
            };
            if let Some(category) = category {
                applications.retain(|app| app.category() == category);
            }
            render::application_table(out, &applications)?;
        }
        Command::Show { name } => {
            let application = session
                .list
                .search_by_name(&name)
                .ok_or_else(|| not_found("application", &name))?;
            render::application_detail(out, application)?;
        }
        Command::Add(AddArgs {
            name,
            category,
            deadline,
        }) => {
            let mut application = Application::new(name);
            if let Some(category) = category {
                application.set_category(category);
            }
            if let Some(deadline) = deadline {
                application.set_deadline(&deadline)?;
            }
            let name = application.name().to_string();
            session.list.add(application)?;
            session.dirty = true;
            writeln!(out, "Added application {name}")?;
        }
        Command::Remove { name } => {
            let id = session
                .list
                .search_by_name(&name)
                .map(|app| app.id().clone())
                .ok_or_else(|| not_found("application", &name))?;
            session.list.remove(&id);
            session.dirty = true;
            writeln!(out, "Removed application {name}")?;
        }
        Command::Category { name, category } => {
            session.application_mut(&name)?.set_category(category);
            session.dirty = true;
        }
        Command::Deadline { name, deadline } => {
            session.application_mut(&name)?.set_deadline(&deadline)?;
            session.dirty = true;
        }
        Command::Require {
            application,
            requirement,
        } => {
            let app = session.application_mut(&application)?;
            app.add_requirement(Requirement::new(requirement))?;
            let progress = app.progress();
            session.dirty = true;
            writeln!(out, "{application}: {progress}% complete")?;
        }
        Command::Unrequire {
            application,
            requirement,
        } => {
            let id = session.requirement_id(&application, &requirement)?;
            let app = session.application_mut(&application)?;
            app.remove_requirement(&id);
            let progress = app.progress();
            session.dirty = true;
            writeln!(out, "{application}: {progress}% complete")?;
        }
        Command::Complete {
            application,
            requirement,
            undo,
        } => {
            let id = session.requirement_id(&application, &requirement)?;
            let app = session.application_mut(&application)?;
            app.change_requirement_status(&id, !undo);
            let progress = app.progress();
            session.dirty = true;
            writeln!(out, "{application}: {progress}% complete")?;
        }
        Command::Attach {
            application,
            requirement,
            path,
        } => {
            let id = session.requirement_id(&application, &requirement)?;
            let attached = session
                .application_mut(&application)?
                .requirement_mut(&id)
                .is_some_and(|req| req.attach_file(&path));
            if !attached {
                return Err(AppError::InvalidFile {
                    path: path.display().to_string(),
                });
            }
            session.dirty = true;
        }
        Command::Detach {
            application,
            requirement,
        } => {
            let id = session.requirement_id(&application, &requirement)?;
            if let Some(req) = session.application_mut(&application)?.requirement_mut(&id) {
                req.detach_file();
            }
            session.dirty = true;
        }
        Command::Open {
            application,
            requirement,
        } => {
            let id = session.requirement_id(&application, &requirement)?;
            if let Some(req) = session
                .list
                .search_by_name(&application)
                .and_then(|app| app.requirement(&id))
            {
                req.open_attached_file(&SystemOpener)?;
            }
        }
    }

    Ok(())
}
