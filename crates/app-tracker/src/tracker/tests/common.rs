use chrono::{NaiveDate, NaiveDateTime};

use crate::tracker::{Application, ApplicationList, Requirement, RequirementId};

pub(super) fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(23, 59, 0)
        .expect("valid time")
}

pub(super) fn application_with_requirements(
    name: &str,
    requirements: &[(&str, bool)],
) -> (Application, Vec<RequirementId>) {
    let mut application = Application::new(name);
    let ids = requirements
        .iter()
        .map(|(requirement, completed)| {
            let mut requirement = Requirement::new(*requirement);
            requirement.change_status(*completed);
            application
                .add_requirement(requirement)
                .expect("requirement names are unique")
        })
        .collect();
    (application, ids)
}

pub(super) fn scheduled(name: &str, deadline: Option<NaiveDateTime>) -> Application {
    let mut application = Application::new(name);
    if let Some(deadline) = deadline {
        application.set_deadline_at(deadline);
    }
    application
}

pub(super) fn list_of(applications: Vec<Application>) -> ApplicationList {
    let mut list = ApplicationList::new();
    for application in applications {
        list.add(application).expect("application names are unique");
    }
    list
}

pub(super) fn names<'a>(applications: &[&'a Application]) -> Vec<&'a str> {
    applications.iter().map(|app| app.name()).collect()
}
