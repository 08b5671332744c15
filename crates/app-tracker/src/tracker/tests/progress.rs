use chrono::NaiveDate;

use super::common::*;
use crate::tracker::{Application, EntityKind, Requirement, TrackerError};

#[test]
fn new_application_starts_empty() {
    let application = Application::new("BCIT");

    assert_eq!(application.name(), "BCIT");
    assert_eq!(application.category(), "");
    assert_eq!(application.deadline(), None);
    assert_eq!(application.deadline_text(), "");
    assert_eq!(application.progress(), 0);
    assert!(!application.is_completed());
    assert!(application.requirements().is_empty());
}

#[test]
fn progress_follows_requirement_completion() {
    let (mut application, ids) =
        application_with_requirements("BCIT", &[("Transcript", true), ("Resume", false)]);
    assert_eq!(application.progress(), 50);
    assert!(!application.is_completed());

    assert_eq!(application.change_requirement_status(&ids[1], true), Some(true));
    assert_eq!(application.progress(), 100);
    assert!(application.is_completed());
}

#[test]
fn progress_truncates_toward_zero() {
    let (application, _) = application_with_requirements(
        "UBC",
        &[("Transcript", true), ("Resume", false), ("Essay", false)],
    );
    assert_eq!(application.progress(), 33);

    let (application, _) = application_with_requirements(
        "SFU",
        &[("Transcript", true), ("Resume", true), ("Essay", false)],
    );
    assert_eq!(application.progress(), 66);
}

#[test]
fn removing_last_requirement_resets_progress() {
    let (mut application, ids) = application_with_requirements("BCIT", &[("Transcript", true)]);
    assert_eq!(application.progress(), 100);
    assert!(application.is_completed());

    let removed = application
        .remove_requirement(&ids[0])
        .expect("requirement removed");
    assert_eq!(removed.name(), "Transcript");
    assert_eq!(application.progress(), 0);
    assert!(!application.is_completed());
}

#[test]
fn removing_requirement_recomputes_remaining_set() {
    let (mut application, ids) = application_with_requirements(
        "BCIT",
        &[("Transcript", true), ("Resume", false), ("Essay", true)],
    );
    assert_eq!(application.progress(), 66);

    application.remove_requirement(&ids[1]);
    assert_eq!(application.progress(), 100);
    assert!(application.is_completed());
    let remaining: Vec<_> = application
        .requirements()
        .iter()
        .map(Requirement::name)
        .collect();
    assert_eq!(remaining, vec!["Transcript", "Essay"]);
}

#[test]
fn removing_unknown_requirement_is_a_no_op() {
    let (mut application, _) = application_with_requirements("BCIT", &[("Transcript", false)]);
    let stranger = Requirement::new("Transcript");

    assert!(application.remove_requirement(stranger.id()).is_none());
    assert_eq!(application.requirements().len(), 1);
    assert_eq!(application.progress(), 0);
}

#[test]
fn duplicate_requirement_leaves_state_untouched() {
    let (mut application, _) =
        application_with_requirements("BCIT", &[("Transcript", true), ("Resume", false)]);

    let mut duplicate = Requirement::new("Resume");
    duplicate.change_status(true);
    let err = application
        .add_requirement(duplicate)
        .expect_err("duplicate rejected");

    assert_eq!(
        err,
        TrackerError::DuplicateName {
            kind: EntityKind::Requirement,
            name: "Resume".to_string(),
        }
    );
    assert_eq!(application.requirements().len(), 2);
    assert_eq!(application.progress(), 50);
    assert!(!application.is_completed());
}

#[test]
fn requirement_names_are_case_sensitive() {
    let (mut application, _) = application_with_requirements("BCIT", &[("Resume", false)]);
    application
        .add_requirement(Requirement::new("resume"))
        .expect("different case is a different name");
    assert_eq!(application.requirements().len(), 2);
}

#[test]
fn manual_recompute_picks_up_direct_status_changes() {
    let (mut application, ids) =
        application_with_requirements("BCIT", &[("Transcript", false), ("Resume", false)]);

    application
        .requirement_mut(&ids[0])
        .expect("requirement present")
        .change_status(true);
    assert_eq!(application.progress(), 0, "not observed until recompute");

    application.recompute();
    assert_eq!(application.progress(), 50);
}

#[test]
fn change_status_of_foreign_requirement_returns_none() {
    let (mut application, _) = application_with_requirements("BCIT", &[("Transcript", false)]);
    let foreign = Requirement::new("Essay");
    assert_eq!(application.change_requirement_status(foreign.id(), true), None);
}

#[test]
fn progress_invariant_holds_across_mutation_sequences() {
    let mut application = Application::new("Grant");
    let mut ids = Vec::new();

    for (index, completed) in [true, false, true, true, false, false, true].iter().enumerate() {
        let mut requirement = Requirement::new(format!("Document {index}"));
        requirement.change_status(*completed);
        ids.push(application.add_requirement(requirement).expect("unique"));
        assert_consistent(&application);
    }

    for id in ids.iter().step_by(2) {
        application.remove_requirement(id);
        assert_consistent(&application);
    }
    for id in &ids {
        application.change_requirement_status(id, true);
        assert_consistent(&application);
    }
    assert!(application.is_completed());
}

fn assert_consistent(application: &Application) {
    let total = application.requirements().len();
    let done = application
        .requirements()
        .iter()
        .filter(|req| req.is_completed())
        .count();

    let all_done = total > 0 && done == total;
    assert_eq!(application.is_completed(), all_done);
    assert_eq!(application.progress() == 100, all_done);
    if total > 0 && !all_done {
        assert_eq!(usize::from(application.progress()), done * 100 / total);
    }
}

#[test]
fn set_deadline_keeps_text_verbatim() {
    let mut application = Application::new("BCIT");
    application
        .set_deadline("04-20-2023 11:59 pm")
        .expect("valid deadline");

    assert_eq!(application.deadline(), Some(at(2023, 4, 20)));
    assert_eq!(application.deadline_text(), "04-20-2023 11:59 pm");
}

#[test]
fn invalid_deadline_keeps_previous_value() {
    let mut application = Application::new("BCIT");
    application
        .set_deadline("04-20-2023 11:59 PM")
        .expect("valid deadline");

    let err = application
        .set_deadline("2023-04-20")
        .expect_err("wrong layout rejected");
    assert!(matches!(err, TrackerError::InvalidDateFormat { .. }));
    assert_eq!(application.deadline(), Some(at(2023, 4, 20)));
    assert_eq!(application.deadline_text(), "04-20-2023 11:59 PM");
}

#[test]
fn padded_deadline_is_rejected_and_not_stored() {
    let mut application = Application::new("BCIT");
    application
        .set_deadline("04-20-2023 11:59 PM")
        .expect("valid deadline");

    let err = application
        .set_deadline("  05-01-2023 11:59 PM\n")
        .expect_err("padded text rejected");
    assert_eq!(
        err,
        TrackerError::InvalidDateFormat {
            value: "  05-01-2023 11:59 PM\n".to_string()
        }
    );
    assert_eq!(application.deadline(), Some(at(2023, 4, 20)));
    assert_eq!(application.deadline_text(), "04-20-2023 11:59 PM");
}

#[test]
fn empty_deadline_clears_existing_one() {
    let mut application = Application::new("BCIT");
    application.set_deadline_at(at(2023, 6, 1));
    assert_eq!(application.deadline_text(), "06-01-2023 11:59 PM");

    application.set_deadline("").expect("empty clears");
    assert_eq!(application.deadline(), None);
    assert_eq!(application.deadline_text(), "");
}

#[test]
fn deadline_timestamp_is_truncated_to_the_minute() {
    let mut application = Application::new("BCIT");
    let precise = NaiveDate::from_ymd_opt(2023, 4, 20)
        .expect("valid date")
        .and_hms_milli_opt(23, 59, 42, 500)
        .expect("valid time");

    application.set_deadline_at(precise);

    assert_eq!(application.deadline(), Some(at(2023, 4, 20)));
    assert_eq!(application.deadline_text(), "04-20-2023 11:59 PM");

    let mut reparsed = Application::new("BCIT");
    reparsed
        .set_deadline(application.deadline_text())
        .expect("display text parses");
    assert_eq!(reparsed.deadline(), application.deadline());
}

#[test]
fn set_category_replaces_value() {
    let mut application = Application::new("BCIT");
    application.set_category("school");
    application.set_category("work");
    assert_eq!(application.category(), "work");
}
