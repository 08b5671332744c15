use app_tracker::Application;
use std::io::{self, Write};

pub(crate) fn application_table<W: Write>(
    out: &mut W,
    applications: &[&Application],
) -> io::Result<()> {
    if applications.is_empty() {
        return writeln!(out, "No applications tracked");
    }

    writeln!(
        out,
        "{:<24} | {:<12} | {:>8} | {:<19} | status",
        "name", "category", "progress", "deadline"
    )?;
    for application in applications {
        writeln!(
            out,
            "{:<24} | {:<12} | {:>7}% | {:<19} | {}",
            application.name(),
            or_dash(application.category()),
            application.progress(),
            or_dash(application.deadline_text()),
            status_label(application)
        )?;
    }
    Ok(())
}

pub(crate) fn application_detail<W: Write>(
    out: &mut W,
    application: &Application,
) -> io::Result<()> {
    writeln!(out, "{}", application.name())?;
    writeln!(out, "Category: {}", or_dash(application.category()))?;
    writeln!(out, "Deadline: {}", or_dash(application.deadline_text()))?;
    writeln!(
        out,
        "Progress: {}% ({})",
        application.progress(),
        status_label(application)
    )?;

    if application.requirements().is_empty() {
        return writeln!(out, "Requirements: none");
    }

    writeln!(out, "Requirements:")?;
    for requirement in application.requirements() {
        let mark = if requirement.is_completed() { 'x' } else { ' ' };
        match requirement.attached_file() {
            Some(path) => writeln!(
                out,
                "- [{mark}] {} ({})",
                requirement.name(),
                path.display()
            )?,
            None => writeln!(out, "- [{mark}] {}", requirement.name())?,
        }
    }
    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn status_label(application: &Application) -> &'static str {
    if application.is_completed() {
        "completed"
    } else {
        "in progress"
    }
}
